// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Code generation for the audit circuit: the prover input file and the constants record.

use crate::circuits::audit::circuit::{AuditCircuit, AuditCircuitInput};
use crate::circuits::audit::computation::{AuditConfigs, Witness};
use crate::circuits::computation::Computation;
use crate::utils::{bigint_to_field, i64_to_field};
use crate::CircuitCodegen;
use crate::CircuitsErrors;
use crate::{Artifacts, Configs, Toml};
use ark_bn254::Fr as Field;
use audit_params::RlweParams;
use audit_utils::formatters::to_hex_field;
use serde::{Deserialize, Serialize};

/// Implementation of [`CircuitCodegen`] for [`AuditCircuit`].
impl CircuitCodegen for AuditCircuit {
    type Params = RlweParams;
    type Input = AuditCircuitInput;
    type Error = CircuitsErrors;

    fn codegen(
        &self,
        params: &Self::Params,
        input: &Self::Input,
    ) -> Result<Artifacts, Self::Error> {
        let witness = Witness::compute(params, input)?;
        let configs = AuditConfigs::compute(params, &())?;

        let toml = generate_toml(&witness)?;
        let configs = generate_configs(&configs)?;

        Ok(Artifacts { toml, configs })
    }
}

/// Prover input layout. Every value is a proof-field element in hex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlJson {
    pub wa_commitment: String,
    pub ct_commitment: String,
    pub c0_packed: Vec<String>,
    pub c1_packed: Vec<String>,
    pub secret_key: String,
    pub owner_x: String,
    pub owner_y: String,
    pub msg: Vec<String>,
    pub c0: Vec<String>,
    pub c1: Vec<String>,
    pub r: Vec<String>,
    pub e1: Vec<String>,
    pub e2: Vec<String>,
    pub k0: Vec<String>,
    pub k1: Vec<String>,
}

fn hex_all<I: IntoIterator<Item = Field>>(values: I) -> Vec<String> {
    values.into_iter().map(|v| to_hex_field(&v)).collect()
}

pub fn generate_toml(witness: &Witness) -> Result<Toml, CircuitsErrors> {
    let toml_json = TomlJson {
        wa_commitment: to_hex_field(&witness.wa_commitment),
        ct_commitment: to_hex_field(&witness.ct_commitment),
        c0_packed: hex_all(witness.packed.c0.iter().copied()),
        c1_packed: hex_all(witness.packed.c1.iter().copied()),
        secret_key: to_hex_field(&witness.secret_key),
        owner_x: to_hex_field(&witness.owner_x),
        owner_y: to_hex_field(&witness.owner_y),
        msg: hex_all(witness.msg.iter().map(|&v| Field::from(v))),
        c0: hex_all(witness.c0.iter().map(|&v| Field::from(v))),
        c1: hex_all(witness.c1.iter().map(|&v| Field::from(v))),
        r: hex_all(witness.r.iter().map(|&v| i64_to_field(v))),
        e1: hex_all(witness.e1.iter().map(|&v| i64_to_field(v))),
        e2: hex_all(witness.e2.iter().map(|&v| i64_to_field(v))),
        k0: hex_all(witness.k0.iter().map(bigint_to_field)),
        k1: hex_all(witness.k1.iter().map(bigint_to_field)),
    };

    Ok(toml::to_string(&toml_json)?)
}

pub fn generate_configs(configs: &AuditConfigs) -> Result<Configs, CircuitsErrors> {
    Ok(serde_json::to_string_pretty(configs)?)
}
