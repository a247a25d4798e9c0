// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Computation types for the audit circuit: constants, bounds, bit widths, and the witness.
//!
//! [`AuditConfigs`], [`Bounds`], [`Bits`] and [`Witness`] are produced from RLWE
//! parameters and (for the witness) an [`AuditCircuitInput`]. They implement
//! [`Computation`] and are used by codegen and the constraint system.

use crate::calculate_bit_width;
use crate::circuits::audit::circuit::{AuditCircuit, AuditCircuitInput};
use crate::circuits::audit::system::AuditVariables;
use crate::commitments::{compute_ciphertext_commitment, compute_public_key_commitment};
use crate::constraints::{Assignment, ConstraintSystem};
use crate::errors::ZkHelpersError;
use crate::packing::{PackedCiphertext, PackedPublicKey};
use crate::range::range_encode;
use crate::utils::{bigint_to_field, i64_to_field};
use crate::CircuitsErrors;
use crate::{CircuitComputation, Computation};
use ark_bn254::Fr as Field;
use audit_params::RlweParams;
use audit_polynomial::RingElement;
use audit_rlwe::{encrypt_with_randomness, Ciphertext, Message};
use audit_utils::formatters::field_hex;
use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};
use tracing::info;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Output of [`CircuitComputation::compute`] for [`AuditCircuit`]: bounds, bit widths, and witness.
#[derive(Debug)]
pub struct AuditComputationOutput {
    pub bounds: Bounds,
    pub bits: Bits,
    pub witness: Witness,
}

/// Implementation of [`CircuitComputation`] for [`AuditCircuit`].
impl CircuitComputation for AuditCircuit {
    type Params = RlweParams;
    type Input = AuditCircuitInput;
    type Output = AuditComputationOutput;
    type Error = CircuitsErrors;

    fn compute(params: &Self::Params, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let bounds = Bounds::compute(params, &())?;
        let bits = Bits::compute(params, &bounds)?;
        let witness = Witness::compute(params, input)?;

        Ok(AuditComputationOutput {
            bounds,
            bits,
            witness,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfigs {
    pub n: usize,
    pub l: usize,
    pub q: u64,
    pub t: u64,
    pub delta: u64,
    pub coordinate_bytes: usize,
    pub pack_width: usize,
    pub pack_bits: u32,
    pub bits: Bits,
    pub bounds: Bounds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bits {
    /// Width of the offset range check on `r`, `e1` and `e2`.
    pub noise_bit: u32,
    /// Width of every packed ciphertext limb.
    pub ct_bit: u32,
    pub msg_bit: u32,
    /// Width of the offset range check on `k0` and `k1`.
    pub quotient_bit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub noise_bound: BigUint,
    pub range_offset: BigUint,
    pub ct_bound: BigUint,
    pub quotient_bound: BigUint,
    pub relation_bound: BigUint,
}

impl Computation for AuditConfigs {
    type Params = RlweParams;
    type Input = ();
    type Error = CircuitsErrors;

    fn compute(params: &Self::Params, _: &Self::Input) -> Result<Self, CircuitsErrors> {
        let bounds = Bounds::compute(params, &())?;
        let bits = Bits::compute(params, &bounds)?;

        Ok(AuditConfigs {
            n: params.degree(),
            l: params.message_slots(),
            q: params.ciphertext_modulus(),
            t: params.plaintext_modulus(),
            delta: params.delta(),
            coordinate_bytes: params.coordinate_bytes(),
            pack_width: params.pack_width(),
            pack_bits: params.pack_bits(),
            bits,
            bounds,
        })
    }
}

impl Computation for Bounds {
    type Params = RlweParams;
    type Input = ();
    type Error = CircuitsErrors;

    fn compute(params: &Self::Params, _: &Self::Input) -> Result<Self, Self::Error> {
        let report = params.noise_report();
        Ok(Bounds {
            noise_bound: BigUint::from(params.noise_bound()),
            range_offset: BigUint::from(params.range_offset()),
            ct_bound: BigUint::from(params.ciphertext_modulus() - 1),
            quotient_bound: report.max_quotient.clone(),
            relation_bound: report.max_relation.clone(),
        })
    }
}

impl Computation for Bits {
    type Params = RlweParams;
    type Input = Bounds;
    type Error = CircuitsErrors;

    fn compute(params: &Self::Params, data: &Self::Input) -> Result<Self, Self::Error> {
        // k + quotient_bound lies in [0, 2 * quotient_bound].
        let quotient_span = BigInt::from(data.quotient_bound.clone()) * 2;
        Ok(Bits {
            noise_bit: params.range_bits(),
            ct_bit: params.pack_bits(),
            msg_bit: 8,
            quotient_bit: calculate_bit_width(quotient_span),
        })
    }
}

/// Public and private values of one audit encryption. The field elements
/// and small vectors are wiped on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Witness {
    #[serde(with = "field_hex")]
    pub wa_commitment: Field,
    #[serde(with = "field_hex")]
    pub ct_commitment: Field,
    #[zeroize(skip)]
    pub packed: PackedCiphertext,
    /// Commitment to the packed public key. Not a circuit input: the key
    /// enters the system as constants.
    #[serde(with = "field_hex")]
    pub pk_commitment: Field,
    #[serde(with = "field_hex")]
    pub secret_key: Field,
    #[serde(with = "field_hex")]
    pub owner_x: Field,
    #[serde(with = "field_hex")]
    pub owner_y: Field,
    pub msg: Vec<u64>,
    pub c0: Vec<u64>,
    pub c1: Vec<u64>,
    pub r: Vec<i64>,
    pub e1: Vec<i64>,
    pub e2: Vec<i64>,
    #[serde(with = "decimal_vec")]
    #[zeroize(skip)]
    pub k0: Vec<BigInt>,
    #[serde(with = "decimal_vec")]
    #[zeroize(skip)]
    pub k1: Vec<BigInt>,
}

impl std::fmt::Debug for Witness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Witness")
            .field("wa_commitment", &self.wa_commitment)
            .field("ct_commitment", &self.ct_commitment)
            .field("pk_commitment", &self.pk_commitment)
            .finish_non_exhaustive()
    }
}

impl Computation for Witness {
    type Params = RlweParams;
    type Input = AuditCircuitInput;
    type Error = CircuitsErrors;

    fn compute(params: &Self::Params, input: &Self::Input) -> Result<Self, Self::Error> {
        let owner_x = input.owner.x();
        let owner_y = input.owner.y();
        let message = Message::from_owner_point(&owner_x, &owner_y, params)?;

        let encryption = encrypt_with_randomness(
            &input.public_key,
            &message,
            input.randomness.clone(),
            params,
        )?;
        let randomness = &encryption.witness.randomness;
        for values in [randomness.r(), randomness.e1(), randomness.e2()] {
            range_encode(values, params.range_offset(), params.range_bits())?;
        }

        let packed = PackedCiphertext::new(&encryption.ciphertext, params)?;
        let ct_commitment = compute_ciphertext_commitment(&packed);
        let wa_commitment = input.owner.commitment()?;
        let pk_commitment =
            compute_public_key_commitment(&PackedPublicKey::new(&input.public_key, params)?);

        info!(
            degree = params.degree(),
            slots = params.message_slots(),
            packed = packed.c0.len() + packed.c1.len(),
            "computed audit witness"
        );

        Ok(Witness {
            wa_commitment,
            ct_commitment,
            pk_commitment,
            secret_key: *input.owner.secret(),
            owner_x,
            owner_y,
            msg: message.slots().to_vec(),
            c0: encryption.ciphertext.c0().to_vec(),
            c1: encryption.ciphertext.c1().coefficients().to_vec(),
            r: randomness.r().to_vec(),
            e1: randomness.e1().to_vec(),
            e2: randomness.e2().to_vec(),
            k0: encryption.witness.k0.clone(),
            k1: encryption.witness.k1.clone(),
            packed,
        })
    }
}

impl Witness {
    /// The ciphertext carried by this witness.
    pub fn ciphertext(&self, params: &RlweParams) -> Result<Ciphertext, CircuitsErrors> {
        let c1 = RingElement::new(self.c1.clone(), params)?;
        Ok(Ciphertext::new(self.c0.clone(), c1, params)?)
    }

    /// Public values in declaration order.
    pub fn public_inputs(&self) -> Vec<Field> {
        let mut values = vec![self.wa_commitment, self.ct_commitment];
        values.extend(self.packed.elements());
        values
    }

    /// Places every value on its variable of an audit constraint system.
    pub fn assignment(
        &self,
        system: &ConstraintSystem,
        variables: &AuditVariables,
    ) -> Result<Assignment, ZkHelpersError> {
        let mut assignment = Assignment::for_system(system);
        assignment.set(variables.wa_commitment, self.wa_commitment)?;
        assignment.set(variables.ct_commitment, self.ct_commitment)?;
        assignment.set_all(&variables.c0_packed, self.packed.c0.iter().copied())?;
        assignment.set_all(&variables.c1_packed, self.packed.c1.iter().copied())?;

        assignment.set(variables.secret_key, self.secret_key)?;
        assignment.set(variables.owner_x, self.owner_x)?;
        assignment.set(variables.owner_y, self.owner_y)?;
        for (vars, values) in [
            (&variables.msg, &self.msg),
            (&variables.c0, &self.c0),
            (&variables.c1, &self.c1),
        ] {
            assignment.set_all(vars, values.iter().map(|&v| Field::from(v)))?;
        }
        for (vars, values) in [
            (&variables.r, &self.r),
            (&variables.e1, &self.e1),
            (&variables.e2, &self.e2),
        ] {
            assignment.set_all(vars, values.iter().map(|&v| i64_to_field(v)))?;
        }
        for (vars, values) in [(&variables.k0, &self.k0), (&variables.k1, &self.k1)] {
            assignment.set_all(vars, values.iter().map(bigint_to_field))?;
        }
        Ok(assignment)
    }
}

/// Quotient witnesses as decimal strings.
mod decimal_vec {
    use num_bigint::BigInt;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(values: &[BigInt], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| v.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BigInt>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| BigInt::from_str(s).map_err(D::Error::custom))
            .collect()
    }
}
