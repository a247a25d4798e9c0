// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use ark_bn254::Fr;
use audit_params::AuditPreset;
use audit_test_helpers::{init_tracing, AuditFixture};
use audit_zk_helpers::{
    compute_owner_commitment, AuditCircuit, AuditConstraintSystem, Circuit, CircuitRegistry,
    Computation, Witness, ZkHelpersError,
};

#[test]
fn honest_audit_witness_satisfies_the_circuit() -> Result<()> {
    let _guard = init_tracing("info");
    let mut fixture = AuditFixture::new(AuditPreset::InsecureAudit64, 64)?;
    let params = fixture.params.clone();
    let input = fixture.circuit_input();

    let witness = Witness::compute(&params, &input)?;
    let cs = AuditConstraintSystem::build(&params, &fixture.keys.public)?;
    let assignment = witness.assignment(&cs.system, &cs.variables)?;
    cs.system.is_satisfied(&assignment)?;

    assert_eq!(
        witness.wa_commitment,
        compute_owner_commitment(witness.owner_x, witness.owner_y)?
    );
    Ok(())
}

#[test]
fn foreign_owner_point_is_rejected() -> Result<()> {
    let mut fixture = AuditFixture::new(AuditPreset::InsecureAudit64, 65)?;
    let params = fixture.params.clone();
    let input = fixture.circuit_input();

    let mut witness = Witness::compute(&params, &input)?;
    // A different secret scalar no longer opens the encrypted point.
    witness.secret_key += Fr::from(1u64);
    let cs = AuditConstraintSystem::build(&params, &fixture.keys.public)?;
    let assignment = witness.assignment(&cs.system, &cs.variables)?;
    match cs.system.is_satisfied(&assignment) {
        Err(ZkHelpersError::Unsatisfied { kind, label, .. }) => {
            assert_eq!(kind, "fixed-base-mul");
            assert_eq!(label, "owner point");
            Ok(())
        }
        other => bail!("expected the owner point to fail, got {other:?}"),
    }
}

#[test]
fn message_must_encode_the_owner_point() -> Result<()> {
    let mut fixture = AuditFixture::new(AuditPreset::InsecureAudit64, 66)?;
    let params = fixture.params.clone();
    let input = fixture.circuit_input();

    let mut witness = Witness::compute(&params, &input)?;
    witness.msg[0] ^= 1;
    let cs = AuditConstraintSystem::build(&params, &fixture.keys.public)?;
    let assignment = witness.assignment(&cs.system, &cs.variables)?;
    match cs.system.is_satisfied(&assignment) {
        Err(ZkHelpersError::Unsatisfied { kind, label, .. }) => {
            assert_eq!(kind, "byte-decomposition");
            assert_eq!(label, "owner_x bytes");
            Ok(())
        }
        other => bail!("expected the byte decomposition to fail, got {other:?}"),
    }
}

#[test]
fn registry_lists_the_audit_circuit() {
    let registry = CircuitRegistry::with_defaults();
    assert_eq!(registry.list_circuits(), vec![AuditCircuit::NAME.to_string()]);
    assert!(AuditCircuit.supports(AuditPreset::InsecureAudit64));
    assert!(AuditCircuit.supports(AuditPreset::Audit1024));
}
