// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Constraint system of the audit circuit for one public key.
//!
//! The public key rows enter as constants, so each ciphertext coefficient is
//! bound by one linear equation over the proof field:
//!
//! ```text
//! c0[i] + k0[i]*q - <B_i, r> - e1[i] - delta*msg[i] == 0
//! c1[i] + k1[i]*q - <A_i, r> - e2[i]                == 0
//! ```

use crate::circuits::audit::computation::{Bits, Bounds};
use crate::constraints::{Constraint, ConstraintSystem, LinearCombination, Variable};
use crate::utils::bigint_to_field;
use crate::{CircuitsErrors, Computation};
use ark_bn254::Fr as Field;
use audit_params::RlweParams;
use audit_polynomial::{PolynomialError, RingElement};
use audit_rlwe::PublicKey;
use num_bigint::BigInt;
use rayon::prelude::*;
use tracing::info;

/// Variables of the audit circuit, in allocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditVariables {
    pub wa_commitment: Variable,
    pub ct_commitment: Variable,
    pub c0_packed: Vec<Variable>,
    pub c1_packed: Vec<Variable>,
    pub secret_key: Variable,
    pub owner_x: Variable,
    pub owner_y: Variable,
    pub msg: Vec<Variable>,
    pub c0: Vec<Variable>,
    pub c1: Vec<Variable>,
    pub r: Vec<Variable>,
    pub e1: Vec<Variable>,
    pub e2: Vec<Variable>,
    pub k0: Vec<Variable>,
    pub k1: Vec<Variable>,
}

impl AuditVariables {
    fn allocate(system: &mut ConstraintSystem, params: &RlweParams) -> Self {
        let n = params.degree();
        let l = params.message_slots();

        let wa_commitment = system.alloc_public("wa_commitment");
        let ct_commitment = system.alloc_public("ct_commitment");
        let c0_packed = system.alloc_public_vec("c0_packed", params.packed_len(l));
        let c1_packed = system.alloc_public_vec("c1_packed", params.packed_len(n));

        Self {
            wa_commitment,
            ct_commitment,
            c0_packed,
            c1_packed,
            secret_key: system.alloc_private("secret_key"),
            owner_x: system.alloc_private("owner_x"),
            owner_y: system.alloc_private("owner_y"),
            msg: system.alloc_private_vec("msg", l),
            c0: system.alloc_private_vec("c0", l),
            c1: system.alloc_private_vec("c1", n),
            r: system.alloc_private_vec("r", n),
            e1: system.alloc_private_vec("e1", l),
            e2: system.alloc_private_vec("e2", n),
            k0: system.alloc_private_vec("k0", l),
            k1: system.alloc_private_vec("k1", n),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuditConstraintSystem {
    pub system: ConstraintSystem,
    pub variables: AuditVariables,
}

impl AuditConstraintSystem {
    pub fn build(params: &RlweParams, public_key: &PublicKey) -> Result<Self, CircuitsErrors> {
        let bounds = Bounds::compute(params, &())?;
        let bits = Bits::compute(params, &bounds)?;

        let mut system = ConstraintSystem::new();
        let vars = AuditVariables::allocate(&mut system, params);

        system.enforce(
            "owner point",
            Constraint::FixedBaseMul {
                scalar: vars.secret_key,
                x: vars.owner_x,
                y: vars.owner_y,
            },
        );
        system.enforce(
            "wa commitment",
            Constraint::PairHash {
                left: vars.owner_x,
                right: vars.owner_y,
                digest: vars.wa_commitment,
            },
        );

        let (x_bytes, y_bytes) = vars.msg.split_at(params.coordinate_bytes());
        system.enforce(
            "owner_x bytes",
            Constraint::ByteDecomposition {
                value: vars.owner_x,
                bytes: x_bytes.to_vec(),
            },
        );
        system.enforce(
            "owner_y bytes",
            Constraint::ByteDecomposition {
                value: vars.owner_y,
                bytes: y_bytes.to_vec(),
            },
        );

        let noise_offset = Field::from(params.range_offset());
        for (label, values) in [("r", &vars.r), ("e1", &vars.e1), ("e2", &vars.e2)] {
            for (i, &value) in values.iter().enumerate() {
                system.enforce(
                    format!("{label}[{i}] range"),
                    Constraint::Range {
                        value,
                        offset: noise_offset,
                        bits: bits.noise_bit,
                    },
                );
            }
        }

        let quotient_offset = bigint_to_field(&BigInt::from(bounds.quotient_bound.clone()));
        for (label, values) in [("k0", &vars.k0), ("k1", &vars.k1)] {
            for (i, &value) in values.iter().enumerate() {
                system.enforce(
                    format!("{label}[{i}] range"),
                    Constraint::Range {
                        value,
                        offset: quotient_offset,
                        bits: bits.quotient_bit,
                    },
                );
            }
        }

        for (label, packed, limbs) in [
            ("c0", &vars.c0_packed, &vars.c0),
            ("c1", &vars.c1_packed, &vars.c1),
        ] {
            for (i, (&packed, chunk)) in packed
                .iter()
                .zip(limbs.chunks(params.pack_width()))
                .enumerate()
            {
                system.enforce(
                    format!("{label}_packed[{i}]"),
                    Constraint::Pack {
                        packed,
                        limbs: chunk.to_vec(),
                        limb_bits: bits.ct_bit,
                    },
                );
            }
        }

        system.enforce(
            "ct commitment",
            Constraint::SpongeDigest {
                inputs: vars.c0_packed.iter().chain(&vars.c1_packed).copied().collect(),
                digest: vars.ct_commitment,
            },
        );

        let q = Field::from(params.ciphertext_modulus());
        let delta = Field::from(params.delta());
        let c0_rows = switched_rows(
            public_key.b(),
            &vars.c0,
            &vars.k0,
            &vars.r,
            q,
            |i, lc| {
                lc.add_term(-Field::from(1u64), vars.e1[i])
                    .add_term(-delta, vars.msg[i]);
            },
        )?;
        for (i, lc) in c0_rows.into_iter().enumerate() {
            system.enforce(format!("c0[{i}] field switch"), Constraint::Linear(lc));
        }

        let c1_rows = switched_rows(
            public_key.a(),
            &vars.c1,
            &vars.k1,
            &vars.r,
            q,
            |i, lc| {
                lc.add_term(-Field::from(1u64), vars.e2[i]);
            },
        )?;
        for (i, lc) in c1_rows.into_iter().enumerate() {
            system.enforce(format!("c1[{i}] field switch"), Constraint::Linear(lc));
        }

        info!(
            degree = params.degree(),
            public = system.num_public(),
            private = system.num_private(),
            constraints = system.len(),
            "built audit constraint system"
        );

        Ok(Self {
            system,
            variables: vars,
        })
    }
}

/// `c[i] + k[i]*q - <row_i(poly), r> - extra_i` for every `i < c.len()`.
fn switched_rows<F>(
    poly: &RingElement,
    c: &[Variable],
    k: &[Variable],
    r: &[Variable],
    q: Field,
    extra: F,
) -> Result<Vec<LinearCombination>, PolynomialError>
where
    F: Fn(usize, &mut LinearCombination) + Sync,
{
    (0..c.len())
        .into_par_iter()
        .map(|i| -> Result<LinearCombination, PolynomialError> {
            let row = poly.negacyclic_matrix_row(i)?;
            let mut lc = LinearCombination::new();
            lc.add_term(Field::from(1u64), c[i]).add_term(q, k[i]);
            for (&coefficient, &variable) in row.iter().zip(r) {
                lc.add_term(-Field::from(coefficient), variable);
            }
            extra(i, &mut lc);
            Ok(lc)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::audit::computation::Witness;
    use crate::circuits::audit::sample::AuditSample;
    use crate::errors::ZkHelpersError;
    use audit_params::AuditPreset;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn setup(seed: u64) -> (RlweParams, AuditSample, Witness, AuditConstraintSystem) {
        let params = AuditPreset::InsecureAudit64.build().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let sample = AuditSample::generate(&params, &mut rng).unwrap();
        let witness = Witness::compute(&params, &sample.input).unwrap();
        let cs = AuditConstraintSystem::build(&params, &sample.input.public_key).unwrap();
        (params, sample, witness, cs)
    }

    #[test]
    fn layout_matches_parameters() {
        let (params, _, _, cs) = setup(1);
        let n = params.degree();
        let l = params.message_slots();
        assert_eq!(cs.system.num_public(), 2 + 10 + 10);
        assert_eq!(cs.system.num_private(), 3 + 4 * l + 4 * n);
        assert_eq!(cs.system.public_labels()[0], "wa_commitment");
        assert_eq!(cs.system.private_labels()[3], "msg[0]");
        // 2 hashes + point + 2 decompositions + ranges + packs + rows
        let expected = 1 + 1 + 2 + (2 * n + l) + (n + l) + 20 + 1 + (l + n);
        assert_eq!(cs.system.len(), expected);
    }

    #[test]
    fn honest_witness_satisfies_every_constraint() {
        let (_, _, witness, cs) = setup(2);
        let assignment = witness.assignment(&cs.system, &cs.variables).unwrap();
        cs.system.is_satisfied(&assignment).unwrap();
        assert_eq!(&assignment.public, &witness.public_inputs());
    }

    #[test]
    fn shifted_quotient_breaks_the_field_switch() {
        let (_, _, mut witness, cs) = setup(3);
        witness.k1[5] += 1;
        let assignment = witness.assignment(&cs.system, &cs.variables).unwrap();
        match cs.system.is_satisfied(&assignment) {
            Err(ZkHelpersError::Unsatisfied { kind, label, .. }) => {
                assert_eq!(kind, "linear");
                assert_eq!(label, "c1[5] field switch");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_noise_is_caught() {
        let (_, _, mut witness, cs) = setup(4);
        witness.e2[0] = 200;
        let assignment = witness.assignment(&cs.system, &cs.variables).unwrap();
        match cs.system.is_satisfied(&assignment) {
            Err(ZkHelpersError::Unsatisfied { kind, label, .. }) => {
                assert_eq!(kind, "range");
                assert_eq!(label, "e2[0] range");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn tampered_public_values_are_caught() {
        let (_, _, witness, cs) = setup(5);
        let mut assignment = witness.assignment(&cs.system, &cs.variables).unwrap();
        assignment.set(cs.variables.ct_commitment, Field::from(1u64)).unwrap();
        assert!(matches!(
            cs.system.is_satisfied(&assignment),
            Err(ZkHelpersError::Unsatisfied {
                kind: "sponge-digest",
                ..
            })
        ));

        let mut assignment = witness.assignment(&cs.system, &cs.variables).unwrap();
        assignment.set(cs.variables.wa_commitment, Field::from(1u64)).unwrap();
        assert!(matches!(
            cs.system.is_satisfied(&assignment),
            Err(ZkHelpersError::Unsatisfied {
                kind: "pair-hash",
                ..
            })
        ));
    }

    #[test]
    fn short_witness_vectors_are_rejected() {
        let (_, _, mut witness, cs) = setup(8);
        witness.k1.pop();
        assert!(matches!(
            witness.assignment(&cs.system, &cs.variables),
            Err(ZkHelpersError::ValueCount {
                expected: 64,
                actual: 63
            })
        ));
    }

    #[test]
    fn another_public_key_rejects_the_witness() {
        let (params, _, witness, _) = setup(6);
        let (_, other, _, _) = setup(7);
        let cs = AuditConstraintSystem::build(&params, &other.input.public_key).unwrap();
        let assignment = witness.assignment(&cs.system, &cs.variables).unwrap();
        assert!(cs.system.is_satisfied(&assignment).is_err());
    }
}
