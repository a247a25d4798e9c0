// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Structured constraint system handed to an external prover.
//!
//! Variables are either public or private field elements. Constraints are
//! the relations the prover must enforce: linear equalities, offset range
//! checks, limb packing, byte decomposition, the two hashes and the
//! fixed-base multiplication. [`ConstraintSystem::is_satisfied`] is a
//! reference checker over a concrete [`Assignment`]; it proves nothing.

use crate::errors::ZkHelpersError;
use crate::identity::owner_point;
use crate::range::field_in_range;
use crate::utils::field_to_biguint;
use ark_bn254::Fr as Field;
use ark_ff::Zero;
use audit_sponge::{hash_pair, sponge_digest};
use num_bigint::BigUint;
use rayon::prelude::*;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Public(usize),
    Private(usize),
}

/// `Σ coefficient·variable + constant`, constrained to equal zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearCombination {
    pub terms: Vec<(Field, Variable)>,
    pub constant: Field,
}

impl LinearCombination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term, skipping zero coefficients.
    pub fn add_term(&mut self, coefficient: Field, variable: Variable) -> &mut Self {
        if !coefficient.is_zero() {
            self.terms.push((coefficient, variable));
        }
        self
    }

    pub fn evaluate(&self, assignment: &Assignment) -> Field {
        self.terms
            .iter()
            .fold(self.constant, |acc, (coefficient, variable)| {
                acc + *coefficient * assignment.value(*variable)
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Linear(LinearCombination),
    /// `value + offset` is an integer below `2^bits`.
    Range {
        value: Variable,
        offset: Field,
        bits: u32,
    },
    /// `packed = Σ limbs[j]·2^(limb_bits·j)` with every limb below `2^limb_bits`.
    Pack {
        packed: Variable,
        limbs: Vec<Variable>,
        limb_bits: u32,
    },
    /// `value = Σ bytes[i]·256^i` over the integers, every byte below 256.
    ByteDecomposition { value: Variable, bytes: Vec<Variable> },
    SpongeDigest {
        inputs: Vec<Variable>,
        digest: Variable,
    },
    PairHash {
        left: Variable,
        right: Variable,
        digest: Variable,
    },
    /// `(x, y) = scalar·G` on Grumpkin.
    FixedBaseMul {
        scalar: Variable,
        x: Variable,
        y: Variable,
    },
}

impl Constraint {
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::Linear(_) => "linear",
            Constraint::Range { .. } => "range",
            Constraint::Pack { .. } => "pack",
            Constraint::ByteDecomposition { .. } => "byte-decomposition",
            Constraint::SpongeDigest { .. } => "sponge-digest",
            Constraint::PairHash { .. } => "pair-hash",
            Constraint::FixedBaseMul { .. } => "fixed-base-mul",
        }
    }

    fn holds(&self, assignment: &Assignment) -> bool {
        match self {
            Constraint::Linear(combination) => combination.evaluate(assignment).is_zero(),
            Constraint::Range {
                value,
                offset,
                bits,
            } => field_in_range(&assignment.value(*value), offset, *bits),
            Constraint::Pack {
                packed,
                limbs,
                limb_bits,
            } => limbs_recompose(assignment, *packed, limbs, *limb_bits),
            Constraint::ByteDecomposition { value, bytes } => {
                limbs_recompose(assignment, *value, bytes, 8)
            }
            Constraint::SpongeDigest { inputs, digest } => {
                let inputs: Vec<Field> = inputs.iter().map(|v| assignment.value(*v)).collect();
                sponge_digest(&inputs) == assignment.value(*digest)
            }
            Constraint::PairHash {
                left,
                right,
                digest,
            } => hash_pair(assignment.value(*left), assignment.value(*right))
                .map(|hash| hash == assignment.value(*digest))
                .unwrap_or(false),
            Constraint::FixedBaseMul { scalar, x, y } => owner_point(&assignment.value(*scalar))
                .map(|point| point == (assignment.value(*x), assignment.value(*y)))
                .unwrap_or(false),
        }
    }
}

/// Integer recomposition; the comparison is exact, so a decomposition can
/// never describe a non-canonical value.
fn limbs_recompose(assignment: &Assignment, value: Variable, limbs: &[Variable], bits: u32) -> bool {
    let bound = BigUint::from(1u8) << bits;
    let mut acc = BigUint::zero();
    for limb in limbs.iter().rev() {
        let limb = field_to_biguint(&assignment.value(*limb));
        if limb >= bound {
            return false;
        }
        acc = (acc << bits) + limb;
    }
    acc == field_to_biguint(&assignment.value(value))
}

/// Concrete values for every variable of a [`ConstraintSystem`].
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub public: Vec<Field>,
    pub private: Vec<Field>,
}

impl Assignment {
    /// All-zero assignment shaped after `system`.
    pub fn for_system(system: &ConstraintSystem) -> Self {
        Self {
            public: vec![Field::zero(); system.num_public()],
            private: vec![Field::zero(); system.num_private()],
        }
    }

    pub fn get(&self, variable: Variable) -> Result<Field, ZkHelpersError> {
        match variable {
            Variable::Public(index) => self.public.get(index).copied(),
            Variable::Private(index) => self.private.get(index).copied(),
        }
        .ok_or(ZkHelpersError::UnknownVariable { variable })
    }

    /// Unchecked read for constraint evaluation. `is_satisfied` compares the
    /// assignment shape with the system before any constraint runs.
    fn value(&self, variable: Variable) -> Field {
        self.get(variable).unwrap_or_else(|_| Field::zero())
    }

    pub fn set(&mut self, variable: Variable, value: Field) -> Result<(), ZkHelpersError> {
        let slot = match variable {
            Variable::Public(index) => self.public.get_mut(index),
            Variable::Private(index) => self.private.get_mut(index),
        };
        *slot.ok_or(ZkHelpersError::UnknownVariable { variable })? = value;
        Ok(())
    }

    /// Sets one value per variable; the counts must agree.
    pub fn set_all(
        &mut self,
        variables: &[Variable],
        values: impl IntoIterator<Item = Field>,
    ) -> Result<(), ZkHelpersError> {
        let values: Vec<Field> = values.into_iter().collect();
        if values.len() != variables.len() {
            return Err(ZkHelpersError::ValueCount {
                expected: variables.len(),
                actual: values.len(),
            });
        }
        for (variable, value) in variables.iter().zip(values) {
            self.set(*variable, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConstraintSystem {
    public_labels: Vec<String>,
    private_labels: Vec<String>,
    constraints: Vec<(String, Constraint)>,
}

impl ConstraintSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_public(&mut self, label: impl Into<String>) -> Variable {
        self.public_labels.push(label.into());
        Variable::Public(self.public_labels.len() - 1)
    }

    pub fn alloc_private(&mut self, label: impl Into<String>) -> Variable {
        self.private_labels.push(label.into());
        Variable::Private(self.private_labels.len() - 1)
    }

    pub fn alloc_public_vec(&mut self, label: &str, len: usize) -> Vec<Variable> {
        (0..len)
            .map(|i| self.alloc_public(format!("{label}[{i}]")))
            .collect()
    }

    pub fn alloc_private_vec(&mut self, label: &str, len: usize) -> Vec<Variable> {
        (0..len)
            .map(|i| self.alloc_private(format!("{label}[{i}]")))
            .collect()
    }

    pub fn enforce(&mut self, label: impl Into<String>, constraint: Constraint) {
        self.constraints.push((label.into(), constraint));
    }

    pub fn num_public(&self) -> usize {
        self.public_labels.len()
    }

    pub fn num_private(&self) -> usize {
        self.private_labels.len()
    }

    pub fn public_labels(&self) -> &[String] {
        &self.public_labels
    }

    pub fn private_labels(&self) -> &[String] {
        &self.private_labels
    }

    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter().map(|(_, constraint)| constraint)
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Checks every constraint and reports the first one that fails.
    pub fn is_satisfied(&self, assignment: &Assignment) -> Result<(), ZkHelpersError> {
        for (kind, expected, actual) in [
            ("public", self.num_public(), assignment.public.len()),
            ("private", self.num_private(), assignment.private.len()),
        ] {
            if expected != actual {
                return Err(ZkHelpersError::AssignmentLength {
                    kind,
                    expected,
                    actual,
                });
            }
        }

        let results: Vec<bool> = self
            .constraints
            .par_iter()
            .map(|(_, constraint)| constraint.holds(assignment))
            .collect();

        match results.iter().position(|holds| !holds) {
            Some(index) => {
                let (label, constraint) = &self.constraints[index];
                Err(ZkHelpersError::Unsatisfied {
                    index,
                    kind: constraint.kind(),
                    label: label.clone(),
                })
            }
            None => {
                debug!(constraints = self.len(), "assignment satisfies system");
                Ok(())
            }
        }
    }
}
