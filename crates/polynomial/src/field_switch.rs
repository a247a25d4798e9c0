// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Moving ciphertext relations from `Z_q` into the proof field.
//!
//! A ciphertext coefficient satisfies `c = v mod q` where `v` is an exact
//! integer built from a public matrix row, a secret mask and small noise
//! terms. The proof field cannot reduce modulo q, so each relation is
//! carried as `c + k*q = v` with an explicit quotient witness `k`. Parameter
//! validation guarantees both sides stay below `P/2`, which makes the
//! equality over the field equivalent to the equality over the integers.

use crate::errors::PolynomialError;
use crate::ring::RingElement;
use crate::signed::SignedSmall;
use audit_params::RlweParams;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use rayon::prelude::*;
use tracing::error;

/// Quotient witnesses for the rows of one ring product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchedRelation {
    /// Exact integer right-hand sides `<row_i, r> + extra_i`.
    pub values: Vec<BigInt>,
    /// `k_i = (values_i - c_i) / q`.
    pub quotients: Vec<BigInt>,
}

#[derive(Debug, Clone)]
pub struct FieldSwitch {
    ciphertext_modulus: BigInt,
    proof_modulus: BigInt,
}

impl FieldSwitch {
    pub fn new(params: &RlweParams) -> Self {
        Self {
            ciphertext_modulus: params.ciphertext_modulus_bigint(),
            proof_modulus: BigInt::from(params.proof_modulus().clone()),
        }
    }

    /// `sum_j row[j] * mask[j]` over the integers.
    ///
    /// Rows hold residues below 2^32 and masks are bounded by the noise
    /// bound, so the sum is accumulated in `i128` without overflow.
    pub fn exact_inner_product(
        row: &[u64],
        mask: &[SignedSmall],
    ) -> Result<BigInt, PolynomialError> {
        if row.len() != mask.len() {
            return Err(PolynomialError::DegreeMismatch {
                expected: row.len(),
                actual: mask.len(),
            });
        }
        let sum: i128 = row
            .iter()
            .zip(mask)
            .map(|(&a, r)| a as i128 * r.value() as i128)
            .sum();
        Ok(BigInt::from(sum))
    }

    /// Splits `value` into `remainder + k*q` and checks the remainder
    /// against the published coefficient.
    pub fn quotient(
        &self,
        index: usize,
        value: &BigInt,
        expected: u64,
    ) -> Result<BigInt, PolynomialError> {
        let (quotient, remainder) = value.div_mod_floor(&self.ciphertext_modulus);
        if remainder != BigInt::from(expected) {
            error!(index, expected, "field switch remainder disagrees with ciphertext");
            return Err(PolynomialError::InvariantViolation {
                index,
                expected,
                actual: remainder.to_string(),
            });
        }
        Ok(quotient)
    }

    /// Evaluates `c + k*q == value` modulo the proof field.
    pub fn relation_holds(&self, coefficient: u64, quotient: &BigInt, value: &BigInt) -> bool {
        let lhs = BigInt::from(coefficient) + quotient * &self.ciphertext_modulus;
        (lhs - value).mod_floor(&self.proof_modulus).is_zero()
    }

    /// Computes witnesses for rows `0..expected.len()` of `poly * mask`.
    ///
    /// `extra[i]` is the exact integer added to row `i` before reduction
    /// (noise, plus the scaled message for the first component).
    pub fn switch_product(
        &self,
        poly: &RingElement,
        mask: &[SignedSmall],
        extra: &[i128],
        expected: &[u64],
    ) -> Result<SwitchedRelation, PolynomialError> {
        if extra.len() != expected.len() {
            return Err(PolynomialError::DegreeMismatch {
                expected: expected.len(),
                actual: extra.len(),
            });
        }
        if expected.len() > poly.degree() {
            return Err(PolynomialError::IndexOutOfRange {
                index: expected.len() - 1,
                degree: poly.degree(),
            });
        }

        let rows: Vec<(BigInt, BigInt)> = (0..expected.len())
            .into_par_iter()
            .map(|i| -> Result<(BigInt, BigInt), PolynomialError> {
                let row = poly.negacyclic_matrix_row(i)?;
                let value = Self::exact_inner_product(&row, mask)? + BigInt::from(extra[i]);
                let quotient = self.quotient(i, &value, expected[i])?;
                Ok((value, quotient))
            })
            .collect::<Result<_, _>>()?;

        let (values, quotients) = rows.into_iter().unzip();
        Ok(SwitchedRelation { values, quotients })
    }
}
