// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for ring operations.

use thiserror::Error;

/// Errors that can occur during ring operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Two operands (or an operand and the parameters) disagree on N
    #[error("Degree mismatch: expected {expected}, got {actual}")]
    DegreeMismatch { expected: usize, actual: usize },

    /// Two operands live in rings with different moduli
    #[error("Modulus mismatch: {left} vs {right}")]
    ModulusMismatch { left: u64, right: u64 },

    /// A residue is not in [0, q)
    #[error("Coefficient {value} at index {index} is not reduced modulo {modulus}")]
    CoefficientOutOfRange {
        index: usize,
        value: u64,
        modulus: u64,
    },

    /// A small signed value exceeds the noise bound
    #[error("Signed value {value} exceeds bound {bound}")]
    SignedOutOfRange { value: i64, bound: u64 },

    /// A row or slot index is outside the ring
    #[error("Index {index} out of range for degree {degree}")]
    IndexOutOfRange { index: usize, degree: usize },

    /// A relation that must hold by construction did not
    #[error("Invariant violation at index {index}: expected residue {expected}, computed {actual}")]
    InvariantViolation {
        index: usize,
        expected: u64,
        actual: String,
    },
}
