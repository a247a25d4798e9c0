// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use audit_polynomial::PolynomialError;
use audit_utils::UtilsError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RlweError {
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),

    #[error(transparent)]
    Format(#[from] UtilsError),

    #[error("Message slot {index} holds {value}, above {max}")]
    MessageSlot { index: usize, value: u64, max: u64 },

    #[error("Expected {expected} {what}, got {actual}")]
    Length {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Coordinate bytes do not encode a canonical field element")]
    NonCanonicalCoordinate,
}
