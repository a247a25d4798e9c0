// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;

/// Errors raised by the boundary formatters and the shared rng.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Empty hex string")]
    Empty,

    #[error("Invalid hex string '{value}'")]
    InvalidHex { value: String },

    #[error("Hex string '{value}' has {digits} digits, at most {max} allowed")]
    TooLong {
        value: String,
        digits: usize,
        max: usize,
    },

    #[error("Value {value} is not below modulus {modulus}")]
    OutOfRange { value: String, modulus: String },

    #[error("Shared randomness source is poisoned")]
    RngPoisoned,
}
