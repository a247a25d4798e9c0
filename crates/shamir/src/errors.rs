// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use audit_rlwe::RlweError;
use audit_utils::UtilsError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error("Invalid sharing configuration: threshold {threshold} of {num_shares} shares")]
    InvalidConfig { threshold: usize, num_shares: usize },

    #[error("Reconstruction needs {required} shares, got {provided}")]
    InsufficientShares { required: usize, provided: usize },

    #[error("Share index {index} appears more than once")]
    DuplicateIndex { index: u64 },

    #[error("Share index {index} is outside 1..={num_shares}")]
    InvalidIndex { index: u64, num_shares: usize },

    #[error("Share records disagree on sharing configuration")]
    MismatchedConfig,

    #[error("Share record {index} holds {actual} coefficients, expected {expected}")]
    MismatchedLength {
        index: u64,
        expected: usize,
        actual: usize,
    },

    #[error("Reconstructed coefficient {index} is not a small signed value")]
    NonSmallCoefficient { index: usize },

    #[error(transparent)]
    Rng(#[from] UtilsError),

    #[error(transparent)]
    Rlwe(#[from] RlweError),
}
