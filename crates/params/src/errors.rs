// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::presets::PresetError;
use thiserror::Error;

/// A parameter set that fails one of the analytic checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error("Invalid degree {degree}: must be a power of two no smaller than 2")]
    InvalidDegree { degree: usize },

    #[error("Invalid modulus: {message}")]
    InvalidModulus { message: String },

    #[error("Invalid message layout: {message}")]
    MessageLayout { message: String },

    #[error("Packing overflow: {message}")]
    PackingOverflow { message: String },

    #[error(
        "Range encoding cannot cover noise bound {noise_bound} with offset {offset} in {bits} bits"
    )]
    RangeEncoding {
        noise_bound: u64,
        offset: u64,
        bits: u32,
    },

    #[error("Field-switch relation may wrap: magnitude bound {bound} is not below {limit}")]
    FieldWrap { bound: String, limit: String },

    #[error("Decryption noise bound {noise} is not below {limit}")]
    DecryptionNoise { noise: u64, limit: u64 },
}
