// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::constraints::Variable;
use audit_rlwe::RlweError;
use audit_sponge::SpongeError;
use thiserror::Error;

/// Errors raised by the packing, range, commitment and identity helpers.
#[derive(Error, Debug)]
pub enum ZkHelpersError {
    #[error("value {value} at index {index} does not fit in {bits} bits")]
    LimbOverflow { index: usize, value: u64, bits: u32 },
    #[error("packed element {index} does not decompose into {width} limbs of {bits} bits")]
    PackedOverflow { index: usize, width: usize, bits: u32 },
    #[error("{count} values need {expected} packed elements, got {actual}")]
    PackedLength {
        count: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{width} limbs of {bits} bits do not fit below the field modulus")]
    PackLayout { width: usize, bits: u32 },
    #[error("range width of {bits} bits exceeds the 64-bit encoding")]
    RangeBits { bits: u32 },
    #[error("value {value} at index {index} shifted by {offset} does not fit in {bits} bits")]
    RangeEncoding {
        index: usize,
        value: i64,
        offset: u64,
        bits: u32,
    },
    #[error("{kind} assignment has {actual} values, the system declares {expected}")]
    AssignmentLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("variable {variable:?} is not allocated in the assignment")]
    UnknownVariable { variable: Variable },
    #[error("{expected} variables were given {actual} values")]
    ValueCount { expected: usize, actual: usize },
    #[error("constraint {index} ({kind}: {label}) is not satisfied")]
    Unsatisfied {
        index: usize,
        kind: &'static str,
        label: String,
    },
    #[error("Owner scalar must be non-zero")]
    ZeroOwnerScalar,
    #[error("Hash error: {0}")]
    Sponge(#[from] SpongeError),
    #[error(transparent)]
    Rlwe(#[from] RlweError),
}
