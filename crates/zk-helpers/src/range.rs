// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Offset encoding behind the small-value range constraints.
//!
//! A signed value `v` is in range when `v + offset` is a non-negative integer
//! below `2^bits`. With the workspace constants (offset 128, 8 bits) this
//! admits `[-128, 127]`, which is looser than the noise bound but sound.
//! The check always runs on the signed value, never on a residue.

use crate::errors::ZkHelpersError;
use crate::utils::field_to_biguint;
use ark_bn254::Fr as Field;
use num_bigint::BigUint;
use rayon::prelude::*;

/// Returns `value + offset` when it fits in `bits` bits. Widths above 64
/// bits have no `u64` encoding and are rejected.
pub fn shift_into_range(
    value: i64,
    offset: u64,
    bits: u32,
) -> Result<Option<u64>, ZkHelpersError> {
    if bits > u64::BITS {
        return Err(ZkHelpersError::RangeBits { bits });
    }
    let shifted = i128::from(value) + i128::from(offset);
    if shifted < 0 || shifted >= 1i128 << bits {
        return Ok(None);
    }
    Ok(Some(shifted as u64))
}

/// Offset-encodes every value, rejecting the first that does not fit.
pub fn range_encode(values: &[i64], offset: u64, bits: u32) -> Result<Vec<u64>, ZkHelpersError> {
    values
        .par_iter()
        .enumerate()
        .map(|(index, &value)| {
            shift_into_range(value, offset, bits)?.ok_or(ZkHelpersError::RangeEncoding {
                index,
                value,
                offset,
                bits,
            })
        })
        .collect()
}

/// Field form of the check: the canonical representative of
/// `value + offset` must be below `2^bits`.
pub fn field_in_range(value: &Field, offset: &Field, bits: u32) -> bool {
    field_to_biguint(&(*value + offset)) < (BigUint::from(1u8) << bits)
}
