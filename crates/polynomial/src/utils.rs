// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Conversions between signed integers, residues modulo q and the proof field.

use num_bigint::{BigInt, BigUint, Sign};

/// Maps a signed integer to its residue in `[0, modulus)`.
pub fn to_field(value: i64, modulus: u64) -> u64 {
    (value as i128).rem_euclid(modulus as i128) as u64
}

/// Lifts a residue modulo `modulus` to its centred representative.
///
/// Residues above `floor(modulus / 2)` become negative.
pub fn centered_residue(residue: u64, modulus: u64) -> i64 {
    let residue = residue % modulus;
    if residue > modulus / 2 {
        residue as i64 - modulus as i64
    } else {
        residue as i64
    }
}

/// Lifts a residue modulo a big modulus to its centred representative.
pub fn centered_residue_big(residue: &BigUint, modulus: &BigUint) -> BigInt {
    let residue = residue % modulus;
    let half = modulus / 2u8;
    if residue > half {
        BigInt::from_biguint(Sign::Plus, residue) - BigInt::from(modulus.clone())
    } else {
        BigInt::from(residue)
    }
}
