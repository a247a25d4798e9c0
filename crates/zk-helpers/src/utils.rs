// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions for circuit inputs
//!
//! This module contains helper functions for:
//! - BigInt to Field element conversion (and back)
//! - Bit width calculation from bounds
//! - ZKP modulus constants

use ark_bn254::Fr as FieldElement;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Signed;

/// Get the ZKP modulus as a BigInt.
///
/// The ZKP modulus is the BN254 scalar field modulus:
/// 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub fn get_zkp_modulus() -> BigInt {
    let modulus: BigUint = FieldElement::MODULUS.into();
    BigInt::from(modulus)
}

/// Convert BigInt to Field by reducing modulo ZKP modulus.
///
/// Negative values map to `P - |value| mod P`.
pub fn bigint_to_field(value: &BigInt) -> FieldElement {
    let zkp_modulus = get_zkp_modulus();
    let reduced = value.mod_floor(&zkp_modulus);
    let (_, bytes) = reduced.to_bytes_le();
    FieldElement::from_le_bytes_mod_order(&bytes)
}

/// Convert a signed machine integer to Field.
pub fn i64_to_field(value: i64) -> FieldElement {
    FieldElement::from(value)
}

/// Canonical integer representative of a field element, in `[0, P)`.
pub fn field_to_biguint(value: &FieldElement) -> BigUint {
    BigUint::from_bytes_le(&value.into_bigint().to_bytes_le())
}

/// Calculate bit width from a bound.
///
/// The formula is: BIT = ceil(log2(bound)) + 1
pub fn calculate_bit_width(bound: BigInt) -> u32 {
    if !bound.is_positive() {
        return 1; // Minimum 1 bit
    }
    bound.bits() as u32 + 1
}
