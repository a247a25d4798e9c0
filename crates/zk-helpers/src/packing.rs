// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Limb packing of mod-q values into proof-field elements.
//!
//! A group of up to `width` values, each below `2^bits`, becomes
//! `Σ values[j] · 2^(bits·j)`. The last group may be short. Unpacking
//! reverses this exactly and rejects anything that was not produced by
//! [`pack`].

use crate::errors::ZkHelpersError;
use crate::utils::field_to_biguint;
use ark_bn254::Fr as Field;
use ark_ff::PrimeField;
use audit_params::RlweParams;
use audit_rlwe::{Ciphertext, PublicKey};
use audit_utils::formatters::field_hex_vec;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A packed element holds `width * bits` bits, which must stay below the
/// modulus bit size so packing never wraps.
fn check_layout(width: usize, bits: u32) -> Result<(), ZkHelpersError> {
    let capacity = u64::from(Field::MODULUS_BIT_SIZE - 1);
    match (width as u64).checked_mul(u64::from(bits)) {
        Some(total) if width > 0 && total <= capacity => Ok(()),
        _ => Err(ZkHelpersError::PackLayout { width, bits }),
    }
}

/// Packs `values` into `ceil(len / width)` field elements.
pub fn pack(values: &[u64], width: usize, bits: u32) -> Result<Vec<Field>, ZkHelpersError> {
    check_layout(width, bits)?;
    if let Some((index, &value)) = values
        .iter()
        .enumerate()
        .find(|&(_, &v)| bits < 64 && v >> bits != 0)
    {
        return Err(ZkHelpersError::LimbOverflow { index, value, bits });
    }

    Ok(values
        .par_chunks(width)
        .map(|chunk| {
            let mut acc = BigUint::zero();
            for &value in chunk.iter().rev() {
                acc = (acc << bits) + BigUint::from(value);
            }
            Field::from_le_bytes_mod_order(&acc.to_bytes_le())
        })
        .collect())
}

/// Recovers exactly `count` values from their packed form.
pub fn unpack(
    packed: &[Field],
    count: usize,
    width: usize,
    bits: u32,
) -> Result<Vec<u64>, ZkHelpersError> {
    check_layout(width, bits)?;
    let expected = count.div_ceil(width);
    if packed.len() != expected {
        return Err(ZkHelpersError::PackedLength {
            count,
            expected,
            actual: packed.len(),
        });
    }

    let mask = (BigUint::from(1u8) << bits) - 1u8;
    let mut values = Vec::with_capacity(count);
    for (index, element) in packed.iter().enumerate() {
        let limbs = width.min(count - index * width);
        let mut acc = field_to_biguint(element);
        for _ in 0..limbs {
            let limb = (&acc & &mask)
                .to_u64()
                .ok_or(ZkHelpersError::PackedOverflow { index, width, bits })?;
            values.push(limb);
            acc >>= bits;
        }
        if !acc.is_zero() {
            return Err(ZkHelpersError::PackedOverflow { index, width, bits });
        }
    }
    Ok(values)
}

/// Packed form of a ciphertext as consumed by the prover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedCiphertext {
    #[serde(with = "field_hex_vec")]
    pub c0: Vec<Field>,
    #[serde(with = "field_hex_vec")]
    pub c1: Vec<Field>,
}

impl PackedCiphertext {
    pub fn new(ciphertext: &Ciphertext, params: &RlweParams) -> Result<Self, ZkHelpersError> {
        Ok(Self {
            c0: pack(ciphertext.c0(), params.pack_width(), params.pack_bits())?,
            c1: pack(
                ciphertext.c1().coefficients(),
                params.pack_width(),
                params.pack_bits(),
            )?,
        })
    }

    /// `c0` followed by `c1`, the absorption order of the commitment.
    pub fn elements(&self) -> Vec<Field> {
        self.c0.iter().chain(&self.c1).copied().collect()
    }
}

/// Packed form of a public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedPublicKey {
    #[serde(with = "field_hex_vec")]
    pub a: Vec<Field>,
    #[serde(with = "field_hex_vec")]
    pub b: Vec<Field>,
}

impl PackedPublicKey {
    pub fn new(public_key: &PublicKey, params: &RlweParams) -> Result<Self, ZkHelpersError> {
        Ok(Self {
            a: pack(
                public_key.a().coefficients(),
                params.pack_width(),
                params.pack_bits(),
            )?,
            b: pack(
                public_key.b().coefficients(),
                params.pack_width(),
                params.pack_bits(),
            )?,
        })
    }

    pub fn elements(&self) -> Vec<Field> {
        self.a.iter().chain(&self.b).copied().collect()
    }
}
