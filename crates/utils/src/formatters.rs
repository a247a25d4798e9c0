// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Hex conventions shared by every boundary artifact.
//!
//! Ciphertext-modulus values are written as `0x` followed by 8 zero-padded,
//! big-endian hex digits. Proof-field values are written as `0x` followed by
//! 64 zero-padded, big-endian hex digits, except zero which is the bare
//! string `"0"`. Parsers accept any prefix-optional spelling of the same
//! value (`"0"`, `"0x0"`, or the full width form).

use crate::UtilsError;
use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField, Zero};
use num_bigint::BigUint;

/// Width of a ciphertext-modulus value in hex digits.
pub const Q_HEX_DIGITS: usize = 8;

/// Width of a proof-field value in hex digits.
pub const FIELD_HEX_DIGITS: usize = 64;

fn strip_hex_prefix(value: &str) -> Result<&str, UtilsError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(UtilsError::Empty);
    }
    Ok(digits)
}

/// Formats a value reduced modulo the ciphertext prime.
pub fn to_hex_q(value: u64) -> String {
    format!("0x{:0width$x}", value, width = Q_HEX_DIGITS)
}

/// Parses a hex string into a `u64` without any modulus check.
pub fn parse_hex_u64(value: &str) -> Result<u64, UtilsError> {
    let digits = strip_hex_prefix(value)?;
    if digits.len() > 16 {
        return Err(UtilsError::TooLong {
            value: value.to_string(),
            digits: digits.len(),
            max: 16,
        });
    }
    u64::from_str_radix(digits, 16).map_err(|_| UtilsError::InvalidHex {
        value: value.to_string(),
    })
}

/// Parses a ciphertext-modulus value and rejects anything not below `modulus`.
pub fn parse_hex_q(value: &str, modulus: u64) -> Result<u64, UtilsError> {
    let parsed = parse_hex_u64(value)?;
    if parsed >= modulus {
        return Err(UtilsError::OutOfRange {
            value: parsed.to_string(),
            modulus: modulus.to_string(),
        });
    }
    Ok(parsed)
}

/// Formats a proof-field element. Zero is written as `"0"`.
pub fn to_hex_field(value: &Fr) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    format!("0x{}", hex::encode(value.into_bigint().to_bytes_be()))
}

/// Parses a proof-field element, rejecting non-canonical values (`>= P`).
pub fn parse_hex_field(value: &str) -> Result<Fr, UtilsError> {
    let digits = strip_hex_prefix(value)?;
    if digits.len() > FIELD_HEX_DIGITS {
        return Err(UtilsError::TooLong {
            value: value.to_string(),
            digits: digits.len(),
            max: FIELD_HEX_DIGITS,
        });
    }

    let padded = format!("{:0>width$}", digits, width = FIELD_HEX_DIGITS);
    let bytes = hex::decode(&padded).map_err(|_| UtilsError::InvalidHex {
        value: value.to_string(),
    })?;

    let parsed = BigUint::from_bytes_be(&bytes);
    let modulus: BigUint = Fr::MODULUS.into();
    if parsed >= modulus {
        return Err(UtilsError::OutOfRange {
            value: parsed.to_string(),
            modulus: modulus.to_string(),
        });
    }

    Ok(Fr::from_be_bytes_mod_order(&bytes))
}

/// Serde adapter writing a single field element in proof-field hex.
pub mod field_hex {
    use super::{parse_hex_field, to_hex_field};
    use ark_bn254::Fr;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Fr, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex_field(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Fr, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_hex_field(&raw).map_err(D::Error::custom)
    }
}

/// Serde adapter writing a sequence of field elements in proof-field hex.
pub mod field_hex_vec {
    use super::{parse_hex_field, to_hex_field};
    use ark_bn254::Fr;
    use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[Fr], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&to_hex_field(value))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Fr>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| parse_hex_field(s).map_err(D::Error::custom))
            .collect()
    }
}

/// Serde adapter writing ciphertext-modulus coefficients as fixed-width hex.
///
/// Deserialization only checks the hex syntax; the modulus bound is enforced
/// by whoever turns the raw values into ring elements.
pub mod q_hex_vec {
    use super::{parse_hex_u64, to_hex_q};
    use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&to_hex_q(*value))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u64>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| parse_hex_u64(s).map_err(D::Error::custom))
            .collect()
    }
}
