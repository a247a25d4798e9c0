// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Analytic checks run once per parameter set.
//!
//! Two bounds matter for correctness:
//!
//! * Field switch: every term of `c + k*q == <row, r> + e + delta*m` must stay
//!   below `P/2` in absolute value, otherwise the equality over the proof
//!   field would no longer imply the equality over the integers.
//! * Decryption: `c0 + sk*c1 = delta*m + e*r + e1 + sk*e2`, so the noise is at
//!   most `2*N*B^2 + B`, plus `q mod t` when the centred lift wraps. It must
//!   stay below `delta/2` for rounding to recover `m`.

use crate::constants::shared;
use crate::errors::ParamsError;
use crate::presets::RlweParamSet;
use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Worst-case magnitudes computed for a parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseReport {
    /// Bound on `|<row, r>|` for a row of a q-bounded ring element.
    pub max_inner_product: BigUint,
    /// Bound on the right-hand side of the field-switch relation.
    pub max_relation: BigUint,
    /// Bound on `|k|` for any quotient witness.
    pub max_quotient: BigUint,
    /// Bound on `|c + k*q|`.
    pub max_lhs: BigUint,
    /// `floor(P / 2)`.
    pub proof_half: BigUint,
    /// Worst-case decryption noise.
    pub decryption_noise: u64,
    /// `floor(delta / 2)`.
    pub decryption_limit: u64,
}

/// The BN254 scalar field modulus.
pub fn proof_field_modulus() -> Result<BigUint, ParamsError> {
    BigUint::parse_bytes(shared::PROOF_FIELD_MODULUS.as_bytes(), 10).ok_or_else(|| {
        ParamsError::InvalidModulus {
            message: "proof field modulus constant is not a decimal integer".to_string(),
        }
    })
}

/// Validates `set` against the BN254 proof field.
pub fn validate_param_set(set: &RlweParamSet) -> Result<NoiseReport, ParamsError> {
    validate_with_proof_modulus(set, &proof_field_modulus()?)
}

/// Validates `set` against an explicit proof-field modulus.
pub fn validate_with_proof_modulus(
    set: &RlweParamSet,
    proof_modulus: &BigUint,
) -> Result<NoiseReport, ParamsError> {
    check_degree(set)?;
    let delta = check_moduli(set)?;
    check_message_layout(set)?;
    check_packing(set)?;
    check_range_encoding(set)?;

    let report = noise_report(set, delta, proof_modulus)?;
    debug!(
        degree = set.degree,
        q = set.ciphertext_modulus,
        max_relation = %report.max_relation,
        decryption_noise = report.decryption_noise,
        decryption_limit = report.decryption_limit,
        "parameter set validated"
    );
    Ok(report)
}

fn check_degree(set: &RlweParamSet) -> Result<(), ParamsError> {
    if set.degree < 2 || !set.degree.is_power_of_two() {
        return Err(ParamsError::InvalidDegree { degree: set.degree });
    }
    Ok(())
}

fn check_moduli(set: &RlweParamSet) -> Result<u64, ParamsError> {
    let q = set.ciphertext_modulus;
    let t = set.plaintext_modulus;
    if t <= shared::MAX_SLOT_VALUE {
        return Err(ParamsError::InvalidModulus {
            message: format!("plaintext modulus {t} cannot hold byte slots"),
        });
    }
    if q <= t {
        return Err(ParamsError::InvalidModulus {
            message: format!("ciphertext modulus {q} must exceed plaintext modulus {t}"),
        });
    }
    Ok(q / t)
}

fn check_message_layout(set: &RlweParamSet) -> Result<(), ParamsError> {
    if set.message_slots != shared::MESSAGE_SLOTS {
        return Err(ParamsError::MessageLayout {
            message: format!(
                "{} slots requested, the two-coordinate payload needs exactly {}",
                set.message_slots,
                shared::MESSAGE_SLOTS
            ),
        });
    }
    if set.message_slots > set.degree {
        return Err(ParamsError::MessageLayout {
            message: format!(
                "{} slots do not fit in degree {}",
                set.message_slots, set.degree
            ),
        });
    }
    Ok(())
}

fn check_packing(set: &RlweParamSet) -> Result<(), ParamsError> {
    if set.ciphertext_modulus > 1u64 << shared::PACK_BITS {
        return Err(ParamsError::PackingOverflow {
            message: format!(
                "ciphertext modulus {} does not fit in {} bits",
                set.ciphertext_modulus,
                shared::PACK_BITS
            ),
        });
    }
    let packed_bits = shared::PACK_WIDTH as u32 * shared::PACK_BITS;
    if packed_bits >= shared::PROOF_FIELD_BITS {
        return Err(ParamsError::PackingOverflow {
            message: format!(
                "{packed_bits} packed bits do not fit below the {}-bit proof field",
                shared::PROOF_FIELD_BITS
            ),
        });
    }
    Ok(())
}

fn check_range_encoding(set: &RlweParamSet) -> Result<(), ParamsError> {
    let offset = shared::RANGE_OFFSET;
    let bits = shared::RANGE_BITS;
    if set.noise_bound > offset || offset + set.noise_bound >= 1u64 << bits {
        return Err(ParamsError::RangeEncoding {
            noise_bound: set.noise_bound,
            offset,
            bits,
        });
    }
    Ok(())
}

fn noise_report(
    set: &RlweParamSet,
    delta: u64,
    proof_modulus: &BigUint,
) -> Result<NoiseReport, ParamsError> {
    let n = BigUint::from(set.degree);
    let q = BigUint::from(set.ciphertext_modulus);
    let b = BigUint::from(set.noise_bound);
    let t_minus_one = BigUint::from(set.plaintext_modulus - 1);

    let max_inner_product = &n * (&q - BigUint::one()) * &b;
    let max_relation = &max_inner_product + &b + BigUint::from(delta) * t_minus_one;
    let max_quotient = &max_relation / &q + BigUint::one();
    let max_lhs = (&q - BigUint::one()) + &max_quotient * &q;
    let proof_half = proof_modulus / BigUint::from(2u8);

    let worst = std::cmp::max(&max_relation, &max_lhs);
    if worst >= &proof_half {
        return Err(ParamsError::FieldWrap {
            bound: worst.to_string(),
            limit: proof_half.to_string(),
        });
    }

    let b = set.noise_bound;
    let wrap = set.ciphertext_modulus % set.plaintext_modulus;
    let decryption_noise = (set.degree as u64)
        .checked_mul(b * b)
        .and_then(|v| v.checked_mul(2))
        .and_then(|v| v.checked_add(b + wrap))
        .ok_or_else(|| ParamsError::DecryptionNoise {
            noise: u64::MAX,
            limit: delta / 2,
        })?;
    let decryption_limit = delta / 2;
    if decryption_noise >= decryption_limit {
        return Err(ParamsError::DecryptionNoise {
            noise: decryption_noise,
            limit: decryption_limit,
        });
    }

    Ok(NoiseReport {
        max_inner_product,
        max_relation,
        max_quotient,
        max_lhs,
        proof_half,
        decryption_noise,
        decryption_limit,
    })
}
