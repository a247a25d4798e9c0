// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::constants::shared;
use crate::errors::ParamsError;
use crate::presets::RlweParamSet;
use crate::validation::{proof_field_modulus, validate_with_proof_modulus, NoiseReport};
use num_bigint::{BigInt, BigUint};
use std::sync::Arc;
use tracing::info;

/// Validated, immutable parameters threaded through every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RlweParams {
    degree: usize,
    ciphertext_modulus: u64,
    plaintext_modulus: u64,
    delta: u64,
    noise_bound: u64,
    message_slots: usize,
    proof_modulus: BigUint,
    report: NoiseReport,
}

impl RlweParams {
    /// Ring degree N.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Ciphertext prime q.
    pub fn ciphertext_modulus(&self) -> u64 {
        self.ciphertext_modulus
    }

    pub fn ciphertext_modulus_bigint(&self) -> BigInt {
        BigInt::from(self.ciphertext_modulus)
    }

    /// Plaintext modulus t.
    pub fn plaintext_modulus(&self) -> u64 {
        self.plaintext_modulus
    }

    /// Scaling factor `floor(q / t)`.
    pub fn delta(&self) -> u64 {
        self.delta
    }

    /// Noise bound B.
    pub fn noise_bound(&self) -> u64 {
        self.noise_bound
    }

    /// Number of message slots L.
    pub fn message_slots(&self) -> usize {
        self.message_slots
    }

    pub fn coordinate_bytes(&self) -> usize {
        shared::COORDINATE_BYTES
    }

    pub fn range_offset(&self) -> u64 {
        shared::RANGE_OFFSET
    }

    pub fn range_bits(&self) -> u32 {
        shared::RANGE_BITS
    }

    pub fn pack_width(&self) -> usize {
        shared::PACK_WIDTH
    }

    pub fn pack_bits(&self) -> u32 {
        shared::PACK_BITS
    }

    /// Number of packed elements needed for `count` values.
    pub fn packed_len(&self, count: usize) -> usize {
        count.div_ceil(shared::PACK_WIDTH)
    }

    /// Proof-field prime P.
    pub fn proof_modulus(&self) -> &BigUint {
        &self.proof_modulus
    }

    pub fn noise_report(&self) -> &NoiseReport {
        &self.report
    }
}

pub fn build_params(param_set: RlweParamSet) -> Result<RlweParams, ParamsError> {
    let proof_modulus = proof_field_modulus()?;
    let report = validate_with_proof_modulus(&param_set, &proof_modulus)?;

    info!(
        degree = param_set.degree,
        q = param_set.ciphertext_modulus,
        t = param_set.plaintext_modulus,
        noise_bound = param_set.noise_bound,
        "built rlwe parameters"
    );

    Ok(RlweParams {
        degree: param_set.degree,
        ciphertext_modulus: param_set.ciphertext_modulus,
        plaintext_modulus: param_set.plaintext_modulus,
        delta: param_set.ciphertext_modulus / param_set.plaintext_modulus,
        noise_bound: param_set.noise_bound,
        message_slots: param_set.message_slots,
        proof_modulus,
        report,
    })
}

pub fn build_params_arc(param_set: RlweParamSet) -> Result<Arc<RlweParams>, ParamsError> {
    build_params(param_set).map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::AuditPreset;

    #[test]
    fn production_params() {
        let params = AuditPreset::Audit1024.build().unwrap();
        assert_eq!(params.degree(), 1024);
        assert_eq!(params.ciphertext_modulus(), 167772161);
        assert_eq!(params.delta(), 655360);
        assert_eq!(params.noise_bound(), 3);
        assert_eq!(params.message_slots(), 64);
        assert_eq!(params.packed_len(params.message_slots()), 10);
        assert_eq!(params.packed_len(params.degree()), 147);
        assert_eq!(
            params.proof_modulus().to_string(),
            shared::PROOF_FIELD_MODULUS
        );
    }

    #[test]
    fn invalid_set_never_builds() {
        let mut set = AuditPreset::Audit1024.param_set();
        set.noise_bound = 200;
        assert!(build_params_arc(set).is_err());
    }
}
