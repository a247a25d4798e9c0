// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Per-holder share records for a whole secret key.
//!
//! Every secret coefficient gets its own sharing polynomial. Holder `i`
//! receives the evaluations of all of them at `x = i`.

use crate::config::ShamirConfig;
use crate::errors::ShamirError;
use crate::shamir::{evaluate, lagrange_weights, sharing_polynomial, Share};
use ark_bn254::Fr;
use ark_ff::{PrimeField, Zero};
use audit_params::RlweParams;
use audit_polynomial::{centered_residue_big, to_field, RingElement};
use audit_rlwe::SecretKey;
use audit_utils::{lock_rng, SharedRng};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Everything one holder keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareHolderRecord {
    pub share_index: u64,
    pub threshold: usize,
    pub num_shares: usize,
    pub coefficients: Vec<Share>,
}

/// Secret coefficients recovered by interpolation, centred into
/// `(-P/2, P/2]`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ReconstructedSecret {
    coefficients: Vec<i64>,
}

impl std::fmt::Debug for ReconstructedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReconstructedSecret")
            .field("degree", &self.coefficients.len())
            .finish_non_exhaustive()
    }
}

impl ReconstructedSecret {
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// The secret as a ring element modulo q.
    pub fn to_ring(&self, params: &RlweParams) -> Result<RingElement, ShamirError> {
        let q = params.ciphertext_modulus();
        Ok(RingElement::new(
            self.coefficients.iter().map(|&v| to_field(v, q)).collect(),
            params,
        )
        .map_err(audit_rlwe::RlweError::from)?)
    }

    /// Re-checks the bound and returns a usable decryption key.
    pub fn to_secret_key(&self, params: &RlweParams) -> Result<SecretKey, ShamirError> {
        Ok(SecretKey::new(self.coefficients.clone(), params)?)
    }
}

/// Splits every coefficient of `secret_key` and groups the evaluations by
/// holder.
pub fn split_secret_key(
    secret_key: &SecretKey,
    config: &ShamirConfig,
    rng: &SharedRng,
) -> Result<Vec<ShareHolderRecord>, ShamirError> {
    // Sampling stays sequential so a seeded source gives reproducible shares.
    let polynomials: Vec<Vec<Fr>> = {
        let mut rng = lock_rng(rng)?;
        secret_key
            .coefficients()
            .iter()
            .map(|&c| sharing_polynomial(Fr::from(c), config, &mut *rng))
            .collect()
    };

    let records = (1..=config.num_shares() as u64)
        .into_par_iter()
        .map(|x| ShareHolderRecord {
            share_index: x,
            threshold: config.threshold(),
            num_shares: config.num_shares(),
            coefficients: polynomials
                .iter()
                .map(|p| Share {
                    x,
                    y: evaluate(p, x),
                })
                .collect(),
        })
        .collect();

    info!(
        threshold = config.threshold(),
        num_shares = config.num_shares(),
        degree = secret_key.coefficients().len(),
        "split secret key into share records"
    );
    Ok(records)
}

/// Checks that `records` come from one sharing and are enough to interpolate.
pub fn validate_records(
    records: &[ShareHolderRecord],
    degree: usize,
) -> Result<ShamirConfig, ShamirError> {
    let first = records.first().ok_or(ShamirError::InsufficientShares {
        required: 1,
        provided: 0,
    })?;
    let config = ShamirConfig::new(first.threshold, first.num_shares)?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.threshold != config.threshold() || record.num_shares != config.num_shares() {
            return Err(ShamirError::MismatchedConfig);
        }
        if record.share_index == 0 || record.share_index > config.num_shares() as u64 {
            return Err(ShamirError::InvalidIndex {
                index: record.share_index,
                num_shares: config.num_shares(),
            });
        }
        if !seen.insert(record.share_index) {
            return Err(ShamirError::DuplicateIndex {
                index: record.share_index,
            });
        }
        if record.coefficients.len() != degree {
            return Err(ShamirError::MismatchedLength {
                index: record.share_index,
                expected: degree,
                actual: record.coefficients.len(),
            });
        }
        if let Some(share) = record
            .coefficients
            .iter()
            .find(|s| s.x != record.share_index)
        {
            return Err(ShamirError::InvalidIndex {
                index: share.x,
                num_shares: config.num_shares(),
            });
        }
    }

    if records.len() < config.threshold() {
        return Err(ShamirError::InsufficientShares {
            required: config.threshold(),
            provided: records.len(),
        });
    }
    Ok(config)
}

/// Interpolates every coefficient from the given holders' records.
pub fn reconstruct_secret_key(
    records: &[ShareHolderRecord],
    params: &RlweParams,
) -> Result<ReconstructedSecret, ShamirError> {
    let config = validate_records(records, params.degree())?;

    // Same x-coordinates for every coefficient, so the weights are shared.
    let xs: Vec<u64> = records.iter().map(|r| r.share_index).collect();
    let weights = lagrange_weights(&xs)?;
    let modulus: BigUint = Fr::MODULUS.into();

    let coefficients = (0..params.degree())
        .into_par_iter()
        .map(|index| {
            let value: Fr = records
                .iter()
                .zip(&weights)
                .fold(Fr::zero(), |acc, (record, weight)| {
                    acc + record.coefficients[index].y * weight
                });
            let centered = centered_residue_big(&value.into_bigint().into(), &modulus);
            centered
                .to_i64()
                .ok_or(ShamirError::NonSmallCoefficient { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        threshold = config.threshold(),
        provided = records.len(),
        "reconstructed secret key"
    );
    Ok(ReconstructedSecret { coefficients })
}
