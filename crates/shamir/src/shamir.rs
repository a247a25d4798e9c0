// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Shamir sharing of single field elements.
//!
//! Shares are evaluations at the public points `x = 1..=n`. Reconstruction
//! interpolates at zero with weights
//! `lambda_i = prod_{j != i} (-x_j) / (x_i - x_j)`.

use crate::config::ShamirConfig;
use crate::errors::ShamirError;
use ark_bn254::Fr;
use ark_ff::{Field, UniformRand, Zero};
use audit_utils::formatters::field_hex;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One evaluation of a sharing polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub x: u64,
    #[serde(with = "field_hex")]
    pub y: Fr,
}

/// Random polynomial of degree `threshold - 1` with constant term `secret`.
pub fn sharing_polynomial<R: RngCore + CryptoRng + ?Sized>(
    secret: Fr,
    config: &ShamirConfig,
    rng: &mut R,
) -> Vec<Fr> {
    let mut coefficients = Vec::with_capacity(config.threshold());
    coefficients.push(secret);
    for _ in 1..config.threshold() {
        coefficients.push(Fr::rand(rng));
    }
    coefficients
}

/// Horner evaluation of `coefficients` (constant term first) at `x`.
pub fn evaluate(coefficients: &[Fr], x: u64) -> Fr {
    let x = Fr::from(x);
    coefficients
        .iter()
        .rev()
        .fold(Fr::zero(), |acc, c| acc * x + c)
}

/// Splits `secret` into `num_shares` evaluations at `x = 1..=num_shares`.
pub fn split_secret<R: RngCore + CryptoRng + ?Sized>(
    secret: Fr,
    config: &ShamirConfig,
    rng: &mut R,
) -> Vec<Share> {
    let polynomial = sharing_polynomial(secret, config, rng);
    (1..=config.num_shares() as u64)
        .map(|x| Share {
            x,
            y: evaluate(&polynomial, x),
        })
        .collect()
}

/// Lagrange weights at zero for the given x-coordinates.
pub fn lagrange_weights(xs: &[u64]) -> Result<Vec<Fr>, ShamirError> {
    let mut seen = HashSet::with_capacity(xs.len());
    for &x in xs {
        if x == 0 {
            return Err(ShamirError::InvalidIndex {
                index: x,
                num_shares: xs.len(),
            });
        }
        if !seen.insert(x) {
            return Err(ShamirError::DuplicateIndex { index: x });
        }
    }

    xs.iter()
        .enumerate()
        .map(|(i, &xi)| {
            let xi = Fr::from(xi);
            let (numerator, denominator) = xs
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold((Fr::ONE, Fr::ONE), |(num, den), (_, &xj)| {
                    let xj = Fr::from(xj);
                    (num * -xj, den * (xi - xj))
                });
            // Distinct nonzero points keep the denominator invertible.
            denominator
                .inverse()
                .map(|inv| numerator * inv)
                .ok_or(ShamirError::DuplicateIndex {
                    index: xs[i],
                })
        })
        .collect()
}

/// Interpolates the constant term from at least `threshold` shares.
pub fn reconstruct_secret(shares: &[Share], threshold: usize) -> Result<Fr, ShamirError> {
    if shares.len() < threshold {
        return Err(ShamirError::InsufficientShares {
            required: threshold,
            provided: shares.len(),
        });
    }
    let xs: Vec<u64> = shares.iter().map(|s| s.x).collect();
    let weights = lagrange_weights(&xs)?;
    Ok(shares
        .iter()
        .zip(&weights)
        .map(|(share, weight)| share.y * weight)
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn secret_12345_from_any_pair() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let config = ShamirConfig::new(2, 3).unwrap();
        let secret = Fr::from(12345u64);
        let shares = split_secret(secret, &config, &mut rng);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares.iter().map(|s| s.x).collect::<Vec<_>>(), vec![1, 2, 3]);

        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            let subset = [shares[i], shares[j]];
            assert_eq!(reconstruct_secret(&subset, 2).unwrap(), secret);
        }
        // All three also interpolate the same degree-1 polynomial.
        assert_eq!(reconstruct_secret(&shares, 2).unwrap(), secret);
    }

    #[test]
    fn single_share_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(43);
        let config = ShamirConfig::new(2, 3).unwrap();
        let shares = split_secret(Fr::from(7u64), &config, &mut rng);
        assert_eq!(
            reconstruct_secret(&shares[..1], 2),
            Err(ShamirError::InsufficientShares {
                required: 2,
                provided: 1
            })
        );
    }

    #[test]
    fn duplicate_points_are_rejected() {
        let share = Share {
            x: 1,
            y: Fr::from(3u64),
        };
        assert_eq!(
            reconstruct_secret(&[share, share], 2),
            Err(ShamirError::DuplicateIndex { index: 1 })
        );
    }

    #[test]
    fn negative_secret_survives() {
        let mut rng = ChaCha20Rng::seed_from_u64(44);
        let config = ShamirConfig::new(3, 5).unwrap();
        let secret = -Fr::from(3u64);
        let shares = split_secret(secret, &config, &mut rng);
        assert_eq!(reconstruct_secret(&shares[2..], 3).unwrap(), secret);
    }

    #[test]
    fn share_serializes_value_as_field_hex() {
        let share = Share {
            x: 2,
            y: Fr::from(255u64),
        };
        let json = serde_json::to_value(share).unwrap();
        assert_eq!(json["x"], 2);
        let y = json["y"].as_str().unwrap();
        assert_eq!(y.len(), 66);
        assert!(y.ends_with("ff"));
        let zero = Share { x: 1, y: Fr::zero() };
        assert_eq!(serde_json::to_value(zero).unwrap()["y"], "0");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn any_threshold_subset_reconstructs(seed in any::<u64>(), secret in any::<u64>(), threshold in 1usize..5, extra in 0usize..3, offset in 0usize..3) {
            let num_shares = threshold + extra;
            let config = ShamirConfig::new(threshold, num_shares).unwrap();
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let shares = split_secret(Fr::from(secret), &config, &mut rng);
            let start = offset.min(num_shares - threshold);
            let subset = &shares[start..start + threshold];
            prop_assert_eq!(reconstruct_secret(subset, threshold).unwrap(), Fr::from(secret));
        }
    }
}
