// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Small signed values sampled from `[-B, B]`.

use crate::errors::PolynomialError;
use crate::utils::to_field;
use rand::{CryptoRng, Rng, RngCore};

/// A signed integer whose magnitude was checked against a noise bound.
///
/// Only [`SignedSmall::new`] and sampling construct one. Persisted forms
/// hold raw `i64` values and go back through [`signed_vec_from_values`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignedSmall(i64);

impl SignedSmall {
    pub fn new(value: i64, bound: u64) -> Result<Self, PolynomialError> {
        if value.unsigned_abs() > bound {
            return Err(PolynomialError::SignedOutOfRange { value, bound });
        }
        Ok(Self(value))
    }

    /// Draws a value uniformly from `[-bound, bound]`.
    pub fn sample<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, bound: u64) -> Self {
        let bound = bound as i64;
        Self(rng.gen_range(-bound..=bound))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Residue of this value modulo `modulus`.
    pub fn to_field(self, modulus: u64) -> u64 {
        to_field(self.0, modulus)
    }
}

impl From<SignedSmall> for i64 {
    fn from(value: SignedSmall) -> Self {
        value.0
    }
}

/// Samples `len` independent values from `[-bound, bound]`.
pub fn sample_signed_vec<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    len: usize,
    bound: u64,
) -> Vec<SignedSmall> {
    (0..len).map(|_| SignedSmall::sample(rng, bound)).collect()
}

/// Validates a slice of raw integers against `bound`.
pub fn signed_vec_from_values(
    values: &[i64],
    bound: u64,
) -> Result<Vec<SignedSmall>, PolynomialError> {
    values.iter().map(|&v| SignedSmall::new(v, bound)).collect()
}

pub fn signed_values(values: &[SignedSmall]) -> Vec<i64> {
    values.iter().map(|v| v.value()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn bound_is_inclusive() {
        assert!(SignedSmall::new(3, 3).is_ok());
        assert!(SignedSmall::new(-3, 3).is_ok());
        assert_eq!(
            SignedSmall::new(-4, 3),
            Err(PolynomialError::SignedOutOfRange {
                value: -4,
                bound: 3
            })
        );
    }

    #[test]
    fn sampling_stays_in_bounds_and_hits_extremes() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let values = signed_values(&sample_signed_vec(&mut rng, 4096, 3));
        assert!(values.iter().all(|v| (-3..=3).contains(v)));
        assert!(values.contains(&-3));
        assert!(values.contains(&3));
    }

    #[test]
    fn raw_values_are_checked_against_the_bound() {
        assert_eq!(
            signed_vec_from_values(&[0, -3, 3], 3).unwrap(),
            vec![
                SignedSmall::new(0, 3).unwrap(),
                SignedSmall::new(-3, 3).unwrap(),
                SignedSmall::new(3, 3).unwrap(),
            ]
        );
        assert_eq!(
            signed_vec_from_values(&[0, i64::MAX], 3),
            Err(PolynomialError::SignedOutOfRange {
                value: i64::MAX,
                bound: 3
            })
        );
        let raw: i64 = SignedSmall::new(-2, 3).unwrap().into();
        assert_eq!(raw, -2);
    }

    #[test]
    fn field_residue() {
        let q = 167772161;
        assert_eq!(SignedSmall::new(-2, 3).unwrap().to_field(q), q - 2);
        assert_eq!(SignedSmall::new(2, 3).unwrap().to_field(q), 2);
    }
}
