// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Owner identity on the Grumpkin curve.
//!
//! Grumpkin is `y^2 = x^3 - 17` over the BN254 scalar field, so its points
//! have coordinates that are native proof-field elements. The owner point is
//! the fixed-base multiple of the owner scalar; its two coordinates are the
//! payload encrypted into the message slots and hashed into the owner
//! commitment.

use crate::commitments::compute_owner_commitment;
use crate::errors::ZkHelpersError;
use ark_bn254::{Fq, Fr};
use ark_ec::short_weierstrass::{Affine, Projective, SWCurveConfig};
use ark_ec::{AffineRepr, CurveConfig, CurveGroup};
use ark_ff::{AdditiveGroup, BigInteger, Field, MontFp, PrimeField, UniformRand, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrumpkinConfig;

pub type GrumpkinAffine = Affine<GrumpkinConfig>;
pub type GrumpkinProjective = Projective<GrumpkinConfig>;

impl CurveConfig for GrumpkinConfig {
    type BaseField = Fr;
    type ScalarField = Fq;

    const COFACTOR: &'static [u64] = &[1];
    const COFACTOR_INV: Fq = Fq::ONE;
}

impl SWCurveConfig for GrumpkinConfig {
    const COEFF_A: Fr = Fr::ZERO;
    const COEFF_B: Fr = MontFp!("-17");
    const GENERATOR: GrumpkinAffine = Affine::new_unchecked(
        MontFp!("1"),
        MontFp!("17631683881184975370165255887551781615748388533673675138860"),
    );

    #[inline(always)]
    fn mul_by_a(_: Self::BaseField) -> Self::BaseField {
        Self::BaseField::ZERO
    }
}

/// Fixed-base multiplication `secret * G`, returned as `(x, y)`.
pub fn owner_point(secret: &Fr) -> Result<(Fr, Fr), ZkHelpersError> {
    if secret.is_zero() {
        return Err(ZkHelpersError::ZeroOwnerScalar);
    }
    // The Grumpkin group order is the BN254 base prime, which exceeds the
    // scalar field prime, so the owner scalar converts without reduction.
    let scalar = Fq::from_le_bytes_mod_order(&secret.into_bigint().to_bytes_le());
    let point = (GrumpkinAffine::generator() * scalar).into_affine();
    if point.infinity {
        return Err(ZkHelpersError::ZeroOwnerScalar);
    }
    Ok((point.x, point.y))
}

/// An owner scalar together with its public point.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct OwnerIdentity {
    secret: Fr,
    x: Fr,
    y: Fr,
}

impl std::fmt::Debug for OwnerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnerIdentity")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish_non_exhaustive()
    }
}

impl OwnerIdentity {
    pub fn derive(secret: Fr) -> Result<Self, ZkHelpersError> {
        let (x, y) = owner_point(&secret)?;
        Ok(Self { secret, x, y })
    }

    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, ZkHelpersError> {
        let mut secret = Fr::rand(rng);
        while secret.is_zero() {
            secret = Fr::rand(rng);
        }
        Self::derive(secret)
    }

    pub fn secret(&self) -> &Fr {
        &self.secret
    }

    pub fn x(&self) -> Fr {
        self.x
    }

    pub fn y(&self) -> Fr {
        self.y
    }

    /// `Poseidon(x, y)`, the public owner commitment.
    pub fn commitment(&self) -> Result<Fr, ZkHelpersError> {
        compute_owner_commitment(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn generator_is_on_curve() {
        let g = GrumpkinAffine::generator();
        assert!(g.is_on_curve());
        assert_eq!(g.y.square(), g.x.square() * g.x - Fr::from(17u64));
    }

    #[test]
    fn scalar_one_is_the_generator() {
        let (x, y) = owner_point(&Fr::from(1u64)).unwrap();
        assert_eq!(x, Fr::from(1u64));
        assert_eq!(y, GrumpkinAffine::generator().y);
    }

    #[test]
    fn derived_points_are_on_curve_and_additive() {
        let identity = OwnerIdentity::derive(Fr::from(12345u64)).unwrap();
        let point = GrumpkinAffine::new(identity.x(), identity.y());
        assert!(point.is_on_curve());

        let (x2, y2) = owner_point(&Fr::from(12344u64)).unwrap();
        let sum = (GrumpkinAffine::new(x2, y2) + GrumpkinAffine::generator()).into_affine();
        assert_eq!(sum, point);
    }

    #[test]
    fn zero_scalar_is_rejected() {
        assert!(matches!(
            OwnerIdentity::derive(Fr::from(0u64)),
            Err(ZkHelpersError::ZeroOwnerScalar)
        ));
    }

    #[test]
    fn commitment_hashes_the_point() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let identity = OwnerIdentity::random(&mut rng).unwrap();
        assert_eq!(
            identity.commitment().unwrap(),
            compute_owner_commitment(identity.x(), identity.y()).unwrap()
        );
        assert!(!format!("{identity:?}").contains(&identity.secret().to_string()));
    }
}
