// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::RlweError;
use audit_params::RlweParams;
use audit_polynomial::{
    sample_signed_vec, signed_values, signed_vec_from_values, to_field, RingElement,
};
use audit_utils::formatters::q_hex_vec;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret ring element with coefficients in `[-B, B]`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    coefficients: Vec<i64>,
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("degree", &self.coefficients.len())
            .finish_non_exhaustive()
    }
}

impl SecretKey {
    pub fn new(coefficients: Vec<i64>, params: &RlweParams) -> Result<Self, RlweError> {
        if coefficients.len() != params.degree() {
            return Err(RlweError::Length {
                what: "secret key coefficients",
                expected: params.degree(),
                actual: coefficients.len(),
            });
        }
        signed_vec_from_values(&coefficients, params.noise_bound())?;
        Ok(Self { coefficients })
    }

    pub fn sample<R: RngCore + CryptoRng + ?Sized>(params: &RlweParams, rng: &mut R) -> Self {
        let sampled = sample_signed_vec(rng, params.degree(), params.noise_bound());
        Self {
            coefficients: signed_values(&sampled),
        }
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// The key as a ring element modulo q.
    pub fn to_ring(&self, params: &RlweParams) -> Result<RingElement, RlweError> {
        let q = params.ciphertext_modulus();
        Ok(RingElement::new(
            self.coefficients.iter().map(|&v| to_field(v, q)).collect(),
            params,
        )?)
    }
}

/// Public key `(a, b)` with `b = -(a * sk) + e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    a: RingElement,
    b: RingElement,
}

/// Hex form of a public key: each coefficient as `0x%08x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyRecord {
    #[serde(with = "q_hex_vec")]
    pub a: Vec<u64>,
    #[serde(with = "q_hex_vec")]
    pub b: Vec<u64>,
}

impl PublicKey {
    pub fn new(a: RingElement, b: RingElement, params: &RlweParams) -> Result<Self, RlweError> {
        // Re-validating through the params rejects keys from another ring.
        let a = RingElement::new(a.into_coefficients(), params)?;
        let b = RingElement::new(b.into_coefficients(), params)?;
        Ok(Self { a, b })
    }

    /// Derives `b = -(a * sk) + e`.
    pub fn derive(
        secret: &SecretKey,
        a: RingElement,
        noise: &[i64],
        params: &RlweParams,
    ) -> Result<Self, RlweError> {
        let e = signed_vec_from_values(noise, params.noise_bound())?;
        let e = RingElement::from_signed(&e, params)?;
        let a_sk = a.negacyclic_multiply(&secret.to_ring(params)?)?;
        let b = a_sk.neg().add(&e)?;
        Self::new(a, b, params)
    }

    pub fn a(&self) -> &RingElement {
        &self.a
    }

    pub fn b(&self) -> &RingElement {
        &self.b
    }

    pub fn to_record(&self) -> PublicKeyRecord {
        PublicKeyRecord {
            a: self.a.coefficients().to_vec(),
            b: self.b.coefficients().to_vec(),
        }
    }

    pub fn from_record(record: PublicKeyRecord, params: &RlweParams) -> Result<Self, RlweError> {
        Ok(Self {
            a: RingElement::new(record.a, params)?,
            b: RingElement::new(record.b, params)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

/// Samples `sk`, `a` and `e` and derives the public key.
pub fn generate_keypair<R: RngCore + CryptoRng + ?Sized>(
    params: &RlweParams,
    rng: &mut R,
) -> Result<KeyPair, RlweError> {
    let secret = SecretKey::sample(params, rng);
    let a = RingElement::sample_uniform(rng, params);
    let mut noise = signed_values(&sample_signed_vec(
        rng,
        params.degree(),
        params.noise_bound(),
    ));
    let public = PublicKey::derive(&secret, a, &noise, params);
    noise.zeroize();

    info!(degree = params.degree(), "generated rlwe key pair");
    Ok(KeyPair {
        secret,
        public: public?,
    })
}
