// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Encryption of message slots together with the quotient witnesses that
//! let a circuit check the ciphertext over the proof field.

use crate::errors::RlweError;
use crate::keys::PublicKey;
use crate::message::Message;
use audit_params::RlweParams;
use audit_polynomial::{
    sample_signed_vec, signed_values, signed_vec_from_values, to_field, FieldSwitch, RingElement,
};
use audit_utils::formatters::q_hex_vec;
use num_bigint::BigInt;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Mask `r` and noise `e1`, `e2`, all in `[-B, B]`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EncryptionRandomness {
    r: Vec<i64>,
    e1: Vec<i64>,
    e2: Vec<i64>,
}

impl std::fmt::Debug for EncryptionRandomness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionRandomness").finish_non_exhaustive()
    }
}

impl EncryptionRandomness {
    pub fn new(
        r: Vec<i64>,
        e1: Vec<i64>,
        e2: Vec<i64>,
        params: &RlweParams,
    ) -> Result<Self, RlweError> {
        let bound = params.noise_bound();
        for (what, values, expected) in [
            ("mask coefficients", &r, params.degree()),
            ("c0 noise coefficients", &e1, params.message_slots()),
            ("c1 noise coefficients", &e2, params.degree()),
        ] {
            if values.len() != expected {
                return Err(RlweError::Length {
                    what,
                    expected,
                    actual: values.len(),
                });
            }
            signed_vec_from_values(values, bound)?;
        }
        Ok(Self { r, e1, e2 })
    }

    pub fn sample<R: RngCore + CryptoRng + ?Sized>(params: &RlweParams, rng: &mut R) -> Self {
        let bound = params.noise_bound();
        Self {
            r: signed_values(&sample_signed_vec(rng, params.degree(), bound)),
            e1: signed_values(&sample_signed_vec(rng, params.message_slots(), bound)),
            e2: signed_values(&sample_signed_vec(rng, params.degree(), bound)),
        }
    }

    pub fn r(&self) -> &[i64] {
        &self.r
    }

    pub fn e1(&self) -> &[i64] {
        &self.e1
    }

    pub fn e2(&self) -> &[i64] {
        &self.e2
    }
}

/// `c0` holds the first L coefficients of `b*r + e1 + delta*m`, `c1` is the
/// full `a*r + e2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    c0: Vec<u64>,
    c1: RingElement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiphertextRecord {
    #[serde(with = "q_hex_vec")]
    pub c0: Vec<u64>,
    #[serde(with = "q_hex_vec")]
    pub c1: Vec<u64>,
}

impl Ciphertext {
    pub fn new(c0: Vec<u64>, c1: RingElement, params: &RlweParams) -> Result<Self, RlweError> {
        if c0.len() != params.message_slots() {
            return Err(RlweError::Length {
                what: "c0 coefficients",
                expected: params.message_slots(),
                actual: c0.len(),
            });
        }
        // The sparse component is checked as a truncated ring element.
        RingElement::with_modulus(c0.clone(), c0.len(), params.ciphertext_modulus())?;
        let c1 = RingElement::new(c1.into_coefficients(), params)?;
        Ok(Self { c0, c1 })
    }

    pub fn c0(&self) -> &[u64] {
        &self.c0
    }

    pub fn c1(&self) -> &RingElement {
        &self.c1
    }

    pub fn to_record(&self) -> CiphertextRecord {
        CiphertextRecord {
            c0: self.c0.clone(),
            c1: self.c1.coefficients().to_vec(),
        }
    }

    pub fn from_record(record: CiphertextRecord, params: &RlweParams) -> Result<Self, RlweError> {
        let c1 = RingElement::new(record.c1, params)?;
        Self::new(record.c0, c1, params)
    }
}

/// Private values behind one ciphertext.
///
/// `k0[i]` and `k1[i]` satisfy `c0[i] + k0[i]*q = <B_i, r> + e1[i] + delta*m[i]`
/// and `c1[i] + k1[i]*q = <A_i, r> + e2[i]` over the integers, where `A_i`
/// and `B_i` are negacyclic matrix rows of the public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionWitness {
    pub randomness: EncryptionRandomness,
    pub k0: Vec<BigInt>,
    pub k1: Vec<BigInt>,
}

#[derive(Debug, Clone)]
pub struct Encryption {
    pub ciphertext: Ciphertext,
    pub witness: EncryptionWitness,
}

pub fn encrypt<R: RngCore + CryptoRng + ?Sized>(
    public_key: &PublicKey,
    message: &Message,
    params: &RlweParams,
    rng: &mut R,
) -> Result<Encryption, RlweError> {
    let randomness = EncryptionRandomness::sample(params, rng);
    encrypt_with_randomness(public_key, message, randomness, params)
}

/// Deterministic encryption given explicit randomness.
pub fn encrypt_with_randomness(
    public_key: &PublicKey,
    message: &Message,
    randomness: EncryptionRandomness,
    params: &RlweParams,
) -> Result<Encryption, RlweError> {
    let q = params.ciphertext_modulus();
    let delta = params.delta();
    let slots = message.slots();
    let bound = params.noise_bound();

    message.check(params)?;
    for (what, actual, expected) in [
        ("c0 noise coefficients", randomness.e1().len(), params.message_slots()),
        ("c1 noise coefficients", randomness.e2().len(), params.degree()),
    ] {
        if actual != expected {
            return Err(RlweError::Length {
                what,
                expected,
                actual,
            });
        }
    }

    let r = signed_vec_from_values(randomness.r(), bound)?;
    let e1 = randomness.e1();
    let e2 = randomness.e2();
    let r_ring = RingElement::from_signed(&r, params)?;

    let br = public_key.b().negacyclic_multiply(&r_ring)?;
    let ar = public_key.a().negacyclic_multiply(&r_ring)?;

    let c0: Vec<u64> = (0..params.message_slots())
        .map(|i| {
            let sum = br.coefficients()[i] as u128
                + to_field(e1[i], q) as u128
                + delta as u128 * slots[i] as u128;
            (sum % q as u128) as u64
        })
        .collect();
    let e2_ring = RingElement::new(e2.iter().map(|&v| to_field(v, q)).collect(), params)?;
    let c1 = ar.add(&e2_ring)?;

    let switch = FieldSwitch::new(params);
    let c0_extra: Vec<i128> = e1
        .iter()
        .zip(slots)
        .map(|(&e, &m)| e as i128 + delta as i128 * m as i128)
        .collect();
    let c1_extra: Vec<i128> = e2.iter().map(|&e| e as i128).collect();
    let k0 = switch
        .switch_product(public_key.b(), &r, &c0_extra, &c0)?
        .quotients;
    let k1 = switch
        .switch_product(public_key.a(), &r, &c1_extra, c1.coefficients())?
        .quotients;

    debug!(
        slots = params.message_slots(),
        degree = params.degree(),
        "encrypted message with quotient witnesses"
    );

    Ok(Encryption {
        ciphertext: Ciphertext { c0, c1 },
        witness: EncryptionWitness {
            randomness,
            k0,
            k1,
        },
    })
}
