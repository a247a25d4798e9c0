// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sample data generation for the audit circuit.
//!
//! [`AuditSample`] produces a random RLWE key pair, owner identity and
//! encryption randomness; the input is used for codegen and tests, the
//! secret key for checking decryption.

use crate::circuits::audit::circuit::AuditCircuitInput;
use crate::identity::OwnerIdentity;
use crate::CircuitsErrors;
use audit_params::RlweParams;
use audit_rlwe::{generate_keypair, EncryptionRandomness, SecretKey};
use rand::{CryptoRng, RngCore};

#[derive(Debug, Clone)]
pub struct AuditSample {
    pub secret_key: SecretKey,
    pub input: AuditCircuitInput,
}

impl AuditSample {
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(
        params: &RlweParams,
        rng: &mut R,
    ) -> Result<Self, CircuitsErrors> {
        let keys = generate_keypair(params, rng)?;
        let owner = OwnerIdentity::random(rng)?;
        let randomness = EncryptionRandomness::sample(params, rng);

        Ok(Self {
            secret_key: keys.secret,
            input: AuditCircuitInput {
                public_key: keys.public,
                owner,
                randomness,
            },
        })
    }
}
