// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Seeded end-to-end fixtures.

use anyhow::Result;
use audit_params::{AuditPreset, RlweParams};
use audit_rlwe::{generate_keypair, EncryptionRandomness, KeyPair, Message};
use audit_zk_helpers::{AuditCircuitInput, OwnerIdentity};
use rand::{CryptoRng, RngCore};
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;
use tracing::debug;

use crate::seeded_rng;

/// Parameters, key pair and owner identity drawn from one seeded stream.
#[derive(Debug)]
pub struct AuditFixture {
    pub params: Arc<RlweParams>,
    pub keys: KeyPair,
    pub owner: OwnerIdentity,
    pub rng: ChaCha20Rng,
}

impl AuditFixture {
    pub fn new(preset: AuditPreset, seed: u64) -> Result<Self> {
        let params = preset.build_arc()?;
        let mut rng = seeded_rng(seed);
        let keys = generate_keypair(&params, &mut rng)?;
        let owner = OwnerIdentity::random(&mut rng)?;
        debug!(%preset, seed, "built audit fixture");
        Ok(Self {
            params,
            keys,
            owner,
            rng,
        })
    }

    /// The owner point encoded into message slots.
    pub fn owner_message(&self) -> Result<Message> {
        Ok(Message::from_owner_point(
            &self.owner.x(),
            &self.owner.y(),
            &self.params,
        )?)
    }

    /// Fresh randomness from the fixture's stream.
    pub fn randomness(&mut self) -> EncryptionRandomness {
        EncryptionRandomness::sample(&self.params, &mut self.rng)
    }

    /// Circuit input with fresh randomness.
    pub fn circuit_input(&mut self) -> AuditCircuitInput {
        let randomness = self.randomness();
        AuditCircuitInput {
            public_key: self.keys.public.clone(),
            owner: self.owner.clone(),
            randomness,
        }
    }
}

/// `slots` bytes following a fixed affine pattern.
pub fn patterned_bytes(slots: usize) -> Vec<u8> {
    (0..slots).map(|i| (i * 37 + 11) as u8).collect()
}

/// A message of uniformly random bytes.
pub fn random_message<R: RngCore + CryptoRng + ?Sized>(
    params: &RlweParams,
    rng: &mut R,
) -> Result<Message> {
    let mut bytes = vec![0u8; params.message_slots()];
    rng.fill_bytes(&mut bytes);
    Ok(Message::from_bytes(&bytes, params)?)
}
