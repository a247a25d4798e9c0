// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Hashes over the BN254 scalar field.
//!
//! Two independent constructions are exposed:
//!
//! - [`PackedSponge`]: a rate-3 / capacity-1 duplex over the Poseidon2 `t = 4`
//!   permutation. The state starts at zero, every block of three inputs is
//!   added into `state[0..3]` and permuted, a trailing partial block is added
//!   the same way, and one final permutation always runs before `state[0]` is
//!   read out. This is the digest used for packed ciphertexts and public keys.
//! - [`hash_pair`]: circom-compatible Poseidon over two inputs, used to bind
//!   an owner point.

use ark_bn254::Fr;
use ark_ff::Zero;
use light_poseidon::{Poseidon, PoseidonError, PoseidonHasher};
use taceo_poseidon2::bn254::t4::permutation as poseidon2_permutation;
use thiserror::Error;

/// Field type used by both hashes (BN254 scalar field).
pub type Field = Fr;

/// Number of field elements absorbed per permutation call.
pub const RATE: usize = 3;

/// Total state size (rate + one capacity element).
pub const STATE_SIZE: usize = 4;

#[derive(Debug, Error)]
pub enum SpongeError {
    #[error("Poseidon error: {0}")]
    Poseidon(#[from] PoseidonError),
}

/// Streaming form of the packed-value sponge.
///
/// Absorbing `[x0, x1, x2, x3]` in one call or across several calls yields
/// the same digest.
#[derive(Clone, Debug)]
pub struct PackedSponge {
    state: [Field; STATE_SIZE],
    absorb_pos: usize,
}

impl Default for PackedSponge {
    fn default() -> Self {
        Self::new()
    }
}

impl PackedSponge {
    pub fn new() -> Self {
        Self {
            state: [Field::zero(); STATE_SIZE],
            absorb_pos: 0,
        }
    }

    /// Adds inputs into the rate part of the state, permuting after every
    /// full block.
    pub fn absorb(&mut self, input: &[Field]) {
        for value in input {
            self.state[self.absorb_pos] += value;
            self.absorb_pos += 1;
            if self.absorb_pos == RATE {
                self.permute();
                self.absorb_pos = 0;
            }
        }
    }

    /// Runs the closing permutation and returns `state[0]`.
    pub fn finish(mut self) -> Field {
        self.permute();
        self.state[0]
    }

    fn permute(&mut self) {
        self.state = poseidon2_permutation(&self.state);
    }
}

/// One-shot digest of `inputs` through [`PackedSponge`].
pub fn sponge_digest(inputs: &[Field]) -> Field {
    let mut sponge = PackedSponge::new();
    sponge.absorb(inputs);
    sponge.finish()
}

/// Circom-compatible Poseidon hash of two field elements.
pub fn hash_pair(left: Field, right: Field) -> Result<Field, SpongeError> {
    let mut poseidon = Poseidon::<Fr>::new_circom(2)?;
    Ok(poseidon.hash(&[left, right])?)
}
