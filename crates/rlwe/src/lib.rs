// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! RLWE public-key encryption of byte slots.
//!
//! Encryption returns the ciphertext together with every private value an
//! external prover needs: the mask, both noise vectors and the quotient
//! witnesses produced by the field switch.

pub mod decrypt;
pub mod encrypt;
pub mod errors;
pub mod keys;
pub mod message;

pub use decrypt::decrypt;
pub use encrypt::{
    encrypt, encrypt_with_randomness, Ciphertext, CiphertextRecord, Encryption,
    EncryptionRandomness, EncryptionWitness,
};
pub use errors::RlweError;
pub use keys::{generate_keypair, KeyPair, PublicKey, PublicKeyRecord, SecretKey};
pub use message::{field_from_le_bytes, field_to_le_bytes, Message};
