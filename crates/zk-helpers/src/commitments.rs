// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Commitment functions shared by the prover inputs and any verifier.
//!
//! Both packed commitments use the rate-3 Poseidon2 sponge from
//! `audit-sponge`; the owner commitment is a circom Poseidon hash of the
//! owner point. The absorption order is part of the public statement and
//! must not change.

use crate::errors::ZkHelpersError;
use crate::packing::{PackedCiphertext, PackedPublicKey};
use ark_bn254::Fr as Field;
use ark_ff::{BigInteger, PrimeField};
use audit_sponge::{hash_pair, PackedSponge};

/// Commits to a packed ciphertext: `c0` packs, then `c1` packs.
pub fn compute_ciphertext_commitment(packed: &PackedCiphertext) -> Field {
    let mut sponge = PackedSponge::new();
    sponge.absorb(&packed.c0);
    sponge.absorb(&packed.c1);
    sponge.finish()
}

/// Commits to a packed public key: `a` packs, then `b` packs.
pub fn compute_public_key_commitment(packed: &PackedPublicKey) -> Field {
    let mut sponge = PackedSponge::new();
    sponge.absorb(&packed.a);
    sponge.absorb(&packed.b);
    sponge.finish()
}

/// Binds the owner point `(x, y)`.
pub fn compute_owner_commitment(x: Field, y: Field) -> Result<Field, ZkHelpersError> {
    Ok(hash_pair(x, y)?)
}

/// Big-endian bytes of a commitment, for callers storing it as `bytes32`.
pub fn commitment_to_bytes(commitment: &Field) -> [u8; 32] {
    let mut out = [0u8; 32];
    let bytes = commitment.into_bigint().to_bytes_be();
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_sponge::sponge_digest;
    use std::str::FromStr;

    fn packed_ciphertext() -> PackedCiphertext {
        PackedCiphertext {
            c0: (1..=10u64).map(Field::from).collect(),
            c1: (100..247u64).map(Field::from).collect(),
        }
    }

    #[test]
    fn ciphertext_commitment_absorbs_c0_then_c1() {
        let packed = packed_ciphertext();
        let commitment = compute_ciphertext_commitment(&packed);
        assert_eq!(commitment, sponge_digest(&packed.elements()));
        assert_eq!(commitment, compute_ciphertext_commitment(&packed.clone()));

        let swapped = PackedCiphertext {
            c0: packed.c1.clone(),
            c1: packed.c0.clone(),
        };
        assert_ne!(compute_ciphertext_commitment(&swapped), commitment);
    }

    #[test]
    fn single_bit_perturbation_changes_commitment() {
        let packed = packed_ciphertext();
        let commitment = compute_ciphertext_commitment(&packed);
        for index in [0, 9] {
            let mut changed = packed.clone();
            changed.c0[index] += Field::from(1u64);
            assert_ne!(compute_ciphertext_commitment(&changed), commitment);
        }
        let mut changed = packed.clone();
        changed.c1[146] += Field::from(1u64 << 31);
        assert_ne!(compute_ciphertext_commitment(&changed), commitment);
    }

    #[test]
    fn public_key_commitment_is_independent_of_ciphertext_commitment() {
        let packed = packed_ciphertext();
        let pk = PackedPublicKey {
            a: packed.c0.clone(),
            b: packed.c1.clone(),
        };
        // Same absorption sequence, same sponge.
        assert_eq!(
            compute_public_key_commitment(&pk),
            compute_ciphertext_commitment(&packed)
        );
    }

    #[test]
    fn owner_commitment_matches_circom_poseidon() {
        let digest = compute_owner_commitment(Field::from(1u64), Field::from(2u64)).unwrap();
        assert_eq!(
            digest,
            Field::from_str(
                "7853200120776062878684798364095072458815029376092732009249414926327459813530"
            )
            .unwrap()
        );
    }

    #[test]
    fn commitment_bytes_are_big_endian() {
        let bytes = commitment_to_bytes(&Field::from(0x0102u64));
        assert_eq!(bytes[30], 0x01);
        assert_eq!(bytes[31], 0x02);
        assert!(bytes[..30].iter().all(|&b| b == 0));
    }
}
