// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use audit_params::AuditPreset;
use audit_rlwe::{decrypt, encrypt, Ciphertext, Message};
use audit_test_helpers::{init_tracing, patterned_bytes, random_message, AuditFixture};
use audit_zk_helpers::{
    commitment_to_bytes, compute_ciphertext_commitment, generate_toml, AuditCircuit,
    CircuitCodegen, Computation, PackedCiphertext, Witness,
};

const SEED: u64 = 0x5eed;

#[test]
fn known_message_round_trips_at_full_degree() -> Result<()> {
    let _guard = init_tracing("info");
    let mut fixture = AuditFixture::new(AuditPreset::Audit1024, SEED)?;
    let params = fixture.params.clone();
    assert_eq!(params.degree(), 1024);
    assert_eq!(params.ciphertext_modulus(), 167772161);
    assert_eq!(params.plaintext_modulus(), 256);
    assert_eq!(params.delta(), 655360);
    assert_eq!(params.noise_bound(), 3);

    let bytes = patterned_bytes(params.message_slots());
    assert_eq!(bytes.len(), 64);
    let message = Message::from_bytes(&bytes, &params)?;

    let encryption = encrypt(&fixture.keys.public, &message, &params, &mut fixture.rng)?;
    let decrypted = decrypt(&fixture.keys.secret, &encryption.ciphertext, &params)?;
    assert_eq!(decrypted.to_bytes(), bytes);

    // Two independent recomputations from the same ciphertext.
    let first = compute_ciphertext_commitment(&PackedCiphertext::new(
        &encryption.ciphertext,
        &params,
    )?);
    let record = serde_json::to_string(&encryption.ciphertext.to_record())?;
    let restored = Ciphertext::from_record(serde_json::from_str(&record)?, &params)?;
    let second = compute_ciphertext_commitment(&PackedCiphertext::new(&restored, &params)?);
    assert_eq!(first, second);
    assert_eq!(commitment_to_bytes(&first), commitment_to_bytes(&second));
    Ok(())
}

#[test]
fn fixed_seed_reproduces_the_ciphertext() -> Result<()> {
    let run = || -> Result<(Ciphertext, audit_sponge::Field)> {
        let mut fixture = AuditFixture::new(AuditPreset::Audit1024, SEED)?;
        let message = Message::from_bytes(&patterned_bytes(64), &fixture.params)?;
        let encryption = encrypt(
            &fixture.keys.public,
            &message,
            &fixture.params,
            &mut fixture.rng,
        )?;
        let commitment = compute_ciphertext_commitment(&PackedCiphertext::new(
            &encryption.ciphertext,
            &fixture.params,
        )?);
        Ok((encryption.ciphertext, commitment))
    };

    let (ct_a, commitment_a) = run()?;
    let (ct_b, commitment_b) = run()?;
    assert_eq!(ct_a, ct_b);
    assert_eq!(commitment_a, commitment_b);
    Ok(())
}

#[test]
fn random_messages_round_trip() -> Result<()> {
    let mut fixture = AuditFixture::new(AuditPreset::Audit1024, 77)?;
    let params = fixture.params.clone();
    for _ in 0..4 {
        let message = random_message(&params, &mut fixture.rng)?;
        let encryption = encrypt(&fixture.keys.public, &message, &params, &mut fixture.rng)?;
        assert_eq!(
            decrypt(&fixture.keys.secret, &encryption.ciphertext, &params)?,
            message
        );
    }
    Ok(())
}

#[test]
fn audit_witness_decrypts_to_the_owner_point() -> Result<()> {
    let _guard = init_tracing("info");
    let mut fixture = AuditFixture::new(AuditPreset::Audit1024, SEED)?;
    let params = fixture.params.clone();
    let input = fixture.circuit_input();

    let witness = Witness::compute(&params, &input)?;
    let ciphertext = witness.ciphertext(&params)?;
    let recovered = decrypt(&fixture.keys.secret, &ciphertext, &params)?;
    assert_eq!(recovered, fixture.owner_message()?);
    assert_eq!(
        recovered.to_owner_point()?,
        (fixture.owner.x(), fixture.owner.y())
    );
    assert_eq!(witness.wa_commitment, fixture.owner.commitment()?);
    assert_eq!(
        witness.ct_commitment,
        compute_ciphertext_commitment(&PackedCiphertext::new(&ciphertext, &params)?)
    );

    let artifacts = AuditCircuit.codegen(&params, &input)?;
    assert_eq!(artifacts.toml, generate_toml(&witness)?);
    assert!(artifacts.toml.contains("ct_commitment"));
    Ok(())
}
