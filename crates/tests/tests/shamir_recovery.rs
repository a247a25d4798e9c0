// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Result};
use ark_bn254::Fr;
use audit_params::AuditPreset;
use audit_rlwe::{decrypt, encrypt, Message};
use audit_shamir::{
    reconstruct_secret, reconstruct_secret_key, split_secret, split_secret_key, ShamirConfig,
    ShamirError, Share, ShareHolderRecord,
};
use audit_test_helpers::{init_tracing, patterned_bytes, seeded_rng, write_json, AuditFixture};
use audit_utils::create_shared_rng_from_u64;
use std::fs;
use tempfile::tempdir;

fn pick(shares: &[Share], xs: &[u64]) -> Vec<Share> {
    shares
        .iter()
        .filter(|s| xs.contains(&s.x))
        .copied()
        .collect()
}

#[test]
fn two_of_three_recovers_12345() -> Result<()> {
    let config = ShamirConfig::new(2, 3)?;
    let secret = Fr::from(12345u64);
    let shares = split_secret(secret, &config, &mut seeded_rng(12345));
    assert_eq!(shares.len(), 3);

    for subset in [[1, 2], [1, 3], [2, 3]] {
        let recovered = reconstruct_secret(&pick(&shares, &subset), config.threshold())?;
        assert_eq!(recovered, secret, "subset {subset:?}");
    }
    Ok(())
}

#[test]
fn one_share_is_rejected_before_interpolation() -> Result<()> {
    let config = ShamirConfig::new(2, 3)?;
    let shares = split_secret(Fr::from(12345u64), &config, &mut seeded_rng(1));
    match reconstruct_secret(&pick(&shares, &[2]), config.threshold()) {
        Err(ShamirError::InsufficientShares {
            required: 2,
            provided: 1,
        }) => Ok(()),
        other => bail!("expected InsufficientShares, got {other:?}"),
    }
}

#[test]
fn recovered_key_decrypts_after_records_are_persisted() -> Result<()> {
    let _guard = init_tracing("info");
    let mut fixture = AuditFixture::new(AuditPreset::InsecureAudit64, 21)?;
    let params = fixture.params.clone();
    let config = ShamirConfig::new(2, 3)?;
    let records = split_secret_key(
        &fixture.keys.secret,
        &config,
        &create_shared_rng_from_u64(21),
    )?;

    let dir = tempdir()?;
    let mut paths = Vec::new();
    for record in &records {
        let path = dir
            .path()
            .join("holders")
            .join(format!("share_{}.json", record.share_index));
        paths.push(write_json(&path, record)?);
    }

    // Holders 1 and 3 come back.
    let returned: Vec<ShareHolderRecord> = [&paths[0], &paths[2]]
        .iter()
        .map(|p| -> Result<ShareHolderRecord> { Ok(serde_json::from_slice(&fs::read(p)?)?) })
        .collect::<Result<_>>()?;
    let recovered = reconstruct_secret_key(&returned, &params)?;
    assert_eq!(
        recovered.coefficients(),
        fixture.keys.secret.coefficients()
    );

    let message = Message::from_bytes(&patterned_bytes(params.message_slots()), &params)?;
    let encryption = encrypt(&fixture.keys.public, &message, &params, &mut fixture.rng)?;
    let secret_key = recovered.to_secret_key(&params)?;
    assert_eq!(
        decrypt(&secret_key, &encryption.ciphertext, &params)?,
        message
    );
    Ok(())
}

#[test]
fn records_from_different_sharings_do_not_mix() -> Result<()> {
    let fixture = AuditFixture::new(AuditPreset::InsecureAudit64, 4)?;
    let two_of_three = split_secret_key(
        &fixture.keys.secret,
        &ShamirConfig::new(2, 3)?,
        &create_shared_rng_from_u64(1),
    )?;
    let three_of_five = split_secret_key(
        &fixture.keys.secret,
        &ShamirConfig::new(3, 5)?,
        &create_shared_rng_from_u64(2),
    )?;

    let mixed = vec![two_of_three[0].clone(), three_of_five[1].clone()];
    assert!(matches!(
        reconstruct_secret_key(&mixed, &fixture.params),
        Err(ShamirError::MismatchedConfig)
    ));
    Ok(())
}
