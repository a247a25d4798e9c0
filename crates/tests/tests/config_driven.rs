// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use audit_config::{load_config_from, DEFAULT_CONFIG_NAME};
use audit_params::AuditPreset;
use audit_rlwe::{decrypt, encrypt, generate_keypair};
use audit_shamir::{reconstruct_secret_key, split_secret_key};
use audit_test_helpers::{init_tracing, random_message, seeded_rng, write_file_with_dirs};
use audit_utils::create_shared_rng_from_u64;
use tempfile::tempdir;

#[test]
fn configured_preset_and_sharing_drive_a_recovery() -> Result<()> {
    let _guard = init_tracing("info");
    let dir = tempdir()?;
    write_file_with_dirs(
        &dir.path().join(DEFAULT_CONFIG_NAME),
        b"preset: INSECURE_AUDIT_64\nsharing:\n  threshold: 3\n  num_shares: 4\n",
    )?;
    let nested = dir.path().join("work").join("session");
    std::fs::create_dir_all(&nested)?;

    let config = load_config_from(nested, dir.path().join("os-config"), None)?;
    assert_eq!(config.preset(), AuditPreset::InsecureAudit64);
    let params = config.params()?;
    let sharing = config.sharing();

    let mut rng = seeded_rng(5);
    let keys = generate_keypair(&params, &mut rng)?;
    let records = split_secret_key(&keys.secret, &sharing, &create_shared_rng_from_u64(5))?;
    assert_eq!(records.len(), 4);

    let message = random_message(&params, &mut rng)?;
    let encryption = encrypt(&keys.public, &message, &params, &mut rng)?;

    let quorum = &records[1..];
    let secret_key = reconstruct_secret_key(quorum, &params)?.to_secret_key(&params)?;
    assert_eq!(decrypt(&secret_key, &encryption.ciphertext, &params)?, message);

    assert!(reconstruct_secret_key(&records[..2], &params).is_err());
    Ok(())
}

#[test]
fn explicit_file_without_content_falls_back_to_defaults() -> Result<()> {
    let dir = tempdir()?;
    let config = load_config_from(
        dir.path().to_path_buf(),
        dir.path().join("os-config"),
        Some(dir.path().join("missing.yaml").to_string_lossy().into_owned()),
    )?;
    assert_eq!(config.preset(), AuditPreset::Audit1024);
    assert_eq!(config.params()?.degree(), 1024);
    assert_eq!(config.sharing().threshold(), 2);
    Ok(())
}
