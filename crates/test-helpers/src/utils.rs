// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{error, subscriber::DefaultGuard, trace};
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a test-local subscriber. Honours `RUST_LOG`, else `default_filter`.
/// Keep the guard alive for the duration of the test.
pub fn init_tracing(default_filter: &str) -> DefaultGuard {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = fmt().with_env_filter(filter).with_test_writer().finish();
    tracing::subscriber::set_default(subscriber)
}

pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

pub fn write_file_with_dirs(path: &Path, content: &[u8]) -> std::io::Result<PathBuf> {
    let abs_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    match abs_path.to_str() {
        Some(s) => trace!(path = s, "Writing to path"),
        None => error!(path=?abs_path, "Cannot parse path"),
    };

    if let Some(parent) = abs_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(&abs_path)?;
    file.write_all(content)?;
    trace!(path = ?abs_path, "File written successfully!");
    Ok(abs_path)
}

/// Pretty JSON of `value` written to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<PathBuf> {
    let json = serde_json::to_vec_pretty(value)?;
    Ok(write_file_with_dirs(path, &json)?)
}
