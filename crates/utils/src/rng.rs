// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::UtilsError;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::error;

/// Randomness source shared between the operations of one session.
pub type SharedRng = Arc<Mutex<ChaCha20Rng>>;

/// Deterministic source for tests and reproducible fixtures.
pub fn create_shared_rng_from_u64(seed: u64) -> SharedRng {
    Arc::new(Mutex::new(ChaCha20Rng::seed_from_u64(seed)))
}

/// Locks the shared source, surfacing a poisoned lock as an error.
pub fn lock_rng(rng: &SharedRng) -> Result<MutexGuard<'_, ChaCha20Rng>, UtilsError> {
    rng.lock().map_err(|_| {
        error!("shared rng mutex poisoned");
        UtilsError::RngPoisoned
    })
}
