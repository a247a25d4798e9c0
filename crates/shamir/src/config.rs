// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::ShamirError;
use audit_params::constants::sharing_defaults;
use serde::{Deserialize, Serialize};

/// Threshold sharing parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShamirConfig")]
pub struct ShamirConfig {
    /// Shares needed to reconstruct
    threshold: usize,
    /// Shares handed out
    num_shares: usize,
}

#[derive(Deserialize)]
struct RawShamirConfig {
    #[serde(default = "default_threshold")]
    threshold: usize,
    #[serde(default = "default_num_shares")]
    num_shares: usize,
}

fn default_threshold() -> usize {
    sharing_defaults::THRESHOLD
}

fn default_num_shares() -> usize {
    sharing_defaults::NUM_SHARES
}

impl TryFrom<RawShamirConfig> for ShamirConfig {
    type Error = ShamirError;

    fn try_from(raw: RawShamirConfig) -> Result<Self, Self::Error> {
        Self::new(raw.threshold, raw.num_shares)
    }
}

impl Default for ShamirConfig {
    fn default() -> Self {
        Self {
            threshold: sharing_defaults::THRESHOLD,
            num_shares: sharing_defaults::NUM_SHARES,
        }
    }
}

impl ShamirConfig {
    pub fn new(threshold: usize, num_shares: usize) -> Result<Self, ShamirError> {
        if threshold == 0 || threshold > num_shares {
            return Err(ShamirError::InvalidConfig {
                threshold,
                num_shares,
            });
        }
        Ok(Self {
            threshold,
            num_shares,
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn num_shares(&self) -> usize {
        self.num_shares
    }
}
