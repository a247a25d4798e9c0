// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Threshold sharing of RLWE secret keys for audit recovery.

pub mod config;
pub mod errors;
pub mod records;
pub mod shamir;

pub use config::ShamirConfig;
pub use errors::ShamirError;
pub use records::{
    reconstruct_secret_key, split_secret_key, validate_records, ReconstructedSecret,
    ShareHolderRecord,
};
pub use shamir::{evaluate, lagrange_weights, reconstruct_secret, split_secret, Share};
