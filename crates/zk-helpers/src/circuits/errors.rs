// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for circuit and codegen operations.

use crate::errors::ZkHelpersError;
use audit_polynomial::PolynomialError;
use audit_rlwe::RlweError;
use thiserror::Error;

/// Errors that can occur during witness computation, codegen or artifact I/O.
#[derive(Error, Debug)]
pub enum CircuitsErrors {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
    #[error("RLWE error: {0}")]
    Rlwe(#[from] RlweError),
    #[error("Polynomial error: {0}")]
    Polynomial(#[from] PolynomialError),
    #[error("ZK helper error: {0}")]
    ZkHelpers(#[from] ZkHelpersError),
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
