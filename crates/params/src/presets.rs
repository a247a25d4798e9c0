// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::builder::{build_params, build_params_arc, RlweParams};
use crate::constants::{audit_1024, insecure_64, shared};
use crate::errors::ParamsError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error as ThisError;

/// Default preset for the whole codebase.
pub const DEFAULT_AUDIT_PRESET: AuditPreset = AuditPreset::Audit1024;

/// Named RLWE parameter sets.
///
/// Both presets share the ciphertext modulus, plaintext modulus and noise
/// bound; they only differ in ring degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AuditPreset {
    /// Degree 64 ring - DO NOT USE IN PRODUCTION
    ///
    /// Same moduli as the production preset, small enough to run full
    /// key generation, encryption and constraint checking in unit tests.
    InsecureAudit64,
    /// Degree 1024 ring, q = 167772161, t = 256, B = 3.
    #[default]
    Audit1024,
}

/// Metadata describing a preset
#[derive(Debug, Clone, Copy)]
pub struct PresetMetadata {
    /// The canonical name of the preset (e.g., "AUDIT_1024")
    pub name: &'static str,
    /// Ring degree N of Z_q[x]/(x^N + 1)
    pub degree: usize,
    /// Whether the preset may be used outside of tests
    pub production: bool,
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

/// A complete parameter set definition
///
/// Plain description of a parameter set. It becomes usable by the rest of the
/// workspace only after [`RlweParamSet::build`] validated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RlweParamSet {
    /// Ring degree N
    pub degree: usize,
    /// Ciphertext prime q
    pub ciphertext_modulus: u64,
    /// Plaintext modulus t
    pub plaintext_modulus: u64,
    /// Noise bound B: every secret, mask and noise coefficient lies in [-B, B]
    pub noise_bound: u64,
    /// Number of message slots L (sparse c0 length)
    pub message_slots: usize,
}

impl RlweParamSet {
    pub fn build(self) -> Result<RlweParams, ParamsError> {
        build_params(self)
    }

    pub fn build_arc(self) -> Result<Arc<RlweParams>, ParamsError> {
        build_params_arc(self)
    }
}

impl AuditPreset {
    pub const ALL: [AuditPreset; 2] = [AuditPreset::InsecureAudit64, AuditPreset::Audit1024];

    pub fn from_name(name: &str) -> Result<Self, PresetError> {
        let normalized = name.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "INSECURE_AUDIT_64" => Ok(Self::InsecureAudit64),
            "AUDIT_1024" => Ok(Self::Audit1024),
            _ => Err(PresetError::UnknownPreset(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuditPreset::InsecureAudit64 => "INSECURE_AUDIT_64",
            AuditPreset::Audit1024 => "AUDIT_1024",
        }
    }

    pub fn list() -> Vec<&'static str> {
        Self::ALL.iter().map(AuditPreset::name).collect()
    }

    pub fn metadata(&self) -> PresetMetadata {
        match self {
            AuditPreset::InsecureAudit64 => PresetMetadata {
                name: self.name(),
                degree: insecure_64::DEGREE,
                production: false,
            },
            AuditPreset::Audit1024 => PresetMetadata {
                name: self.name(),
                degree: audit_1024::DEGREE,
                production: true,
            },
        }
    }

    pub fn param_set(&self) -> RlweParamSet {
        (*self).into()
    }

    pub fn build(&self) -> Result<RlweParams, ParamsError> {
        self.param_set().build()
    }

    pub fn build_arc(&self) -> Result<Arc<RlweParams>, ParamsError> {
        self.param_set().build_arc()
    }
}

impl From<AuditPreset> for RlweParamSet {
    fn from(preset: AuditPreset) -> Self {
        match preset {
            AuditPreset::InsecureAudit64 => RlweParamSet {
                degree: insecure_64::DEGREE,
                ciphertext_modulus: insecure_64::CIPHERTEXT_MODULUS,
                plaintext_modulus: insecure_64::PLAINTEXT_MODULUS,
                noise_bound: insecure_64::NOISE_BOUND,
                message_slots: shared::MESSAGE_SLOTS,
            },
            AuditPreset::Audit1024 => RlweParamSet {
                degree: audit_1024::DEGREE,
                ciphertext_modulus: audit_1024::CIPHERTEXT_MODULUS,
                plaintext_modulus: audit_1024::PLAINTEXT_MODULUS,
                noise_bound: audit_1024::NOISE_BOUND,
                message_slots: shared::MESSAGE_SLOTS,
            },
        }
    }
}

impl std::str::FromStr for AuditPreset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for AuditPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for AuditPreset {
    type Error = PresetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<AuditPreset> for String {
    fn from(preset: AuditPreset) -> Self {
        preset.name().to_string()
    }
}
