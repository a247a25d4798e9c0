// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::identity::OwnerIdentity;
use crate::registry::Circuit;
use audit_params::AuditPreset;
use audit_rlwe::{EncryptionRandomness, PublicKey};

#[derive(Debug)]
pub struct AuditCircuit;

impl Circuit for AuditCircuit {
    const NAME: &'static str = "rlwe-audit";
    const PREFIX: &'static str = "RLWE_AUDIT";
    const SUPPORTED_PRESETS: &'static [AuditPreset] = &AuditPreset::ALL;
}

#[derive(Debug, Clone)]
pub struct AuditCircuitInput {
    pub public_key: PublicKey,
    pub owner: OwnerIdentity,
    pub randomness: EncryptionRandomness,
}
