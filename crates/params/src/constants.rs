// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Constants for audit presets
//!
//! This module contains all hardcoded values used in preset definitions.

/// Production preset (degree 1024)
pub mod audit_1024 {
    pub const DEGREE: usize = 1024;
    /// 40 * 2^22 + 1, NTT-friendly prime.
    pub const CIPHERTEXT_MODULUS: u64 = 167772161;
    pub const PLAINTEXT_MODULUS: u64 = 256;
    pub const NOISE_BOUND: u64 = 3;
}

/// Small preset for fast tests (degree 64) - DO NOT USE IN PRODUCTION
pub mod insecure_64 {
    pub const DEGREE: usize = 64;
    pub const CIPHERTEXT_MODULUS: u64 = 167772161;
    pub const PLAINTEXT_MODULUS: u64 = 256;
    pub const NOISE_BOUND: u64 = 3;
}

/// Layout constants shared by every preset
pub mod shared {
    /// Bytes per payload coordinate.
    pub const COORDINATE_BYTES: usize = 32;
    /// Two coordinates, one byte per slot.
    pub const MESSAGE_SLOTS: usize = 2 * COORDINATE_BYTES;
    /// Largest value a message slot may hold.
    pub const MAX_SLOT_VALUE: u64 = 255;

    pub const RANGE_OFFSET: u64 = 128;
    pub const RANGE_BITS: u32 = 8;

    pub const PACK_WIDTH: usize = 7;
    pub const PACK_BITS: u32 = 32;

    /// BN254 scalar field modulus.
    pub const PROOF_FIELD_MODULUS: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";
    pub const PROOF_FIELD_BITS: u32 = 254;
}

/// Threshold sharing defaults
pub mod sharing_defaults {
    pub const THRESHOLD: usize = 2;
    pub const NUM_SHARES: usize = 3;
}
