// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The audit encryption circuit.
//!
//! Public values: the owner commitment, the ciphertext commitment and the
//! packed ciphertext. Private values: the owner scalar and point, the
//! message slots, the unpacked ciphertext, the encryption randomness and the
//! quotient witnesses.

pub mod circuit;
pub mod codegen;
pub mod computation;
pub mod sample;
pub mod system;

pub use circuit::{AuditCircuit, AuditCircuitInput};
pub use codegen::{generate_configs, generate_toml, TomlJson};
pub use computation::{AuditComputationOutput, AuditConfigs, Bits, Bounds, Witness};
pub use sample::AuditSample;
pub use system::{AuditConstraintSystem, AuditVariables};
