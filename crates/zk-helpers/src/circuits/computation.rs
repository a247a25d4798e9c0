// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Computation traits and artifact types.
//!
//! [`Computation`] is a generic trait for computing values from parameters and input.
//! [`CircuitComputation`] extends it for circuits that produce bounds, bits and a witness.
//! [`Toml`] and [`Configs`] are the string types used for the prover input file and the
//! circuit constants record.

/// Prover input file contents.
pub type Toml = String;

/// Circuit constants as a JSON document.
pub type Configs = String;

/// Generic computation from parameters and input to a result.
pub trait Computation: Sized {
    type Params;
    type Input;
    type Error;

    /// Computes the result from parameters and input.
    fn compute(params: &Self::Params, input: &Self::Input) -> Result<Self, Self::Error>;

    /// Converts the result to a JSON [`serde_json::Value`] for serialization.
    /// Default: `serde_json::to_value(self)` when `Self: serde::Serialize`.
    fn to_json(&self) -> serde_json::Result<serde_json::Value>
    where
        Self: serde::Serialize,
    {
        serde_json::to_value(self)
    }
}

/// Circuit-specific computation: parameters and input produce bounds, bits and the witness.
pub trait CircuitComputation: crate::registry::Circuit {
    type Params;
    type Input;
    type Output;
    type Error;

    fn compute(params: &Self::Params, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
