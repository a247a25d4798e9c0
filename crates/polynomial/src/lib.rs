// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Ring arithmetic
//!
//! Arithmetic in `Z_q[x]/(x^N + 1)` for the audit encryption scheme.
//!
//! ## Features
//!
//! - Negacyclic multiplication with exact `u128` accumulation.
//! - Rows of the negacyclic multiplication matrix, used to express ring
//!   products as linear relations inside a circuit.
//! - Bounded signed sampling from `[-B, B]`.
//! - The field switch: quotient witnesses that carry `mod q` relations into
//!   the proof field.

pub mod errors;
pub mod field_switch;
pub mod ring;
pub mod signed;
pub mod utils;

pub use errors::PolynomialError;
pub use field_switch::{FieldSwitch, SwitchedRelation};
pub use ring::RingElement;
pub use signed::{sample_signed_vec, signed_values, signed_vec_from_values, SignedSmall};
pub use utils::*;
