// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Preset definitions and builders for RLWE audit parameters.
//!
//! Every operation in the workspace receives an immutable [`RlweParams`]. The
//! only way to obtain one is through [`build_params`] / [`build_params_arc`],
//! which run the analytic magnitude and noise checks exactly once per
//! parameter set.

pub mod builder;
pub mod constants;
pub mod errors;
pub mod presets;
pub mod validation;

pub use builder::{build_params, build_params_arc, RlweParams};
pub use errors::ParamsError;
pub use presets::{AuditPreset, PresetError, PresetMetadata, RlweParamSet, DEFAULT_AUDIT_PRESET};
pub use validation::{
    proof_field_modulus, validate_param_set, validate_with_proof_modulus, NoiseReport,
};
