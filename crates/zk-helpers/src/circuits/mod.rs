// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

pub mod codegen;
pub mod computation;
pub mod errors;

pub use codegen::*;
pub use computation::*;
pub use errors::*;

pub mod audit;
pub use audit::*;
