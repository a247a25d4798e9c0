// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

pub mod circuits;
pub mod commitments;
pub mod constraints;
pub mod errors;
pub mod identity;
pub mod packing;
pub mod range;
pub mod registry;
pub mod utils;

pub use circuits::*;
pub use commitments::*;
pub use constraints::*;
pub use errors::*;
pub use identity::*;
pub use packing::*;
pub use range::*;
pub use registry::*;
pub use utils::*;
