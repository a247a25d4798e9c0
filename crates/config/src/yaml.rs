// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Reads a YAML file and substitutes `${VAR}` references from the
/// environment. A missing file yields an empty document.
pub fn load_yaml_with_env(file_path: &Path) -> Result<String> {
    if !file_path.exists() {
        return Ok(String::new());
    }
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Could not read {}", file_path.display()))?;
    let expanded = shellexpand::env(&content)
        .with_context(|| format!("Could not expand variables in {}", file_path.display()))?;
    Ok(expanded.into_owned())
}
