// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use path_clean::clean;
use std::path::{Path, PathBuf};

/// Upward file search, injectable for tests.
pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Where a configuration path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit,
    Discovered,
    OsDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfigPath {
    pub path: PathBuf,
    pub source: ConfigSource,
}

/// Nearest `filename` in `start` or any of its ancestors.
pub fn find_in_parent(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

/// Explicit file (relative paths are joined to `cwd` and cleaned), else the
/// nearest `filename` above `cwd`, else `filename` in `default_config_dir`.
pub fn resolve_config_path(
    find: FindInParent,
    cwd: &Path,
    default_config_dir: &Path,
    filename: &str,
    explicit_file: Option<&Path>,
) -> ResolvedConfigPath {
    if let Some(file) = explicit_file {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            clean(cwd.join(file))
        };
        return ResolvedConfigPath {
            path,
            source: ConfigSource::Explicit,
        };
    }

    match find(cwd, filename) {
        Some(path) => ResolvedConfigPath {
            path,
            source: ConfigSource::Discovered,
        },
        None => ResolvedConfigPath {
            path: clean(default_config_dir.join(filename)),
            source: ConfigSource::OsDefault,
        },
    }
}
