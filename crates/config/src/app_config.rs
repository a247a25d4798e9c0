// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use crate::yaml::load_yaml_with_env;
use anyhow::Context;
use anyhow::Result;
use audit_params::{AuditPreset, RlweParams};
use audit_shamir::ShamirConfig;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;

pub const DEFAULT_CONFIG_NAME: &str = "audit.config.yaml";
pub const ENV_PREFIX: &str = "AUDIT_";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration: which parameter preset to use, how the secret key
/// is shared, and the tracing filter directive.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AuditConfig {
    #[serde(default)]
    preset: AuditPreset,
    #[serde(default)]
    sharing: ShamirConfig,
    #[serde(default = "default_log_filter")]
    log_filter: String,
    #[serde(default, skip_serializing)]
    config_file: Option<PathBuf>,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            preset: AuditPreset::default(),
            sharing: ShamirConfig::default(),
            log_filter: default_log_filter(),
            config_file: None,
        }
    }
}

impl AuditConfig {
    pub fn preset(&self) -> AuditPreset {
        self.preset
    }

    /// Validated parameters for the configured preset.
    pub fn params(&self) -> Result<Arc<RlweParams>> {
        self.preset
            .build_arc()
            .with_context(|| format!("Invalid parameter preset {}", self.preset))
    }

    pub fn sharing(&self) -> ShamirConfig {
        self.sharing
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// The file the configuration was resolved to, whether or not it existed.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }
}

/// Load the config at `config_file`, or the nearest `audit.config.yaml`
/// above the working directory, or the one in the OS config directory.
pub fn load_config(config_file: Option<String>) -> Result<AuditConfig> {
    load_config_from(env::current_dir()?, OsDirs::config_dir(), config_file)
}

pub fn load_config_from(
    cwd: PathBuf,
    default_config_dir: PathBuf,
    config_file: Option<String>,
) -> Result<AuditConfig> {
    let resolved = resolve_config_path(
        find_in_parent,
        &cwd,
        &default_config_dir,
        DEFAULT_CONFIG_NAME,
        config_file.as_deref().map(Path::new),
    );

    let loaded_yaml = load_yaml_with_env(&resolved.path)?;

    let mut config: AuditConfig = Figment::from(Serialized::defaults(AuditConfig::default()))
        .merge(Yaml::string(&loaded_yaml))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Could not parse configuration")?;

    info!(
        path = ?resolved.path,
        source = ?resolved.source,
        preset = %config.preset,
        threshold = config.sharing.threshold(),
        num_shares = config.sharing.num_shares(),
        "loaded audit configuration"
    );

    config.config_file = Some(resolved.path);
    Ok(config)
}

pub struct OsDirs;
impl OsDirs {
    /// `<os config dir>/rlwe-audit`, or `./rlwe-audit` when the platform has none.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rlwe-audit")
    }
}
