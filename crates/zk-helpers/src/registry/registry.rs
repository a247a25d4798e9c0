// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use audit_params::AuditPreset;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors produced by the circuit registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown circuit: {name}")]
    UnknownCircuit { name: String },
}

/// Trait for circuit metadata.
pub trait Circuit: Send + Sync {
    const NAME: &'static str;
    const PREFIX: &'static str;
    const SUPPORTED_PRESETS: &'static [AuditPreset];

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn prefix(&self) -> &'static str {
        Self::PREFIX
    }

    fn supports(&self, preset: AuditPreset) -> bool {
        Self::SUPPORTED_PRESETS.contains(&preset)
    }
}

pub trait CircuitMetadata: Send + Sync {
    fn name(&self) -> &'static str;
    fn prefix(&self) -> &'static str;
    fn supported_presets(&self) -> &'static [AuditPreset];
}

impl<T: Circuit> CircuitMetadata for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn prefix(&self) -> &'static str {
        T::PREFIX
    }

    fn supported_presets(&self) -> &'static [AuditPreset] {
        T::SUPPORTED_PRESETS
    }
}

/// Circuits this crate can emit witnesses for, keyed by lowercase name.
#[derive(Default)]
pub struct CircuitRegistry {
    circuits: BTreeMap<String, Arc<dyn CircuitMetadata>>,
}

impl CircuitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(crate::circuits::audit::AuditCircuit));
        registry
    }

    /// Replaces any circuit registered under the same name.
    pub fn register(&mut self, circuit: Arc<dyn CircuitMetadata>) {
        self.circuits.insert(circuit.name().to_lowercase(), circuit);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn CircuitMetadata>, RegistryError> {
        self.circuits
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| RegistryError::UnknownCircuit {
                name: name.to_string(),
            })
    }

    pub fn supported_presets(&self, name: &str) -> Result<&'static [AuditPreset], RegistryError> {
        Ok(self.get(name)?.supported_presets())
    }

    pub fn list_circuits(&self) -> Vec<String> {
        self.circuits.keys().cloned().collect()
    }
}
