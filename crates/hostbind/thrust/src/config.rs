//! Bridge configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModuleError;

/// Configuration for binding a module to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Host subsystem to bind
    pub module_name: String,

    /// Emit a debug event for every property write
    pub trace_writes: bool,

    /// Host fields that only some host versions carry
    pub optional_fields: OptionalFields,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            module_name: "ThrustController".into(),
            trace_writes: true,
            optional_fields: OptionalFields::default(),
        }
    }
}

/// Opt-in host fields. Binding one the host lacks fails construction like
/// any other missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionalFields {
    pub limit_to_prevent_unstable_ignition: bool,
    pub auto_rcs_ullaging: bool,
}

impl BridgeConfig {
    /// Load configuration from a TOML file; a missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModuleError> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ModuleError> {
        toml::from_str(contents).map_err(|e| ModuleError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ModuleError> {
        toml::to_string(self).map_err(|e| ModuleError::Config(e.to_string()))
    }
}
