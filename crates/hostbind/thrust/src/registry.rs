//! Module registry
//!
//! Holds fully bound modules keyed by name so a transport can dispatch
//! `(module, property)` calls. Only a successfully constructed module can be
//! registered, so a half-bound module is never reachable.

use std::collections::BTreeMap;

use tracing::info;

use crate::error::{ModuleError, PropertyError, Result};
use crate::value::{PropertyInfo, PropertyValue};

/// A bound module the transport can call into.
pub trait RemoteModule: Send + Sync {
    fn name(&self) -> &str;

    /// Registration records for every property.
    fn describe(&self) -> Vec<PropertyInfo>;

    fn get(&self, property: &str) -> Result<PropertyValue>;

    fn set(&self, property: &str, value: PropertyValue) -> Result<()>;
}

/// Registered modules, by name.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, Box<dyn RemoteModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        module: Box<dyn RemoteModule>,
    ) -> std::result::Result<(), ModuleError> {
        let name = module.name().to_string();
        if self.modules.contains_key(&name) {
            return Err(ModuleError::DuplicateModule(name));
        }
        info!(module = %name, properties = module.describe().len(), "Module registered");
        self.modules.insert(name, module);
        Ok(())
    }

    pub fn module(&self, name: &str) -> Result<&dyn RemoteModule> {
        self.modules
            .get(name)
            .map(|m| m.as_ref())
            .ok_or_else(|| PropertyError::UnknownModule(name.to_string()))
    }

    pub fn module_names(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    pub fn get(&self, module: &str, property: &str) -> Result<PropertyValue> {
        self.module(module)?.get(property)
    }

    pub fn set(&self, module: &str, property: &str, value: PropertyValue) -> Result<()> {
        self.module(module)?.set(property, value)
    }

    /// Registration records of every module, keyed by module name.
    pub fn describe_all(&self) -> BTreeMap<String, Vec<PropertyInfo>> {
        self.modules
            .iter()
            .map(|(name, m)| (name.clone(), m.describe()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
