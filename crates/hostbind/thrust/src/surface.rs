//! Typed property surface
//!
//! Name-addressed `get`/`set` over a set of bound host fields. This is what a
//! remote-call transport dispatches into. Every call reads or writes live
//! host state; two consecutive reads may disagree if the host moved the
//! value in between.

use std::collections::HashMap;

use hostbind_core::{BindError, FieldBinder, FieldBinding, FieldKind, HostHandle};
use tracing::debug;

use crate::catalog::{bind_plan, PropertySpec};
use crate::error::{PropertyError, Result};
use crate::status::DifferentialThrottleStatus;
use crate::value::{PropertyInfo, PropertyKind, PropertyValue};

/// One exposed property and the binding behind it.
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    spec: PropertySpec,
    binding: FieldBinding,
    status: Option<FieldBinding>,
}

impl PropertyDescriptor {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn spec(&self) -> &PropertySpec {
        &self.spec
    }

    pub fn kind(&self) -> PropertyKind {
        self.spec.property_kind()
    }

    pub fn binding(&self) -> &FieldBinding {
        &self.binding
    }

    /// Companion status binding, if the host reports one for this property.
    pub fn status(&self) -> Option<&FieldBinding> {
        self.status.as_ref()
    }

    pub fn info(&self) -> PropertyInfo {
        PropertyInfo {
            name: self.spec.name.to_string(),
            kind: self.kind(),
            writable: self.spec.writable(),
            gated_by: self.spec.gated_by.map(str::to_string),
        }
    }
}

/// Get/set surface over one host subsystem.
pub struct PropertySurface {
    handle: HostHandle,
    descriptors: Vec<PropertyDescriptor>,
    index: HashMap<&'static str, usize>,
    trace_writes: bool,
}

impl PropertySurface {
    /// Bind every property in `specs` against `handle`.
    ///
    /// Either all bindings resolve or none are kept.
    pub fn bind(
        handle: HostHandle,
        specs: &[PropertySpec],
        trace_writes: bool,
    ) -> std::result::Result<Self, BindError> {
        let bindings = FieldBinder::new(&handle).bind_all(&bind_plan(specs))?.into_map();

        let mut descriptors = Vec::with_capacity(specs.len());
        for spec in specs {
            let binding = take_binding(&bindings, spec.field, handle.descriptor().name())?;
            let status = match spec.companion_status {
                Some(field) => Some(take_binding(&bindings, field, handle.descriptor().name())?),
                None => None,
            };
            descriptors.push(PropertyDescriptor { spec: *spec, binding, status });
        }

        let index = descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name(), i))
            .collect();

        Ok(Self {
            handle,
            descriptors,
            index,
            trace_writes,
        })
    }

    pub fn handle(&self) -> &HostHandle {
        &self.handle
    }

    pub fn descriptors(&self) -> &[PropertyDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, name: &str) -> Result<&PropertyDescriptor> {
        self.index
            .get(name)
            .map(|&i| &self.descriptors[i])
            .ok_or_else(|| PropertyError::UnknownProperty(name.to_string()))
    }

    /// Registration records for every property, in catalog order.
    pub fn describe(&self) -> Vec<PropertyInfo> {
        self.descriptors.iter().map(PropertyDescriptor::info).collect()
    }

    pub fn get(&self, name: &str) -> Result<PropertyValue> {
        let descriptor = self.descriptor(name)?;
        let binding = descriptor.binding();
        let instance = self.handle.instance();

        match binding.kind() {
            FieldKind::Boolean => Ok(PropertyValue::Bool(binding.read_bool(instance)?)),
            FieldKind::Number | FieldKind::EditableNumber => {
                Ok(PropertyValue::Double(binding.read_number(instance)?))
            }
            FieldKind::EnumOrdinal => Ok(PropertyValue::Status(self.read_status(name, binding)?)),
        }
    }

    pub fn set(&self, name: &str, value: PropertyValue) -> Result<()> {
        let descriptor = self.descriptor(name)?;
        let binding = descriptor.binding();
        let instance = self.handle.instance();

        match (binding.kind(), value) {
            (FieldKind::EnumOrdinal, _) => {
                return Err(PropertyError::ReadOnlyProperty {
                    property: name.to_string(),
                })
            }
            (FieldKind::Boolean, PropertyValue::Bool(b)) => binding.write_bool(instance, b)?,
            (FieldKind::Number | FieldKind::EditableNumber, PropertyValue::Double(d)) => {
                binding.write_number(instance, d)?
            }
            _ => {
                return Err(PropertyError::ValueKindMismatch {
                    property: name.to_string(),
                    expected: descriptor.kind(),
                    found: value.kind(),
                })
            }
        }

        if self.trace_writes {
            debug!(property = name, %value, "Property written");
        }
        Ok(())
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        match self.get(name)? {
            PropertyValue::Bool(b) => Ok(b),
            other => Err(self.kind_mismatch(name, PropertyKind::Bool, other)),
        }
    }

    pub fn get_double(&self, name: &str) -> Result<f64> {
        match self.get(name)? {
            PropertyValue::Double(d) => Ok(d),
            other => Err(self.kind_mismatch(name, PropertyKind::Double, other)),
        }
    }

    pub fn get_status(&self, name: &str) -> Result<DifferentialThrottleStatus> {
        match self.get(name)? {
            PropertyValue::Status(s) => Ok(s),
            other => Err(self.kind_mismatch(name, PropertyKind::Enum, other)),
        }
    }

    /// Status the host computed for `name`, if it has a companion status.
    pub fn companion_status(&self, name: &str) -> Result<Option<DifferentialThrottleStatus>> {
        let descriptor = self.descriptor(name)?;
        descriptor
            .status()
            .map(|binding| self.read_status(name, binding))
            .transpose()
    }

    fn read_status(
        &self,
        name: &str,
        binding: &FieldBinding,
    ) -> Result<DifferentialThrottleStatus> {
        let ordinal = binding.read_ordinal(self.handle.instance())?;
        DifferentialThrottleStatus::from_ordinal(ordinal).ok_or_else(|| {
            PropertyError::UnmappedOrdinal {
                property: name.to_string(),
                ordinal,
            }
        })
    }

    fn kind_mismatch(
        &self,
        name: &str,
        asked: PropertyKind,
        actual: PropertyValue,
    ) -> PropertyError {
        PropertyError::ValueKindMismatch {
            property: name.to_string(),
            expected: asked,
            found: actual.kind(),
        }
    }
}

fn take_binding(
    bindings: &HashMap<String, FieldBinding>,
    field: &str,
    type_name: &str,
) -> std::result::Result<FieldBinding, BindError> {
    bindings.get(field).cloned().ok_or_else(|| BindError::FieldNotFound {
        type_name: type_name.to_string(),
        field: field.to_string(),
    })
}
