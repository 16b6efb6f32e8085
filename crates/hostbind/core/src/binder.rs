//! Field binder
//!
//! Resolves named host fields once, at module construction, into immutable
//! [`FieldBinding`]s. Name lookup never happens on the access path, so shape
//! drift in the host is reported at startup rather than on first use.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::editable::EditableCell;
use crate::error::{AccessError, BindError, Result};
use crate::handle::HostHandle;
use crate::object::{FieldSlot, HostObject, HostValue, ValueKind};

/// The kind a binding expects its host field to have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Boolean,
    Number,
    /// A boxed editable cell holding a number and its text form
    EditableNumber,
    EnumOrdinal,
}

impl FieldKind {
    fn accepts(&self, declared: &ValueKind) -> bool {
        matches!(
            (self, declared),
            (Self::Boolean, ValueKind::Bool)
                | (Self::Number, ValueKind::Number)
                | (Self::EnumOrdinal, ValueKind::Int)
                | (Self::EditableNumber, ValueKind::Object(_))
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "Boolean"),
            Self::Number => write!(f, "Number"),
            Self::EditableNumber => write!(f, "EditableNumber"),
            Self::EnumOrdinal => write!(f, "EnumOrdinal"),
        }
    }
}

#[derive(Clone, Debug)]
enum Accessor {
    Slot(FieldSlot),
    Editable { slot: FieldSlot, cell: EditableCell },
}

/// A resolved, reusable reference to one host field.
///
/// Immutable once produced. Reads and writes go straight to live host
/// state; nothing is cached.
#[derive(Clone, Debug)]
pub struct FieldBinding {
    name: String,
    kind: FieldKind,
    accessor: Accessor,
}

impl FieldBinding {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn slot(&self) -> FieldSlot {
        match &self.accessor {
            Accessor::Slot(slot) | Accessor::Editable { slot, .. } => *slot,
        }
    }

    /// The editable cell captured at bind time, for `EditableNumber` fields.
    pub fn editable(&self) -> Option<&EditableCell> {
        match &self.accessor {
            Accessor::Editable { cell, .. } => Some(cell),
            Accessor::Slot(_) => None,
        }
    }

    /// Raw boxed value of the field on `instance`.
    pub fn read(&self, instance: &dyn HostObject) -> std::result::Result<HostValue, AccessError> {
        instance.read(self.slot())
    }

    /// Replace the raw boxed value of the field on `instance`.
    ///
    /// Refused for editable fields: swapping the cell out would leave this
    /// binding writing to a detached cell.
    pub fn write(
        &self,
        instance: &dyn HostObject,
        value: HostValue,
    ) -> std::result::Result<(), AccessError> {
        match &self.accessor {
            Accessor::Editable { .. } => Err(AccessError::EditableCellReplace {
                field: self.name.clone(),
            }),
            Accessor::Slot(slot) => instance.write(*slot, value),
        }
    }

    pub fn read_bool(&self, instance: &dyn HostObject) -> std::result::Result<bool, AccessError> {
        let value = self.read(instance)?;
        value.as_bool().ok_or_else(|| self.unexpected("Bool", &value))
    }

    pub fn write_bool(
        &self,
        instance: &dyn HostObject,
        value: bool,
    ) -> std::result::Result<(), AccessError> {
        self.write(instance, HostValue::Bool(value))
    }

    /// Numeric payload; editable fields go through their cell.
    ///
    /// For editable fields `instance` is ignored and the cell captured at
    /// bind time is read.
    pub fn read_number(&self, instance: &dyn HostObject) -> std::result::Result<f64, AccessError> {
        match &self.accessor {
            Accessor::Editable { cell, .. } => cell.read_number(),
            Accessor::Slot(_) => {
                let value = self.read(instance)?;
                value
                    .as_number()
                    .ok_or_else(|| self.unexpected("Number", &value))
            }
        }
    }

    /// Store a number; editable fields also refresh their cached text.
    ///
    /// For editable fields `instance` is ignored and the cell captured at
    /// bind time is written.
    pub fn write_number(
        &self,
        instance: &dyn HostObject,
        value: f64,
    ) -> std::result::Result<(), AccessError> {
        match &self.accessor {
            Accessor::Editable { cell, .. } => cell.write_number(value),
            Accessor::Slot(_) => self.write(instance, HostValue::Number(value)),
        }
    }

    pub fn read_ordinal(&self, instance: &dyn HostObject) -> std::result::Result<i64, AccessError> {
        let value = self.read(instance)?;
        value.as_int().ok_or_else(|| self.unexpected("Int", &value))
    }

    fn unexpected(&self, expected: &str, found: &HostValue) -> AccessError {
        AccessError::UnexpectedValue {
            field: self.name.clone(),
            expected: expected.into(),
            found: found.kind_name(),
        }
    }
}

/// Ordered list of fields a module needs, with their expected kinds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindPlan {
    fields: Vec<(String, FieldKind)>,
}

impl BindPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push((name.into(), kind));
        self
    }

    pub fn fields(&self) -> &[(String, FieldKind)] {
        &self.fields
    }

    /// The same plan without `name`. Handy for building drifted hosts.
    pub fn without(&self, name: &str) -> Self {
        Self {
            fields: self.fields.iter().filter(|(f, _)| f != name).cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Every binding of a plan, keyed by field name.
#[derive(Clone, Debug)]
pub struct BindingSet {
    bindings: HashMap<String, FieldBinding>,
}

impl BindingSet {
    pub fn get(&self, field: &str) -> Option<&FieldBinding> {
        self.bindings.get(field)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn into_map(self) -> HashMap<String, FieldBinding> {
        self.bindings
    }
}

/// Resolves bindings against one host handle.
pub struct FieldBinder<'h> {
    handle: &'h HostHandle,
}

impl<'h> FieldBinder<'h> {
    pub fn new(handle: &'h HostHandle) -> Self {
        Self { handle }
    }

    /// Resolve a single field.
    pub fn bind(&self, field: &str, expected: FieldKind) -> Result<FieldBinding> {
        let desc = self.handle.descriptor();
        let type_name = desc.name();

        let (slot, member) = desc.find(field).ok_or_else(|| BindError::FieldNotFound {
            type_name: type_name.to_string(),
            field: field.to_string(),
        })?;

        if !expected.accepts(&member.kind) {
            return Err(BindError::KindMismatch {
                type_name: type_name.to_string(),
                field: field.to_string(),
                expected: expected.to_string(),
                found: member.kind.to_string(),
            });
        }

        let accessor = match expected {
            FieldKind::EditableNumber => {
                let boxed = self.handle.instance().read(slot)?;
                let cell = match boxed {
                    HostValue::Object(cell) => cell,
                    HostValue::Null => {
                        return Err(BindError::NullEditableCell {
                            type_name: type_name.to_string(),
                            field: field.to_string(),
                        })
                    }
                    other => {
                        return Err(BindError::KindMismatch {
                            type_name: type_name.to_string(),
                            field: field.to_string(),
                            expected: expected.to_string(),
                            found: other.kind_name(),
                        })
                    }
                };
                Accessor::Editable {
                    slot,
                    cell: EditableCell::resolve(type_name, field, cell)?,
                }
            }
            _ => Accessor::Slot(slot),
        };

        debug!(host_type = type_name, field, kind = %expected, %slot, "Field bound");

        Ok(FieldBinding {
            name: field.to_string(),
            kind: expected,
            accessor,
        })
    }

    /// Resolve every field of `plan`, or fail on the first one that does not
    /// resolve. No host state is written either way.
    pub fn bind_all(&self, plan: &BindPlan) -> Result<BindingSet> {
        let type_name = self.handle.descriptor().name();
        let mut bindings = HashMap::with_capacity(plan.len());

        for (field, kind) in plan.fields() {
            match self.bind(field, *kind) {
                Ok(binding) => {
                    bindings.insert(field.clone(), binding);
                }
                Err(e) => {
                    warn!(host_type = type_name, field = %field, error = %e, "Host shape mismatch");
                    return Err(e);
                }
            }
        }

        info!(host_type = type_name, fields = bindings.len(), "Host fields bound");
        Ok(BindingSet { bindings })
    }
}

/// Resolve `field` on `handle`.
pub fn bind(handle: &HostHandle, field: &str, expected: FieldKind) -> Result<FieldBinding> {
    FieldBinder::new(handle).bind(field, expected)
}
