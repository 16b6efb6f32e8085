//! In-memory host implementation
//!
//! Suitable for embedding and testing. Each object guards its slots with its
//! own `RwLock`, the way a real host would confine mutation to its own
//! thread; the binding layer never sees the lock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::debug;

use crate::binder::{BindPlan, FieldKind};
use crate::editable::{format_number, EDITABLE_TEXT_MEMBER, EDITABLE_VALUE_MEMBER};
use crate::error::{AccessError, BindError, Result};
use crate::handle::{HandleProvider, HostHandle};
use crate::object::{FieldSlot, HostObject, HostValue, TypeDescriptor, ValueKind, Visibility};

/// Type name used for editable cells created by [`InMemoryObject::editable`].
pub const EDITABLE_CELL_TYPE: &str = "EditableDouble";

/// A host object whose slots live in memory.
pub struct InMemoryObject {
    descriptor: Arc<TypeDescriptor>,
    slots: RwLock<Vec<HostValue>>,
    writes: Arc<AtomicU64>,
    cells: Vec<(String, Arc<InMemoryObject>)>,
}

impl InMemoryObject {
    /// Create an object with every member set to its kind's zero value.
    pub fn new(descriptor: Arc<TypeDescriptor>) -> Arc<Self> {
        Arc::new(Self::build(descriptor, Arc::default()))
    }

    /// Create an editable cell holding `value` with a matching text form.
    pub fn editable(value: f64) -> Arc<Self> {
        Self::editable_cell(value, Arc::default())
    }

    /// Create an object of type `type_name` that satisfies `plan`.
    ///
    /// Editable fields receive fresh cells holding `0`. The cells share the
    /// owner's write counter.
    pub fn conforming(type_name: &str, plan: &BindPlan) -> Arc<Self> {
        let mut builder = TypeDescriptor::builder(type_name);
        for (field, kind) in plan.fields() {
            builder = builder.field(field.as_str(), declared_kind(*kind));
        }
        let mut obj = Self::build(Arc::new(builder.build()), Arc::default());
        for (i, (field, kind)) in plan.fields().iter().enumerate() {
            if *kind == FieldKind::EditableNumber {
                let cell = Self::editable_cell(0.0, obj.writes.clone());
                obj.slots.get_mut()[i] = HostValue::Object(cell.clone());
                obj.cells.push((field.clone(), cell));
            }
        }
        Arc::new(obj)
    }

    fn build(descriptor: Arc<TypeDescriptor>, writes: Arc<AtomicU64>) -> Self {
        let slots = descriptor
            .members()
            .iter()
            .map(|m| zero_value(&m.kind))
            .collect();
        Self {
            descriptor,
            slots: RwLock::new(slots),
            writes,
            cells: Vec::new(),
        }
    }

    fn editable_cell(value: f64, writes: Arc<AtomicU64>) -> Arc<Self> {
        let mut cell = Self::build(Arc::new(editable_cell_descriptor()), writes);
        {
            let slots = cell.slots.get_mut();
            slots[0] = HostValue::Number(value);
            slots[1] = HostValue::Text(format_number(value));
        }
        Arc::new(cell)
    }

    /// The cell [`InMemoryObject::conforming`] installed in `field`.
    pub fn cell(&self, field: &str) -> Option<Arc<InMemoryObject>> {
        self.cells
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, cell)| cell.clone())
    }

    /// Host-side read by member name.
    pub fn get_by_name(&self, name: &str) -> std::result::Result<HostValue, AccessError> {
        let slot = self.slot_of(name)?;
        self.read(slot)
    }

    /// Host-side write by member name.
    ///
    /// Models the host mutating its own state; not counted in
    /// [`InMemoryObject::external_writes`].
    pub fn set_by_name(
        &self,
        name: &str,
        value: HostValue,
    ) -> std::result::Result<(), AccessError> {
        let slot = self.slot_of(name)?;
        self.store(slot, value)
    }

    /// Number of writes that arrived through the [`HostObject`] interface,
    /// counting writes to the cells created alongside this object.
    pub fn external_writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    fn slot_of(&self, name: &str) -> std::result::Result<FieldSlot, AccessError> {
        self.descriptor
            .find(name)
            .map(|(slot, _)| slot)
            .ok_or_else(|| AccessError::UnexpectedValue {
                field: name.to_string(),
                expected: format!("member of {}", self.descriptor.name()),
                found: "nothing".into(),
            })
    }

    fn store(&self, slot: FieldSlot, value: HostValue) -> std::result::Result<(), AccessError> {
        let member = self
            .descriptor
            .member(slot)
            .ok_or_else(|| self.out_of_range(slot))?;
        if !value.fits(&member.kind) {
            return Err(AccessError::UnexpectedValue {
                field: member.name.clone(),
                expected: member.kind.to_string(),
                found: value.kind_name(),
            });
        }
        let mut slots = self.slots.write();
        slots[slot.0] = value;
        Ok(())
    }

    fn out_of_range(&self, slot: FieldSlot) -> AccessError {
        AccessError::SlotOutOfRange {
            type_name: self.descriptor.name().to_string(),
            slot: slot.0,
        }
    }
}

impl HostObject for InMemoryObject {
    fn descriptor(&self) -> Arc<TypeDescriptor> {
        self.descriptor.clone()
    }

    fn read(&self, slot: FieldSlot) -> std::result::Result<HostValue, AccessError> {
        self.slots
            .read()
            .get(slot.0)
            .cloned()
            .ok_or_else(|| self.out_of_range(slot))
    }

    fn write(&self, slot: FieldSlot, value: HostValue) -> std::result::Result<(), AccessError> {
        self.store(slot, value)?;
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// In-memory host: a set of named subsystem instances.
pub struct InMemoryHost {
    subsystems: DashMap<String, Arc<InMemoryObject>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            subsystems: DashMap::new(),
        }
    }

    /// Install (or replace) the subsystem called `name`.
    pub fn insert(&self, name: impl Into<String>, instance: Arc<InMemoryObject>) {
        let name = name.into();
        debug!(
            subsystem = %name,
            host_type = instance.descriptor.name(),
            "Subsystem installed"
        );
        self.subsystems.insert(name, instance);
    }

    pub fn subsystem(&self, name: &str) -> Option<Arc<InMemoryObject>> {
        self.subsystems.get(name).map(|s| s.clone())
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleProvider for InMemoryHost {
    fn handle(&self, name: &str) -> Result<HostHandle> {
        let instance = self
            .subsystem(name)
            .ok_or_else(|| BindError::SubsystemNotFound(name.to_string()))?;
        Ok(HostHandle::from_instance(instance))
    }
}

fn editable_cell_descriptor() -> TypeDescriptor {
    TypeDescriptor::builder(EDITABLE_CELL_TYPE)
        .member(EDITABLE_VALUE_MEMBER, ValueKind::Number, Visibility::Public)
        .field(EDITABLE_TEXT_MEMBER, ValueKind::Text)
        .build()
}

fn declared_kind(kind: FieldKind) -> ValueKind {
    match kind {
        FieldKind::Boolean => ValueKind::Bool,
        FieldKind::Number => ValueKind::Number,
        FieldKind::EnumOrdinal => ValueKind::Int,
        FieldKind::EditableNumber => ValueKind::Object(EDITABLE_CELL_TYPE.into()),
    }
}

fn zero_value(kind: &ValueKind) -> HostValue {
    match kind {
        ValueKind::Bool => HostValue::Bool(false),
        ValueKind::Number => HostValue::Number(0.0),
        ValueKind::Int => HostValue::Int(0),
        ValueKind::Text => HostValue::Text(String::new()),
        ValueKind::Object(_) => HostValue::Null,
    }
}
