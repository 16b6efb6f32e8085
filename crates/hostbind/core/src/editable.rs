//! Editable-value bridge
//!
//! The host keeps user-tunable numbers in small boxed cells: a numeric
//! payload (`val`) plus the text the host's own UI displays (`text`).
//! [`EditableCell`] is the only path through which this crate touches such a
//! cell, so a number is never written without its text being refreshed.
//!
//! The cell reference is captured once at bind time. If the host rebuilds
//! the owning object the captured cell goes stale and writes land on a
//! detached cell; that case is undefined here and is not re-resolved.

use std::fmt;

use crate::error::{AccessError, BindError};
use crate::object::{FieldSlot, HostObject, HostRef, HostValue, ValueKind};

/// Member holding the numeric payload of an editable cell.
pub const EDITABLE_VALUE_MEMBER: &str = "val";

/// Member holding the cached text form of an editable cell.
pub const EDITABLE_TEXT_MEMBER: &str = "text";

/// A bound editable cell.
#[derive(Clone)]
pub struct EditableCell {
    field: String,
    cell: HostRef,
    value_slot: FieldSlot,
    text_slot: FieldSlot,
}

impl EditableCell {
    /// Validate the shape of `cell` and resolve its two member slots.
    pub(crate) fn resolve(type_name: &str, field: &str, cell: HostRef) -> Result<Self, BindError> {
        let desc = cell.descriptor();
        let mismatch = || BindError::KindMismatch {
            type_name: type_name.to_string(),
            field: field.to_string(),
            expected: format!(
                "editable cell ({}: Number, {}: Text)",
                EDITABLE_VALUE_MEMBER, EDITABLE_TEXT_MEMBER
            ),
            found: desc.name().to_string(),
        };

        let value_slot = match desc.find(EDITABLE_VALUE_MEMBER) {
            Some((slot, m)) if m.kind == ValueKind::Number => slot,
            _ => return Err(mismatch()),
        };
        let text_slot = match desc.find(EDITABLE_TEXT_MEMBER) {
            Some((slot, m)) if m.kind == ValueKind::Text => slot,
            _ => return Err(mismatch()),
        };

        Ok(Self {
            field: field.to_string(),
            cell,
            value_slot,
            text_slot,
        })
    }

    /// Name of the host field this cell was bound through.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Current numeric payload, returned verbatim.
    pub fn read_number(&self) -> Result<f64, AccessError> {
        let value = self.cell.read(self.value_slot)?;
        value.as_number().ok_or_else(|| AccessError::UnexpectedValue {
            field: format!("{}.{}", self.field, EDITABLE_VALUE_MEMBER),
            expected: "Number".into(),
            found: value.kind_name(),
        })
    }

    /// Store a new payload and refresh the cached text form.
    ///
    /// No clamping is applied; bounds are the host's business.
    ///
    /// The payload is written before the text. If the text write fails the
    /// error is returned and the cell keeps the new payload beside the old
    /// text until the next successful write.
    pub fn write_number(&self, value: f64) -> Result<(), AccessError> {
        self.cell.write(self.value_slot, HostValue::Number(value))?;
        self.cell.write(self.text_slot, HostValue::Text(format_number(value)))
    }

    /// The text form the host would display for this cell.
    pub fn cached_text(&self) -> Result<String, AccessError> {
        let value = self.cell.read(self.text_slot)?;
        match value {
            HostValue::Text(text) => Ok(text),
            other => Err(AccessError::UnexpectedValue {
                field: format!("{}.{}", self.field, EDITABLE_TEXT_MEMBER),
                expected: "Text".into(),
                found: other.kind_name(),
            }),
        }
    }
}

impl fmt::Debug for EditableCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditableCell")
            .field("field", &self.field)
            .field("cell_type", &self.cell.descriptor().name())
            .finish()
    }
}

/// Read the numeric payload of an editable cell.
pub fn read_number(cell: &EditableCell) -> Result<f64, AccessError> {
    cell.read_number()
}

/// Write the numeric payload of an editable cell, keeping its text in sync.
pub fn write_number(cell: &EditableCell, value: f64) -> Result<(), AccessError> {
    cell.write_number(value)
}

/// Shortest decimal form that round-trips (`3.5` -> "3.5", `1.0` -> "1").
pub(crate) fn format_number(value: f64) -> String {
    value.to_string()
}
