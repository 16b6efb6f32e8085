//! Binding and access error types

use thiserror::Error;

/// Errors raised while binding to host state.
///
/// Every variant describes a host whose shape does not match what the
/// module expects. They are raised only during module construction and are
/// never retried.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("host subsystem not found: {0}")]
    SubsystemNotFound(String),

    #[error("field `{field}` not found on host type {type_name}")]
    FieldNotFound { type_name: String, field: String },

    #[error("field `{field}` on host type {type_name}: expected {expected}, found {found}")]
    KindMismatch {
        type_name: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("editable field `{field}` on host type {type_name} holds no cell")]
    NullEditableCell { type_name: String, field: String },

    #[error("host access failed while binding: {0}")]
    Access(#[from] AccessError),
}

/// Errors raised by a read or write through an established binding.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("slot {slot} out of range for host type {type_name}")]
    SlotOutOfRange { type_name: String, slot: usize },

    #[error("unexpected value in `{field}`: expected {expected}, found {found}")]
    UnexpectedValue {
        field: String,
        expected: String,
        found: String,
    },

    #[error("field `{field}` holds an editable cell; write its number instead")]
    EditableCellReplace { field: String },
}

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, BindError>;
