//! Property and module error types

use hostbind_core::{AccessError, BindError};
use thiserror::Error;

use crate::value::PropertyKind;

/// Errors from a single `get`/`set` call. They reject only that call.
#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("unknown module: {0}")]
    UnknownModule(String),

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("property {property} is read-only")]
    ReadOnlyProperty { property: String },

    #[error("property {property}: host ordinal {ordinal} has no status mapping")]
    UnmappedOrdinal { property: String, ordinal: i64 },

    #[error("property {property} takes a {expected} value, got {found}")]
    ValueKindMismatch {
        property: String,
        expected: PropertyKind,
        found: PropertyKind,
    },

    #[error("host access failed: {0}")]
    Access(#[from] AccessError),
}

/// Errors constructing or registering a module.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("host shape mismatch: {0}")]
    Bind(#[from] BindError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("module already registered: {0}")]
    DuplicateModule(String),
}

/// Result type for property calls
pub type Result<T> = std::result::Result<T, PropertyError>;
