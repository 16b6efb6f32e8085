//! # hostbind-core
//!
//! Eager, validated binding to the internal fields of an opaque host object.
//!
//! The host plugin's object layout is not a public contract and may drift
//! between versions. This crate locates named fields once, at module
//! construction, and hands back reusable [`FieldBinding`]s. A shape mismatch
//! surfaces as a [`BindError`] at startup instead of a wrong value later.
//!
//! ## Components
//!
//! - **HostHandle** — a live host instance plus its [`TypeDescriptor`]
//! - **HandleProvider** — the seam to whatever owns the host's subsystems
//! - **FieldBinder** — resolve-once binder producing [`FieldBinding`]s
//! - **EditableCell** — bridge to the host's boxed "editable" numbers, which
//!   carry a cached text form that must be refreshed on every write
//! - **InMemoryHost** — an in-process host for embedding and tests
//!
//! ## Threading
//!
//! Nothing here synchronizes access to host state. Bindings hold no locks
//! across calls and never perform read-modify-write sequences; callers must
//! serialize access with the host's own mutation (typically by marshalling
//! every call onto the host's simulation thread).

#![deny(unsafe_code)]

pub mod binder;
pub mod editable;
pub mod error;
pub mod handle;
pub mod memory;
pub mod object;

pub use binder::{bind, BindPlan, BindingSet, FieldBinder, FieldBinding, FieldKind};
pub use editable::{
    read_number, write_number, EditableCell, EDITABLE_TEXT_MEMBER, EDITABLE_VALUE_MEMBER,
};
pub use error::{AccessError, BindError, Result};
pub use handle::{HandleProvider, HostHandle};
pub use memory::{InMemoryHost, InMemoryObject};
pub use object::{
    FieldSlot, HostObject, HostRef, HostValue, MemberInfo, TypeDescriptor, TypeDescriptorBuilder,
    ValueKind, Visibility,
};
