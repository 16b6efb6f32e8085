//! # hostbind-thrust
//!
//! Typed remote-control surface over the host's thrust controller.
//!
//! - **catalog** — the exposed properties, their host fields and gating flags
//! - **PropertySurface** — name-addressed `get`/`set` over bound fields
//! - **ThrustController** — the bound module with typed accessors
//! - **ModuleRegistry** — dispatch table a remote-call transport calls into
//! - **BridgeConfig** — TOML-loadable module configuration
//!
//! All calls are synchronous and unsynchronized; see `hostbind_core` for the
//! threading contract.

#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod registry;
pub mod status;
pub mod surface;
pub mod value;

pub use catalog::{bind_plan, catalog, gate_of, PropertySpec, THRUST_PROPERTIES};
pub use config::{BridgeConfig, OptionalFields};
pub use controller::ThrustController;
pub use error::{ModuleError, PropertyError, Result};
pub use registry::{ModuleRegistry, RemoteModule};
pub use status::DifferentialThrottleStatus;
pub use surface::{PropertyDescriptor, PropertySurface};
pub use value::{PropertyInfo, PropertyKind, PropertyValue};
