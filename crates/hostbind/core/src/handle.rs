//! Host handles and the provider seam
//!
//! A [`HostHandle`] is supplied by whatever owns the host's module lifecycle.
//! This layer never constructs, replaces or frees the instance it points to.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::object::{HostObject, HostRef, TypeDescriptor};

/// A named subsystem instance inside the host, plus its type descriptor.
///
/// The instance must stay live and consistent with the descriptor for as
/// long as the handle is held.
#[derive(Clone)]
pub struct HostHandle {
    descriptor: Arc<TypeDescriptor>,
    instance: HostRef,
}

impl HostHandle {
    pub fn new(descriptor: Arc<TypeDescriptor>, instance: HostRef) -> Self {
        Self {
            descriptor,
            instance,
        }
    }

    /// Build a handle using the instance's own runtime descriptor.
    pub fn from_instance(instance: HostRef) -> Self {
        Self {
            descriptor: instance.descriptor(),
            instance,
        }
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn instance(&self) -> &dyn HostObject {
        self.instance.as_ref()
    }

    pub fn instance_ref(&self) -> &HostRef {
        &self.instance
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostHandle")
            .field("type", &self.descriptor.name())
            .field("members", &self.descriptor.members().len())
            .finish()
    }
}

/// Supplies handles to named host subsystems.
pub trait HandleProvider: Send + Sync {
    /// Resolve the subsystem called `name`.
    fn handle(&self, name: &str) -> Result<HostHandle>;
}
