//! Values and registration records crossing the transport boundary

use serde::{Deserialize, Serialize};

use crate::status::DifferentialThrottleStatus;

/// Value kind a transport registers for a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Bool,
    Double,
    Enum,
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Double => write!(f, "double"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

/// A property value as seen by remote callers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Bool(bool),
    Double(f64),
    Status(DifferentialThrottleStatus),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Bool(_) => PropertyKind::Bool,
            Self::Double(_) => PropertyKind::Double,
            Self::Status(_) => PropertyKind::Enum,
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Double(d) => write!(f, "{}", d),
            Self::Status(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for PropertyValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

/// What a transport needs to register one property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    pub kind: PropertyKind,
    pub writable: bool,
    /// Boolean property that must be enabled for this one to take effect
    pub gated_by: Option<String>,
}
