//! Host object model
//!
//! The host is reachable only through named members on runtime type
//! descriptors. A [`HostObject`] exposes its descriptor plus positional
//! reads and writes; name lookup happens once, in the binder.

use std::fmt;
use std::sync::Arc;

use crate::error::AccessError;

/// Shared reference to a live host object.
pub type HostRef = Arc<dyn HostObject>;

/// A live object inside the host's object graph.
///
/// Implementations own their interior mutability. The binding layer calls
/// `read`/`write` without holding any lock of its own.
pub trait HostObject: Send + Sync {
    /// Runtime type descriptor of this instance.
    fn descriptor(&self) -> Arc<TypeDescriptor>;

    /// Read the value stored in `slot`.
    fn read(&self, slot: FieldSlot) -> Result<HostValue, AccessError>;

    /// Replace the value stored in `slot`.
    fn write(&self, slot: FieldSlot, value: HostValue) -> Result<(), AccessError>;
}

/// Position of a member within its type descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldSlot(pub usize);

impl fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declared kind of a host member.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Number,
    /// Integer, including enum ordinals
    Int,
    Text,
    /// Reference to another host object of the named type
    Object(String),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Number => write!(f, "Number"),
            Self::Int => write!(f, "Int"),
            Self::Text => write!(f, "Text"),
            Self::Object(type_name) => write!(f, "Object<{}>", type_name),
        }
    }
}

/// Member visibility as declared by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    NonPublic,
}

/// One declared member of a host type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberInfo {
    pub name: String,
    pub kind: ValueKind,
    pub visibility: Visibility,
}

/// Runtime type descriptor: a type name and its ordered member set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    members: Vec<MemberInfo>,
}

impl TypeDescriptor {
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    /// Look up a member by name, public or not.
    pub fn find(&self, name: &str) -> Option<(FieldSlot, &MemberInfo)> {
        self.members
            .iter()
            .enumerate()
            .find(|(_, m)| m.name == name)
            .map(|(i, m)| (FieldSlot(i), m))
    }

    pub fn member(&self, slot: FieldSlot) -> Option<&MemberInfo> {
        self.members.get(slot.0)
    }
}

/// Builder for [`TypeDescriptor`].
pub struct TypeDescriptorBuilder {
    name: String,
    members: Vec<MemberInfo>,
}

impl TypeDescriptorBuilder {
    pub fn member(
        mut self,
        name: impl Into<String>,
        kind: ValueKind,
        visibility: Visibility,
    ) -> Self {
        self.members.push(MemberInfo {
            name: name.into(),
            kind,
            visibility,
        });
        self
    }

    /// Add a non-public member. Host internals are usually declared this way.
    pub fn field(self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.member(name, kind, Visibility::NonPublic)
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            members: self.members,
        }
    }
}

/// A value held by a host member.
#[derive(Clone)]
pub enum HostValue {
    Null,
    Bool(bool),
    Number(f64),
    Int(i64),
    Text(String),
    Object(HostRef),
}

impl HostValue {
    /// Whether this value may be stored in a member declared as `kind`.
    pub fn fits(&self, kind: &ValueKind) -> bool {
        match (self, kind) {
            (Self::Bool(_), ValueKind::Bool)
            | (Self::Number(_), ValueKind::Number)
            | (Self::Int(_), ValueKind::Int)
            | (Self::Text(_), ValueKind::Text)
            | (Self::Null, ValueKind::Object(_)) => true,
            (Self::Object(obj), ValueKind::Object(type_name)) => {
                obj.descriptor().name() == type_name
            }
            _ => false,
        }
    }

    /// Short description used in error messages.
    pub fn kind_name(&self) -> String {
        match self {
            Self::Null => "Null".into(),
            Self::Bool(_) => "Bool".into(),
            Self::Number(_) => "Number".into(),
            Self::Int(_) => "Int".into(),
            Self::Text(_) => "Text".into(),
            Self::Object(obj) => format!("Object<{}>", obj.descriptor().name()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HostRef> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "Bool({})", b),
            Self::Number(n) => write!(f, "Number({})", n),
            Self::Int(i) => write!(f, "Int({})", i),
            Self::Text(s) => write!(f, "Text({:?})", s),
            Self::Object(obj) => write!(f, "Object({})", obj.descriptor().name()),
        }
    }
}
