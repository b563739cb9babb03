//! Type nodes of the resolved interface model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar kinds with a fixed representation across interface revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicType {
    Boolean,
    Byte,
    Char,
    Octet,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    Time,
    Duration,
}

impl BasicType {
    /// Every basic type, in declaration order.
    pub const ALL: [BasicType; 16] = [
        BasicType::Boolean,
        BasicType::Byte,
        BasicType::Char,
        BasicType::Octet,
        BasicType::Int8,
        BasicType::Uint8,
        BasicType::Int16,
        BasicType::Uint16,
        BasicType::Int32,
        BasicType::Uint32,
        BasicType::Int64,
        BasicType::Uint64,
        BasicType::Float,
        BasicType::Double,
        BasicType::Time,
        BasicType::Duration,
    ];

    /// The interface-definition spelling of this type (e.g. "uint16").
    pub fn as_str(&self) -> &'static str {
        match self {
            BasicType::Boolean => "boolean",
            BasicType::Byte => "byte",
            BasicType::Char => "char",
            BasicType::Octet => "octet",
            BasicType::Int8 => "int8",
            BasicType::Uint8 => "uint8",
            BasicType::Int16 => "int16",
            BasicType::Uint16 => "uint16",
            BasicType::Int32 => "int32",
            BasicType::Uint32 => "uint32",
            BasicType::Int64 => "int64",
            BasicType::Uint64 => "uint64",
            BasicType::Float => "float",
            BasicType::Double => "double",
            BasicType::Time => "time",
            BasicType::Duration => "duration",
        }
    }

    /// Returns true for the floating point kinds.
    pub fn is_floating_point(&self) -> bool {
        matches!(self, BasicType::Float | BasicType::Double)
    }

    /// Returns true for the explicit-width integer kinds.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            BasicType::Int8
                | BasicType::Uint8
                | BasicType::Int16
                | BasicType::Uint16
                | BasicType::Int32
                | BasicType::Uint32
                | BasicType::Int64
                | BasicType::Uint64
        )
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to another interface type by namespaced name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedType {
    /// Namespace path, outermost first (e.g. `["geometry_msgs", "msg"]`).
    pub namespaces: Vec<String>,
    /// Unqualified type name (e.g. "Point").
    pub name: String,
}

impl NamedType {
    /// Build a reference from namespace segments and a name.
    pub fn new<I, S>(namespaces: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }

    /// All path segments, namespaces first, the type name last.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.namespaces
            .iter()
            .map(String::as_str)
            .chain([self.name.as_str()])
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().collect::<Vec<_>>().join("/"))
    }
}

/// A non-container member type: one of the four scalar categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    /// Fixed-representation primitive.
    Basic(BasicType),
    /// Text, optionally bounded to a maximum length.
    String {
        #[serde(default)]
        max_size: Option<u64>,
    },
    /// Wide text, optionally bounded to a maximum length.
    WString {
        #[serde(default)]
        max_size: Option<u64>,
    },
    /// Reference to another generated type.
    Named(NamedType),
}

impl ScalarType {
    /// Unbounded generic string.
    pub fn string() -> Self {
        ScalarType::String { max_size: None }
    }

    /// Unbounded wide string.
    pub fn wstring() -> Self {
        ScalarType::WString { max_size: None }
    }

    /// Returns true for both string categories, generic or wide.
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            ScalarType::String { .. } | ScalarType::WString { .. }
        )
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Basic(basic) => basic.fmt(f),
            ScalarType::String { max_size: None } => f.write_str("string"),
            ScalarType::String {
                max_size: Some(max),
            } => write!(f, "string<={}", max),
            ScalarType::WString { max_size: None } => f.write_str("wstring"),
            ScalarType::WString {
                max_size: Some(max),
            } => write!(f, "wstring<={}", max),
            ScalarType::Named(named) => named.fmt(f),
        }
    }
}

/// Shape of a container member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// Fixed-length array.
    Array { size: u64 },
    /// Variable-length sequence with a declared maximum element count.
    BoundedSequence { max_size: u64 },
    /// Variable-length sequence without a declared bound.
    UnboundedSequence,
}

/// The declared type of a message member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    /// A plain scalar member.
    Scalar(ScalarType),
    /// An array or sequence of scalars.
    Container {
        kind: ContainerKind,
        element: ScalarType,
    },
}

impl MemberType {
    /// Shorthand for a basic scalar member.
    pub fn basic(ty: BasicType) -> Self {
        MemberType::Scalar(ScalarType::Basic(ty))
    }

    /// The scalar type of this member, unwrapping one container level.
    pub fn scalar(&self) -> &ScalarType {
        match self {
            MemberType::Scalar(scalar) => scalar,
            MemberType::Container { element, .. } => element,
        }
    }

    /// Returns true for array and sequence members.
    pub fn is_container(&self) -> bool {
        matches!(self, MemberType::Container { .. })
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberType::Scalar(scalar) => scalar.fmt(f),
            MemberType::Container { kind, element } => match kind {
                ContainerKind::Array { size } => write!(f, "{}[{}]", element, size),
                ContainerKind::BoundedSequence { max_size } => {
                    write!(f, "sequence<{}, {}>", element, max_size)
                }
                ContainerKind::UnboundedSequence => write!(f, "sequence<{}>", element),
            },
        }
    }
}
