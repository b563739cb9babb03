//! C# type mapper implementation.

use indexmap::IndexMap;
use rosharp_idl::{ContainerKind, MemberType, NamedType, ScalarType};

use crate::error::{Error, Result};

/// Maps resolved interface types to C# type expressions.
///
/// The mapper is table-driven: a primitive table keyed by the
/// interface-definition spelling, and a substitution table that swaps
/// well-known message types for their Unity engine equivalents. Both
/// tables can be replaced for targets with a different runtime surface.
#[derive(Debug, Clone)]
pub struct CsTypeMapper {
    type_names: IndexMap<String, String>,
    unity_types: IndexMap<String, String>,
    use_unity_types: bool,
}

impl CsTypeMapper {
    /// Mapper with the builtin tables and Unity substitution enabled.
    pub fn new() -> Self {
        Self::with_unity_types(true)
    }

    /// Mapper with the builtin tables and Unity substitution switched
    /// on or off.
    pub fn with_unity_types(use_unity_types: bool) -> Self {
        Self::with_tables(
            Self::default_type_names(),
            Self::default_unity_types(),
            use_unity_types,
        )
    }

    /// Mapper over caller-provided tables.
    pub fn with_tables(
        type_names: IndexMap<String, String>,
        unity_types: IndexMap<String, String>,
        use_unity_types: bool,
    ) -> Self {
        Self {
            type_names,
            unity_types,
            use_unity_types,
        }
    }

    /// The builtin primitive table.
    ///
    /// Keys are interface-definition spellings; the legacy aliases
    /// `bool`, `float32` and `float64` are kept so older resolved
    /// models keep mapping. `wstring` has no entry: wide strings have
    /// no representation in the target runtime and mapping one is an
    /// error.
    pub fn default_type_names() -> IndexMap<String, String> {
        [
            ("byte", "sbyte"),
            ("octet", "sbyte"),
            ("char", "byte"),
            ("bool", "bool"),
            ("boolean", "bool"),
            ("uint8", "byte"),
            ("int8", "sbyte"),
            ("uint16", "System.UInt16"),
            ("int16", "System.Int16"),
            ("uint32", "System.UInt32"),
            ("int32", "System.Int32"),
            ("uint64", "System.UInt64"),
            ("int64", "System.Int64"),
            ("float", "float"),
            ("float32", "float"),
            ("float64", "double"),
            ("double", "double"),
            ("string", "string"),
            ("time", "ROSBridgeLib.msg_helpers.Time"),
            ("duration", "ROSBridgeLib.msg_helpers.Duration"),
        ]
        .into_iter()
        .map(|(name, cs)| (name.to_string(), cs.to_string()))
        .collect()
    }

    /// The builtin Unity substitution table, keyed by scoped C# name.
    pub fn default_unity_types() -> IndexMap<String, String> {
        [
            ("geometry_msgs.msg.Point", "UnityEngine.Vector3"),
            ("geometry_msgs.msg.Vector3", "UnityEngine.Vector3"),
            ("geometry_msgs.msg.Quaternion", "UnityEngine.Quaternion"),
        ]
        .into_iter()
        .map(|(name, cs)| (name.to_string(), cs.to_string()))
        .collect()
    }

    /// Maps a scalar type to its C# type expression.
    ///
    /// Named types become their dot-scoped C# name; primitives go
    /// through the type table. When Unity substitution is enabled the
    /// mapped name is looked up in the substitution table last, so
    /// `geometry_msgs.msg.Point` comes out as `UnityEngine.Vector3`.
    pub fn map_scalar_type(&self, ty: &ScalarType) -> Result<String> {
        let cs_type = match ty {
            ScalarType::Basic(basic) => self.lookup(basic.as_str())?,
            ScalarType::String { .. } => self.lookup("string")?,
            ScalarType::WString { .. } => self.lookup("wstring")?,
            ScalarType::Named(named) => scoped_name(named),
        };
        if self.use_unity_types {
            if let Some(unity) = self.unity_types.get(&cs_type) {
                return Ok(unity.clone());
            }
        }
        Ok(cs_type)
    }

    /// Maps a member type to the C# type of the generated field.
    ///
    /// Fixed arrays map to `T[]`; the length lives in the initializer
    /// (see [`CsTypeMapper::array_initializer`]), not the field type.
    pub fn map_member_type(&self, ty: &MemberType) -> Result<String> {
        match ty {
            MemberType::Scalar(scalar) => self.map_scalar_type(scalar),
            MemberType::Container { kind, element } => {
                let cs_type = self.map_scalar_type(element)?;
                Ok(match kind {
                    ContainerKind::Array { .. } => format!("{}[]", cs_type),
                    // TODO: encode the bound once a capacity-checked list type exists
                    ContainerKind::BoundedSequence { .. } | ContainerKind::UnboundedSequence => {
                        format!("System.Collections.Generic.List<{}>", cs_type)
                    }
                })
            }
        }
    }

    /// The `new ...` expression that backs a container member.
    ///
    /// Sequences allocate an empty list; fixed arrays allocate at their
    /// declared length.
    pub fn array_initializer(&self, kind: &ContainerKind, element: &ScalarType) -> Result<String> {
        let cs_type = self.map_scalar_type(element)?;
        Ok(match kind {
            ContainerKind::Array { size } => format!("new {}[{}]", cs_type, size),
            ContainerKind::BoundedSequence { .. } | ContainerKind::UnboundedSequence => {
                format!("new System.Collections.Generic.List<{}>()", cs_type)
            }
        })
    }

    fn lookup(&self, typename: &str) -> Result<String> {
        self.type_names
            .get(typename)
            .cloned()
            .ok_or_else(|| Error::UnknownPrimitiveType {
                typename: typename.to_string(),
            })
    }
}

impl Default for CsTypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn scoped_name(named: &NamedType) -> String {
    named.segments().collect::<Vec<_>>().join(".")
}
