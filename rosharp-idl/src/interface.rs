//! Message and member declarations.

use serde::{Deserialize, Serialize};

use crate::{FieldValue, MemberType, NamedType};

/// A single member of a message: the declared type plus the optional
/// resolved default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Member name as declared.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: MemberType,
    /// Resolved default value, when the declaration carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldValue>,
}

/// A parsed message interface: the namespaced type plus its members in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Fully qualified message type.
    #[serde(rename = "type")]
    pub ty: NamedType,
    /// Members in declaration order.
    pub members: Vec<Member>,
}
