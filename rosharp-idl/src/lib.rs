//! Resolved interface definition model for the rosharp generator.
//!
//! This crate provides the typed representation of ROS 2 message
//! interfaces that the code generation crates consume. An external
//! parser resolves `.msg`/`.idl` sources into these types; the
//! generators only ever read them.
//!
//! # Architecture
//!
//! ```text
//! .msg/.idl source → parser → rosharp-idl (resolved model) → codegen
//! ```
//!
//! The model is designed to be:
//! - Target-language agnostic (no C#-specific concerns)
//! - Immutable once built (generation runs never mutate it)
//! - Serializable (parsers hand it across as JSON)
//!
//! Containers are one level deep by construction: the element of an
//! array or sequence is a [`ScalarType`], so the interface language's
//! no-nested-containers rule cannot be violated in this representation.

mod interface;
mod types;
mod value;

pub use interface::{Member, Message};
pub use types::{BasicType, ContainerKind, MemberType, NamedType, ScalarType};
pub use value::{FieldValue, ScalarValue};
