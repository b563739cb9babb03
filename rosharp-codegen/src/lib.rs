//! C# code generation for ROS 2 interface definitions.
//!
//! This crate turns the resolved interface model from `rosharp-idl`
//! into the C# fragments a message-class template splices together:
//! field type expressions, literal initializers for explicit defaults,
//! and fallback default expressions.
//!
//! # Architecture
//!
//! ```text
//! rosharp-idl (resolved model) → rosharp-codegen (C# fragments) → templates
//! ```
//!
//! Generated code targets Unity projects by default: well-known
//! geometry message types map to their `UnityEngine` equivalents
//! unless substitution is switched off on the mapper.
//!
//! # Example
//!
//! ```
//! use rosharp_codegen::{CsTypeMapper, default_value, render_value};
//! use rosharp_idl::{BasicType, FieldValue, MemberType, ScalarValue};
//!
//! let mapper = CsTypeMapper::new();
//! let ty = MemberType::basic(BasicType::Int32);
//!
//! assert_eq!(mapper.map_member_type(&ty).unwrap(), "System.Int32");
//! assert_eq!(default_value(&ty), "0");
//!
//! let min = FieldValue::Scalar(ScalarValue::Int(-2147483648));
//! assert_eq!(render_value(&ty, Some(&min)).unwrap(), "(-2147483647 - 1)");
//! ```

mod error;
mod escape;
mod type_mapper;
mod value;

pub use error::{Error, Result};
pub use escape::{escape_string, escape_wstring};
pub use type_mapper::CsTypeMapper;
pub use value::{default_value, render_scalar, render_value};
