//! Literal rendering for member values and defaults.
//!
//! Values arrive resolved from the interface model; these functions
//! only decide how a value is spelled in generated C#. The formatting
//! rules are per-width: 64-bit integers carry `L`/`UL` suffixes,
//! single-precision floats carry `f`, and the two's-complement minimum
//! of the 32- and 64-bit signed widths is rewritten as an expression
//! because the bare literal overflows before its unary minus applies.

use rosharp_idl::{BasicType, FieldValue, MemberType, ScalarType, ScalarValue};

use crate::error::{Error, Result};
use crate::escape::{escape_string, escape_wstring};

/// Renders the C# initializer expression for a member's value.
///
/// `value` is the member's resolved default, or `None` when the
/// definition carries none; members without a value report
/// [`Error::MissingValue`] so callers fall back to [`default_value`].
pub fn render_value(ty: &MemberType, value: Option<&FieldValue>) -> Result<String> {
    if let MemberType::Scalar(ScalarType::Named(named)) = ty {
        return Err(Error::UnsupportedCompositeLiteral {
            type_name: named.to_string(),
        });
    }
    let Some(value) = value else {
        return Err(Error::MissingValue {
            type_name: ty.to_string(),
        });
    };
    match (ty, value) {
        (MemberType::Scalar(scalar), FieldValue::Scalar(single)) => render_scalar(scalar, single),
        (MemberType::Container { element, .. }, FieldValue::Sequence(values)) => {
            render_sequence(element, values)
        }
        _ => Err(Error::MismatchedValueShape {
            type_name: ty.to_string(),
        }),
    }
}

fn render_sequence(element: &ScalarType, values: &[ScalarValue]) -> Result<String> {
    let is_string_sequence = element.is_string();
    let mut rendered = Vec::with_capacity(values.len());
    for value in values {
        let cs_value = render_scalar(element, value)?;
        if is_string_sequence {
            rendered.push(format!("{{{}}}", cs_value));
        } else {
            rendered.push(cs_value);
        }
    }
    let mut cs_value = format!("{{{}}}", rendered.join(", "));
    if rendered.len() > 1 && !is_string_sequence {
        // Braces around a single scalar draw a compiler warning, so the
        // outer pair only goes on for two or more elements.
        cs_value = format!("{{{}}}", cs_value);
    }
    Ok(cs_value)
}

/// Renders the C# literal for one scalar value.
pub fn render_scalar(ty: &ScalarType, value: &ScalarValue) -> Result<String> {
    let basic = match ty {
        ScalarType::String { .. } => {
            return Ok(format!("\"{}\"", escape_string(&value.plain_text())));
        }
        ScalarType::WString { .. } => {
            return Ok(format!("u\"{}\"", escape_wstring(&value.plain_text())));
        }
        ScalarType::Named(named) => {
            return Err(Error::UnsupportedCompositeLiteral {
                type_name: named.to_string(),
            });
        }
        ScalarType::Basic(basic) => basic,
    };
    match basic {
        BasicType::Boolean => Ok(if value.truthy() { "true" } else { "false" }.to_string()),
        BasicType::Char
        | BasicType::Octet
        | BasicType::Int8
        | BasicType::Uint8
        | BasicType::Int16
        | BasicType::Uint16
        | BasicType::Double => Ok(value.plain_text()),
        BasicType::Int32 => match value {
            ScalarValue::Int(i) if *i == i64::from(i32::MIN) => Ok(format!("({} - 1)", *i + 1)),
            _ => Ok(value.plain_text()),
        },
        BasicType::Uint32 => Ok(value.plain_text()),
        BasicType::Int64 => match value {
            ScalarValue::Int(i) if *i == i64::MIN => Ok(format!("({}L - 1)", *i + 1)),
            _ => Ok(format!("{}L", value.plain_text())),
        },
        BasicType::Uint64 => Ok(format!("{}UL", value.plain_text())),
        BasicType::Float => Ok(format!("{}f", value.plain_text())),
        // No literal grammar exists for these kinds.
        BasicType::Byte | BasicType::Time | BasicType::Duration => {
            Err(Error::UnknownPrimitiveType {
                typename: basic.as_str().to_string(),
            })
        }
    }
}

/// The C# default expression for a member with no explicit value.
///
/// Strings default to the empty literal, floating point kinds to
/// `0.0f`, booleans to `false`, and everything else, containers and
/// composites included, to `0`.
pub fn default_value(ty: &MemberType) -> &'static str {
    match ty {
        MemberType::Scalar(ScalarType::String { .. })
        | MemberType::Scalar(ScalarType::WString { .. }) => "\"\"",
        MemberType::Scalar(ScalarType::Basic(basic)) if basic.is_floating_point() => "0.0f",
        MemberType::Scalar(ScalarType::Basic(BasicType::Boolean)) => "false",
        _ => "0",
    }
}
