//! Resolved literal values from the interface definition.

use serde::{Deserialize, Serialize};

/// A single resolved literal.
///
/// Values arrive already typed from the parser; the generator never
/// parses literal text itself. Variant order matters for the untagged
/// representation: integers are tried before floats so whole numbers
/// stay integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
}

impl ScalarValue {
    /// The unadorned textual form of the value.
    ///
    /// Floats always carry a decimal point ("2.0", never "2") so the
    /// text stays a floating literal in the target grammar.
    pub fn plain_text(&self) -> String {
        match self {
            ScalarValue::Bool(value) => value.to_string(),
            ScalarValue::Int(value) => value.to_string(),
            ScalarValue::Uint(value) => value.to_string(),
            ScalarValue::Float(value) => float_text(*value),
            ScalarValue::String(value) => value.clone(),
        }
    }

    /// Truth value of the literal: zero of any numeric width and the
    /// empty string are false, everything else is true.
    ///
    /// Boolean members accept numeric and string defaults in older
    /// interface definitions, so the truth rule covers every variant.
    pub fn truthy(&self) -> bool {
        match self {
            ScalarValue::Bool(value) => *value,
            ScalarValue::Int(value) => *value != 0,
            ScalarValue::Uint(value) => *value != 0,
            ScalarValue::Float(value) => *value != 0.0,
            ScalarValue::String(value) => !value.is_empty(),
        }
    }
}

fn float_text(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// The resolved value of a message member: a single scalar, or a flat
/// sequence of scalars for array and sequence members. Values never
/// nest further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(ScalarValue),
    Sequence(Vec<ScalarValue>),
}

impl From<ScalarValue> for FieldValue {
    fn from(value: ScalarValue) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Vec<ScalarValue>> for FieldValue {
    fn from(values: Vec<ScalarValue>) -> Self {
        FieldValue::Sequence(values)
    }
}
