use miette::Diagnostic;
use thiserror::Error;

/// Result type for rosharp-codegen operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no C# mapping for primitive type '{typename}'")]
    #[diagnostic(
        code(rosharp::unknown_primitive_type),
        help("extend the mapper's type table if the target runtime provides this type")
    )]
    UnknownPrimitiveType { typename: String },

    #[error("cannot render a literal for composite type '{type_name}'")]
    #[diagnostic(
        code(rosharp::unsupported_composite_literal),
        help("message-typed members are initialized with a constructor call, not a literal")
    )]
    UnsupportedCompositeLiteral { type_name: String },

    #[error("no value provided for type '{type_name}'")]
    #[diagnostic(
        code(rosharp::missing_value),
        help("members without an explicit default take default_value instead")
    )]
    MissingValue { type_name: String },

    #[error("value shape does not match type '{type_name}'")]
    #[diagnostic(
        code(rosharp::mismatched_value_shape),
        help(
            "array and sequence members take a sequence of scalars; every other member takes a single scalar"
        )
    )]
    MismatchedValueShape { type_name: String },
}
