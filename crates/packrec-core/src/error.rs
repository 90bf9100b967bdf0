//! Schema-construction error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building a schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// A field name was registered twice in the same schema.
    DuplicateField {
        /// Name of the schema being built.
        schema: String,
        /// The duplicated field name.
        field: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField { schema, field } => {
                write!(f, "schema '{schema}' already has a field named '{field}'")
            }
        }
    }
}

impl Error for SchemaError {}
