//! Error types for fleet-compose

use serde_json::Value;

/// Result type for fleet-compose operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or composing a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A machine references a role name absent from the `roles` map
    #[error("Unknown role '{name}', defined roles: {known:?}")]
    UnknownRole { name: String, known: Vec<String> },

    /// A document field does not have the expected shape
    #[error("Malformed field '{field}': expected {expected}, got {found}")]
    MalformedField {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// Document text failed to parse in the detected or requested format
    #[error("Failed to parse {format} document: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Model instantiation or thunk compilation error
    #[error(transparent)]
    Model(#[from] fleet_model::Error),
}

impl Error {
    /// A field is present with the wrong shape.
    pub fn malformed(field: impl Into<String>, expected: &'static str, value: &Value) -> Self {
        Self::MalformedField {
            field: field.into(),
            expected,
            found: value_kind(value).to_string(),
        }
    }

    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }
}

/// Describe a JSON value's shape for error messages
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
