//! Error types for fleet-model

use serde_json::Value;

/// Result type for fleet-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building models or invoking mutations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A discriminator value has no registered factory in its category
    #[error("Unknown {category} type '{name}', registered types: {known:?}")]
    UnknownType {
        category: String,
        name: String,
        known: Vec<String>,
    },

    /// A field is present but does not have the expected shape
    #[error("Malformed field '{field}': expected {expected}, got {found}")]
    MalformedField {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// Reported by a mutation-target implementation during invocation
    #[error("Target error: {0}")]
    Target(String),
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

    /// A field that must be present is absent.
    pub fn missing(field: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedField {
            field: field.into(),
            expected,
            found: "nothing".to_string(),
        }
    }

    pub fn target(message: impl Into<String>) -> Self {
        Self::Target(message.into())
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
