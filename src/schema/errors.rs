//! Schema error types
//!
//! Messages are user-visible and kept stable: clients of the service match on
//! them. Field names are quoted, list elements carry their index
//! (`"countryUsers[2]"`).

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// First constraint a candidate record violates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Body is not a JSON object
    #[error("\"value\" must be of type object")]
    NotAnObject,

    /// Declared field absent
    #[error("\"{0}\" is required")]
    Required(String),

    /// Field (or list element) is not a string, including `null`
    #[error("\"{0}\" must be a string")]
    NotAString(String),

    /// Empty string
    #[error("\"{0}\" is not allowed to be empty")]
    Empty(String),

    /// String shorter than the field's minimum
    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    /// Field is not an array
    #[error("\"{0}\" must be an array")]
    NotAnArray(String),

    /// Key not declared by the schema
    #[error("\"{0}\" is not allowed")]
    NotAllowed(String),
}

impl SchemaError {
    /// Path of the offending field, if the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::NotAnObject => None,
            SchemaError::Required(field)
            | SchemaError::NotAString(field)
            | SchemaError::Empty(field)
            | SchemaError::NotAnArray(field)
            | SchemaError::NotAllowed(field)
            | SchemaError::TooShort { field, .. } => Some(field.as_str()),
        }
    }
}
