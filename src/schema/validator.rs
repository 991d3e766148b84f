//! Schema validator for candidate records
//!
//! Validation semantics:
//! - Every declared field is present
//! - Text fields are strings, non-empty, and at least `min_len` characters
//! - Text list fields are arrays of strings
//! - No undeclared fields exist
//!
//! Validation stops at the first violation. Declared fields are checked in
//! schema order, then undeclared keys in the order they appear in the body.
//! Only inserts are validated; partial updates are merged unchecked.

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldDef, FieldType, Schema, AIRCRAFT_SCHEMA};
use crate::store::Record;

/// Validates candidate records against a [`Schema`].
///
/// The validator does not mutate documents and is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Checks `document` and, if it conforms, takes it as a [`Record`].
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found.
    pub fn validate(&self, document: Value) -> SchemaResult<Record> {
        let Value::Object(fields) = document else {
            return Err(SchemaError::NotAnObject);
        };

        self.validate_object(&fields)?;
        Ok(Record::from_fields(fields))
    }

    fn validate_object(&self, obj: &Map<String, Value>) -> SchemaResult<()> {
        for field in self.schema.fields {
            let value = obj
                .get(field.name)
                .ok_or_else(|| SchemaError::Required(field.name.to_string()))?;
            validate_value(field, value)?;
        }

        if let Some(extra) = obj.keys().find(|key| !self.schema.declares(key)) {
            return Err(SchemaError::NotAllowed(extra.clone()));
        }

        Ok(())
    }
}

impl Default for SchemaValidator<'static> {
    fn default() -> Self {
        Self::new(&AIRCRAFT_SCHEMA)
    }
}

/// Validates an aircraft record for insertion into either collection.
pub fn validate_aircraft(document: Value) -> SchemaResult<Record> {
    SchemaValidator::default().validate(document)
}

fn validate_value(field: &FieldDef, value: &Value) -> SchemaResult<()> {
    match field.field_type {
        FieldType::Text { min_len } => validate_text(field.name, value, min_len),
        FieldType::TextList => {
            let items = value
                .as_array()
                .ok_or_else(|| SchemaError::NotAnArray(field.name.to_string()))?;
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    return Err(SchemaError::NotAString(format!("{}[{}]", field.name, i)));
                }
            }
            Ok(())
        }
    }
}

fn validate_text(name: &str, value: &Value, min_len: Option<usize>) -> SchemaResult<()> {
    let text = value
        .as_str()
        .ok_or_else(|| SchemaError::NotAString(name.to_string()))?;

    if text.is_empty() {
        return Err(SchemaError::Empty(name.to_string()));
    }

    if let Some(min) = min_len {
        if text.chars().count() < min {
            return Err(SchemaError::TooShort {
                field: name.to_string(),
                min,
            });
        }
    }

    Ok(())
}
