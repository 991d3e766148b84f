//! Aircraft record representation.
//!
//! A record is kept as the JSON object the client sent, in field order. Inserts
//! are shape-checked by [`crate::schema`] before they reach the store; partial
//! updates are merged as-is, so nothing here assumes a field is a string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One aircraft entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wraps an already validated JSON object
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record's `name`, if it is a string
    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    /// The record's `country`, if it is a string
    pub fn country(&self) -> Option<&str> {
        self.text("country")
    }

    /// Reads a field as a string
    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Case-insensitive name equality. Records without a string name never match.
    pub fn has_name(&self, name: &str) -> bool {
        self.name()
            .is_some_and(|own| own.to_lowercase() == name.to_lowercase())
    }

    /// Case-insensitive substring match on `country`
    pub fn country_contains(&self, needle: &str) -> bool {
        self.country()
            .is_some_and(|country| country.to_lowercase().contains(&needle.to_lowercase()))
    }

    /// Shallow merge: every key in `patch` overwrites (or is appended to) this record.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            self.0.insert(key, value);
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        record.into_value()
    }
}
