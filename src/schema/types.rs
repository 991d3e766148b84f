//! Record schema definitions
//!
//! Supported field types:
//! - text: non-empty UTF-8 string, optionally with a minimum length
//! - text list: array whose every element is a string (may be empty)

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Non-empty string of at least `min_len` characters
    Text { min_len: Option<usize> },
    /// Array of strings
    TextList,
}

/// A required field of a record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Key in the record object
    pub name: &'static str,
    /// Field data type
    pub field_type: FieldType,
}

impl FieldDef {
    /// A required non-empty string field
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::Text { min_len: None },
        }
    }

    /// A required string field with a minimum length
    pub const fn text_min(name: &'static str, min_len: usize) -> Self {
        Self {
            name,
            field_type: FieldType::Text {
                min_len: Some(min_len),
            },
        }
    }

    /// A required array-of-strings field
    pub const fn text_list(name: &'static str) -> Self {
        Self {
            name,
            field_type: FieldType::TextList,
        }
    }
}

/// Ordered list of required fields. Undeclared keys are rejected.
///
/// Field order matters: validation reports the first violation in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldDef],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// Schema of an aircraft record, shared by `planes` and `helicopters`
pub static AIRCRAFT_SCHEMA: Schema = Schema {
    fields: &[
        FieldDef::text_min("name", 3),
        FieldDef::text("origin"),
        FieldDef::text("speed"),
        FieldDef::text("country"),
        FieldDef::text("armament"),
        FieldDef::text("engine"),
        FieldDef::text("manufacturer"),
        FieldDef::text_list("countryUsers"),
    ],
};
