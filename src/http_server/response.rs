//! # Response Formatting
//!
//! Bodies returned by the catalog routes. Listings and single lookups are
//! returned bare (`Vec<Record>` / `Record`); these wrap everything else.

use serde::Serialize;

use crate::store::Record;

/// `{"message": ...}`, used for errors and delete confirmations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful insert
#[derive(Debug, Clone, Serialize)]
pub struct InsertResponse {
    pub status: &'static str,
    pub item: Record,
}

impl InsertResponse {
    pub fn success(item: Record) -> Self {
        Self {
            status: "Success",
            item,
        }
    }
}

/// Body of a successful update
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub message: &'static str,
    pub item: Record,
}

impl UpdateResponse {
    pub fn new(item: Record) -> Self {
        Self {
            message: "Item updated successfully",
            item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_response_serialization() {
        let item: Record = serde_json::from_value(json!({"name": "Tiger"})).unwrap();
        let value = serde_json::to_value(InsertResponse::success(item)).unwrap();
        assert_eq!(value, json!({"status": "Success", "item": {"name": "Tiger"}}));
    }

    #[test]
    fn test_update_response_serialization() {
        let item: Record = serde_json::from_value(json!({"name": "Tiger"})).unwrap();
        let value = serde_json::to_value(UpdateResponse::new(item)).unwrap();
        assert_eq!(value["message"], "Item updated successfully");
        assert_eq!(value["item"]["name"], "Tiger");
    }
}
