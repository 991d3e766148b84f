//! hangar - a JSON-backed HTTP catalogue of aircraft records
//!
//! Two collections, `planes` and `helicopters`, are loaded from one JSON file,
//! served over HTTP, and written back in full after every change.

pub mod boot;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
