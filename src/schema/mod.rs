//! Record schema subsystem
//!
//! Shape check applied to aircraft records before insertion.
//!
//! # Design Principles
//!
//! - All fields required, no defaults, no coercion
//! - Undeclared fields rejected
//! - First violation wins, in declared field order
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use types::{FieldDef, FieldType, Schema, AIRCRAFT_SCHEMA};
pub use validator::{validate_aircraft, SchemaValidator};
