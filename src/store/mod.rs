//! # Record Store
//!
//! Owns the `planes` and `helicopters` collections, answers lookups and
//! filters against them, and rewrites the catalog file after every change.
//!
//! # Files
//!
//! - `engine.rs` - [`Store`], the read/mutation surface
//! - `document.rs` - [`Catalog`], the on-disk document and its atomic save
//! - `record.rs` - [`Record`] and its case-insensitive matching rules
//! - `selector.rs` - [`Collection`] and [`Selector`] parsing

mod document;
mod engine;
mod errors;
mod record;
mod selector;

pub use document::Catalog;
pub use engine::Store;
pub use errors::{StoreError, StoreResult};
pub use record::Record;
pub use selector::{Collection, Selector};
