//! Observability subsystem
//!
//! Structured logging (JSON) via `tracing`. HTTP request spans come from
//! `tower_http::trace::TraceLayer` in the server stack.
//!
//! # Usage
//!
//! ```ignore
//! hangar::observability::init_logging();
//! tracing::info!(collection = "planes", name = "F-16", "record inserted");
//! ```

mod logger;

pub use logger::{env_filter, init as init_logging, DEFAULT_FILTER};
