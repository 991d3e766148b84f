//! # Catalog HTTP Server Module
//!
//! HTTP front end for the aircraft catalog, built on Axum.
//!
//! # Endpoints
//!
//! - `GET /:type` - list `planes`, `helicopters` or `all`
//! - `GET /:type/name/:name` - lookup by name
//! - `GET /:type/country/:country` - filter by country
//! - `POST /:type` - insert
//! - `PUT /:type/name/:name` - partial update
//! - `DELETE /:type/:name` - delete

pub mod catalog_routes;
pub mod config;
pub mod errors;
pub mod response;
pub mod server;

pub use catalog_routes::{catalog_routes, CatalogState};
pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
