//! Catalog HTTP Routes
//!
//! - `GET    /:type`                  list `planes`, `helicopters` or `all`
//! - `GET    /:type/name/:name`       one record by name
//! - `GET    /:type/country/:country` records whose country contains the text
//! - `POST   /:type`                  insert a validated record
//! - `PUT    /:type/name/:name`       partial update
//! - `DELETE /:type/:name`            remove a record
//!
//! Reads scan the committed snapshot inline. Mutations fsync the catalog file,
//! so they run on the blocking pool.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::errors::{ApiError, ApiResult};
use super::response::{InsertResponse, MessageResponse, UpdateResponse};
use crate::schema::{validate_aircraft, SchemaError};
use crate::store::{Collection, Record, Selector, Store, StoreResult};

/// Shown when a `?name=` listing filter matches nothing
pub const NO_MATCHING_ITEMS: &str = "No items found matching the criteria";

/// Shown when a country search matches nothing
pub const NO_COUNTRY_ITEMS: &str = "No items found for this country in the specified type";

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub store: Arc<Store>,
}

impl CatalogState {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Exact, case-insensitive name filter
    #[serde(default)]
    pub name: Option<String>,
}

// ==================
// Catalog Routes
// ==================

/// Create catalog routes
pub fn catalog_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/:kind", get(list_handler).post(insert_handler))
        .route("/:kind/name/:name", get(find_handler).put(update_handler))
        .route("/:kind/country/:country", get(country_handler))
        .route("/:kind/:name", delete(delete_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Runs a store mutation on the blocking pool.
async fn run_blocking<T, F>(state: &CatalogState, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Store) -> StoreResult<T> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    let output = tokio::task::spawn_blocking(move || op(&store)).await??;
    Ok(output)
}

// ==================
// Read Handlers
// ==================

async fn list_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Record>>> {
    let Path(kind) = path?;
    let selector: Selector = kind.parse()?;
    let Query(query) = query?;

    let mut records = state.store.list_collection(selector);
    if let Some(name) = query.name {
        records.retain(|record| record.has_name(&name));
        if records.is_empty() {
            return Err(ApiError::EmptyResult(NO_MATCHING_ITEMS));
        }
    }

    Ok(Json(records))
}

async fn find_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<Json<Record>> {
    let Path((kind, name)) = path?;
    let selector: Selector = kind.parse()?;

    state
        .store
        .find_by_name(selector, &name)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn country_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<Json<Vec<Record>>> {
    let Path((kind, country)) = path?;
    let selector: Selector = kind.parse()?;

    let records = state.store.filter_by_country(selector, &country);
    if records.is_empty() {
        return Err(ApiError::EmptyResult(NO_COUNTRY_ITEMS));
    }

    Ok(Json(records))
}

// ==================
// Mutation Handlers
// ==================

async fn insert_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    let Path(kind) = path?;
    let collection: Collection = kind.parse()?;
    let Json(body) = payload?;

    let record = validate_aircraft(body).map_err(|err| {
        debug!(%collection, field = err.field(), "insert payload rejected");
        err
    })?;
    let item = run_blocking(&state, move |store| store.insert(collection, record)).await?;

    Ok((StatusCode::CREATED, Json(InsertResponse::success(item))))
}

async fn update_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<(String, String)>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<UpdateResponse>> {
    let Path((kind, name)) = path?;
    let collection: Collection = kind.parse()?;
    let Json(body) = payload?;

    let Value::Object(patch) = body else {
        return Err(SchemaError::NotAnObject.into());
    };
    let item = run_blocking(&state, move |store| {
        store.update_by_name(collection, &name, patch)
    })
    .await?;

    Ok(Json(UpdateResponse::new(item)))
}

async fn delete_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path((kind, name)) = path?;
    let collection: Collection = kind.parse()?;

    run_blocking(&state, move |store| store.delete_by_name(collection, &name)).await?;

    Ok(Json(MessageResponse::new("Item deleted successfully")))
}
