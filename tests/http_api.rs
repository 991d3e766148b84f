//! HTTP API Tests
//!
//! Drives the full router (middleware included) with in-process requests
//! against a catalog file in a temp directory.

use std::fs;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use hangar::http_server::{HttpServer, HttpServerConfig};
use hangar::store::{Catalog, Collection, Selector, Store};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn f16() -> Value {
    json!({
        "name": "F-16",
        "origin": "United States",
        "speed": "Mach 2",
        "country": "USA",
        "armament": "M61 Vulcan",
        "engine": "F110",
        "manufacturer": "General Dynamics",
        "countryUsers": ["USA", "Poland"]
    })
}

fn apache() -> Value {
    json!({
        "name": "Apache",
        "origin": "United States",
        "speed": "293 km/h",
        "country": "United States",
        "armament": "M230 chain gun",
        "engine": "T700",
        "manufacturer": "Boeing",
        "countryUsers": ["United States", "Japan"]
    })
}

fn setup_app() -> (TempDir, Arc<Store>, Router) {
    let tmp = TempDir::new().unwrap();
    let catalog = Catalog::new(
        vec![serde_json::from_value(f16()).unwrap()],
        vec![serde_json::from_value(apache()).unwrap()],
    );
    let store = Arc::new(Store::create(tmp.path().join("db.json"), catalog).unwrap());
    let router = HttpServer::with_config(HttpServerConfig::default(), Arc::clone(&store)).router();
    (tmp, store, router)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

// =============================================================================
// Listing and Lookup
// =============================================================================

#[tokio::test]
async fn test_list_each_selector() {
    let (_tmp, _store, app) = setup_app();

    let (status, planes) = get(&app, "/planes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(planes, json!([f16()]));

    let (_, helicopters) = get(&app, "/helicopters").await;
    assert_eq!(helicopters, json!([apache()]));

    let (_, all) = get(&app, "/all").await;
    assert_eq!(all, json!([f16(), apache()]));
}

#[tokio::test]
async fn test_unknown_type_is_400() {
    let (_tmp, _store, app) = setup_app();

    let (status, body) = get(&app, "/spaceships").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid type specified"}));

    let (status, _) = get(&app, "/spaceships/name/F-16").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get(&app, "/spaceships/country/USA").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let (_tmp, _store, app) = setup_app();
    let first = get(&app, "/all").await;
    assert_eq!(get(&app, "/all").await, first);
}

#[tokio::test]
async fn test_lookup_by_name_ignores_case() {
    let (_tmp, _store, app) = setup_app();

    for uri in ["/helicopters/name/apache", "/helicopters/name/APACHE", "/all/name/ApAcHe"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["name"], "Apache");
    }

    let (status, body) = get(&app, "/planes/name/apache").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Item not found"}));
}

#[tokio::test]
async fn test_percent_encoded_names() {
    let (_tmp, store, app) = setup_app();
    let mut tiger = apache();
    tiger["name"] = json!("Eurocopter Tiger");
    store
        .insert(Collection::Helicopters, serde_json::from_value(tiger).unwrap())
        .unwrap();

    let (status, body) = get(&app, "/helicopters/name/eurocopter%20tiger").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Eurocopter Tiger");
}

#[tokio::test]
async fn test_country_filter() {
    let (_tmp, _store, app) = setup_app();

    for uri in ["/all/country/state", "/all/country/UNITED", "/all/country/united%20states"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([apache()]));
    }

    let (status, body) = get(&app, "/all/country/stated").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"message": "No items found for this country in the specified type"})
    );

    let (status, body) = get(&app, "/all/country/S").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_name_query_filter() {
    let (_tmp, _store, app) = setup_app();

    let (status, body) = get(&app, "/planes?name=f-16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([f16()]));

    let (status, body) = get(&app, "/planes?name=Mirage").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "No items found matching the criteria"}));
}

/// A query string that cannot be decoded still gets a JSON error body.
#[tokio::test]
async fn test_list_rejected_query_is_json() {
    let (_tmp, _store, app) = setup_app();

    let (status, body) = get(&app, "/planes?name=a&name=b").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string(), "{body}");
}

// =============================================================================
// Insert
// =============================================================================

#[tokio::test]
async fn test_insert_record() {
    let (tmp, store, app) = setup_app();
    let mut rafale = f16();
    rafale["name"] = json!("Rafale");
    rafale["country"] = json!("France");

    let (status, body) = send(&app, Method::POST, "/planes", Some(rafale.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"status": "Success", "item": rafale}));

    assert!(store.find_by_name(Selector::All, "rafale").is_some());
    let on_disk: Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("db.json")).unwrap()).unwrap();
    assert_eq!(on_disk["planes"][1]["name"], "Rafale");
}

#[tokio::test]
async fn test_insert_duplicate_name() {
    let (_tmp, store, app) = setup_app();
    let mut dup = f16();
    dup["name"] = json!("f-16");

    let (status, body) = send(&app, Method::POST, "/planes", Some(dup)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Item already exists"}));
    assert_eq!(store.list_collection(Collection::Planes.into()).len(), 1);
}

#[tokio::test]
async fn test_insert_into_all_is_rejected() {
    let (_tmp, _store, app) = setup_app();
    let (status, body) = send(&app, Method::POST, "/all", Some(f16())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid type specified"}));
}

/// The type is checked before the body, so a bad type wins over a missing body.
#[tokio::test]
async fn test_bad_type_wins_over_missing_body() {
    let (_tmp, _store, app) = setup_app();

    for (method, uri) in [(Method::POST, "/spaceships"), (Method::PUT, "/spaceships/name/x")] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"message": "Invalid type specified"}), "{uri}");
    }
}

#[tokio::test]
async fn test_insert_reports_first_violation() {
    let (_tmp, store, app) = setup_app();
    let candidate = json!({
        "name": "Mi",
        "origin": "",
        "speed": 300,
        "country": "Russia",
        "armament": "Rockets",
        "engine": "TV3-117",
        "manufacturer": "Mil",
        "countryUsers": ["Russia"]
    });

    let (status, body) = send(&app, Method::POST, "/helicopters", Some(candidate)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": "\"name\" length must be at least 3 characters long"})
    );
    assert_eq!(store.list_collection(Collection::Helicopters.into()).len(), 1);
}

#[tokio::test]
async fn test_insert_missing_field() {
    let (_tmp, _store, app) = setup_app();
    let mut candidate = apache();
    candidate["name"] = json!("Lynx");
    candidate.as_object_mut().unwrap().remove("countryUsers");

    let (status, body) = send(&app, Method::POST, "/helicopters", Some(candidate)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "\"countryUsers\" is required"}));
}

#[tokio::test]
async fn test_malformed_json_is_400_with_json_body() {
    let (_tmp, _store, app) = setup_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/planes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_merges_fields() {
    let (_tmp, _store, app) = setup_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/planes/name/f-16",
        Some(json!({"speed": "Mach 2.05"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item updated successfully");

    let mut expected = f16();
    expected["speed"] = json!("Mach 2.05");
    assert_eq!(body["item"], expected);
    assert_eq!(get(&app, "/planes/name/F-16").await.1, expected);
}

#[tokio::test]
async fn test_update_skips_insert_schema() {
    let (_tmp, _store, app) = setup_app();

    let (status, body) = send(&app, Method::PUT, "/planes/name/F-16", Some(json!({"name": "F1"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"]["name"], "F1");
}

#[tokio::test]
async fn test_update_missing_and_bad_type() {
    let (_tmp, _store, app) = setup_app();

    let (status, body) = send(&app, Method::PUT, "/planes/name/Mirage", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Item not found"}));

    let (status, _) = send(&app, Method::PUT, "/all/name/F-16", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_requires_object_body() {
    let (_tmp, _store, app) = setup_app();
    let (status, body) = send(&app, Method::PUT, "/planes/name/F-16", Some(json!(["speed"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "\"value\" must be of type object"}));
}

// =============================================================================
// Delete
// =============================================================================

/// Duplicate POST, case-insensitive GET, DELETE, then 404.
#[tokio::test]
async fn test_f16_lifecycle() {
    let (_tmp, _store, app) = setup_app();

    let (status, body) = send(&app, Method::POST, "/planes", Some(f16())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Item already exists");

    let (status, body) = get(&app, "/planes/name/f-16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, f16());

    let (status, body) = send(&app, Method::DELETE, "/planes/F-16", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Item deleted successfully"}));

    let (status, _) = get(&app, "/planes/name/f-16").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_and_bad_type() {
    let (_tmp, _store, app) = setup_app();

    let (status, body) = send(&app, Method::DELETE, "/helicopters/Chinook", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Item not found"}));

    let (status, body) = send(&app, Method::DELETE, "/all/F-16", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid type specified"}));
}

// =============================================================================
// Internal Faults
// =============================================================================

/// A failed disk write is a generic 500 and leaves the catalog unchanged.
#[tokio::test]
async fn test_persist_failure_is_generic_500() {
    let (tmp, store, app) = setup_app();
    fs::create_dir(tmp.path().join("db.json.tmp")).unwrap();

    let (status, body) = send(&app, Method::DELETE, "/planes/F-16", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Internal Server Error"}));
    assert!(store.find_by_name(Selector::All, "F-16").is_some());
}
