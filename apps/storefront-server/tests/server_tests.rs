//! HTTP pipeline: static files, error pages and the store API

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use store_service::domain::SeedOutcome;
use store_service::{Config, Problem, SeedConfig, StoreServiceModule};
use storefront_server::config::{AppConfig, Environment};
use storefront_server::server::build_router;
use tower::ServiceExt;

fn web_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Storefront</h1>").unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/site.css"), "body { margin: 0; }").unwrap();
    dir
}

fn app_config(environment: Environment, web_root: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.environment = environment;
    config.server.web_root = web_root.to_path_buf();
    config
}

async fn failing() -> Problem {
    Problem::internal().with_internal_detail("disk on fire")
}

async fn panicking() -> &'static str {
    panic!("boom")
}

fn test_router(environment: Environment, web_root: &Path) -> Router {
    let api = Router::new()
        .route("/api/fail", get(failing))
        .route("/api/panic", get(panicking));
    build_router(api, &app_config(environment, web_root))
}

async fn send(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes.to_vec())
}

fn json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_default_document_and_static_files() {
    let root = web_root();
    let app = test_router(Environment::Production, root.path());

    let (status, content_type, body) = send(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert_eq!(body, b"<h1>Storefront</h1>");

    let (status, content_type, _) = send(&app, "/css/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/css"));

    let (status, _, _) = send(&app, "/missing.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_internal_error_detail_only_in_development() {
    let root = web_root();

    let prod = test_router(Environment::Production, root.path());
    let (status, content_type, body) = send(&prod, "/api/fail").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    assert_eq!(json(&body)["detail"], "An unexpected error occurred");

    let dev = test_router(Environment::Development, root.path());
    let (status, _, body) = send(&dev, "/api/fail").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json(&body)["detail"], "disk on fire");
}

#[tokio::test]
async fn test_panics_become_problem_responses() {
    let root = web_root();

    let prod = test_router(Environment::Production, root.path());
    let (status, _, body) = send(&prod, "/api/panic").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json(&body)["detail"], "An unexpected error occurred");

    let dev = test_router(Environment::Development, root.path());
    let (status, _, body) = send(&dev, "/api/panic").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json(&body)["detail"].as_str().unwrap().contains("boom"));
}

async fn store_module(seed: SeedConfig) -> StoreServiceModule {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Arc::new(Database::connect(options).await.unwrap());
    StoreServiceModule::migrate(&db).await.unwrap();

    StoreServiceModule::init(Config { seed }, db)
}

#[tokio::test]
async fn test_store_api_is_mounted() {
    let module = store_module(SeedConfig {
        enabled: false,
        ..SeedConfig::default()
    })
    .await;

    let root = web_root();
    let app = build_router(
        module.register_rest(Router::new()),
        &app_config(Environment::Production, root.path()),
    );

    let (status, _, body) = send(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), Value::Array(Vec::new()));

    let (status, _, body) = send(&app, "/api/orders/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body)["title"], "Order Not Found");

    let (status, _, body) = send(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Storefront</h1>");
}

#[tokio::test]
async fn test_bundled_seed_file_populates_store() {
    let module = store_module(SeedConfig {
        enabled: true,
        file: Path::new(env!("CARGO_MANIFEST_DIR")).join("data/art.json"),
    })
    .await;

    assert_eq!(
        module.seed().await.unwrap(),
        SeedOutcome::Seeded { products: 5 }
    );

    let root = web_root();
    let app = build_router(
        module.register_rest(Router::new()),
        &app_config(Environment::Production, root.path()),
    );

    let (status, _, body) = send(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body).as_array().unwrap().len(), 5);

    let (_, _, body) = send(&app, "/api/products/category/Print").await;
    assert_eq!(json(&body).as_array().unwrap().len(), 2);

    let (status, _, body) = send(&app, "/api/orders").await;
    assert_eq!(status, StatusCode::OK);
    let orders = json(&body);
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["orderNumber"], "10000");
    assert_eq!(orders[0]["items"][0]["productTitle"], "The Night Watch");
    assert_eq!(orders[0]["items"][0]["quantity"], 5);
    assert_eq!(orders[0]["items"][0]["unitPrice"], 24.5);
}
