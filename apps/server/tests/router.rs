use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use emapi_kernel::domain::config::ApiConfig;
use emapi_kernel::domain::metadata::ApiMetadata;
use emapi_server::Server;
use serde_json::Value;
use tower::ServiceExt;

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("infallible router");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, body.to_vec())
}

async fn get_json(router: Router, uri: &str) -> Value {
    let (status, body) = get(router, uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).expect("json body")
}

#[tokio::test]
async fn openapi_json_publishes_default_metadata() {
    let server = Server::builder().build().expect("server builds");
    let doc = get_json(server.router(), "/v3/api-docs").await;

    assert_eq!(doc["info"]["title"], "Employee Management API");
    assert_eq!(doc["info"]["version"], "v1");
    assert_eq!(doc["info"]["description"], "Simple CRUD API for managing employees");
    assert_eq!(doc["info"]["contact"]["name"], "JavaGuides");
    assert_eq!(doc["info"]["contact"]["email"], "contact@javaguides.net");
    assert!(doc["paths"]["/health"]["get"].is_object(), "health route is documented");
}

#[tokio::test]
async fn explicit_metadata_is_rendered() {
    let metadata = ApiMetadata::new("Payroll API", "v2", "Payroll", "HR", "hr@example.com");
    let server = Server::builder().metadata(metadata).build().expect("server builds");
    let doc = get_json(server.router(), "/v3/api-docs").await;

    assert_eq!(doc["info"]["title"], "Payroll API");
    assert_eq!(doc["info"]["contact"]["email"], "hr@example.com");
}

#[tokio::test]
async fn scalar_ui_is_served() {
    let server = Server::builder().build().expect("server builds");
    let (status, body) = get(server.router(), "/swagger-ui").await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf-8 html");
    assert!(html.contains("Employee Management API"), "UI embeds the document");
}

#[tokio::test]
async fn health_is_always_mounted() {
    let mut cfg = ApiConfig::default();
    cfg.docs.enabled = false;
    let server = Server::builder().config(cfg).build().expect("server builds");

    let health = get_json(server.router(), "/health").await;
    assert_eq!(health["status"], "up");
}

#[tokio::test]
async fn disabled_docs_are_not_routed() {
    let mut cfg = ApiConfig::default();
    cfg.docs.enabled = false;
    let server = Server::builder().config(cfg).build().expect("server builds");

    let (spec_status, _) = get(server.router(), "/v3/api-docs").await;
    let (ui_status, _) = get(server.router(), "/swagger-ui").await;
    assert_eq!(spec_status, StatusCode::NOT_FOUND);
    assert_eq!(ui_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_docs_paths_are_honoured() {
    let mut cfg = ApiConfig::default();
    cfg.docs.spec_path = "/openapi.json".to_owned();
    cfg.docs.ui_path = "/docs".to_owned();
    let server = Server::builder().config(cfg).build().expect("server builds");

    let doc = get_json(server.router(), "/openapi.json").await;
    assert_eq!(doc["info"]["title"], "Employee Management API");

    let (old_status, _) = get(server.router(), "/v3/api-docs").await;
    assert_eq!(old_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn documents_are_identical_across_servers() {
    let first = get_json(Server::builder().build().expect("build").router(), "/v3/api-docs").await;
    let second = get_json(Server::builder().build().expect("build").router(), "/v3/api-docs").await;
    assert_eq!(first, second);
}
