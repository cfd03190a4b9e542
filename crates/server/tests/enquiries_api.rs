use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use server::{routes::build_router, state::ServerState};
use service::enquiry::repository::mock::MockEnquiryRepository;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

fn app(repo: Arc<MockEnquiryRepository>) -> Router {
    build_router(ServerState::new(repo), CorsLayer::very_permissive())
}

fn garry() -> Value {
    json!({
        "firstName": "Garry",
        "lastName": "Hall",
        "partnersName": "Sharon Harbour",
        "email": " garry.hall@example.com ",
        "phone": "07123 456789",
        "eventDate": "2024-12-26",
        "venueLocation": "The Barn, Perth",
        "services": ["Ceilidh", "Wedding Film"],
        "otherServices": ["Bagpiper"],
        "message": "Can you do Boxing Day?"
    })
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_ok() {
    let res = app(Arc::default())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["status"], "ok");
}

#[tokio::test]
async fn create_then_list() {
    let repo = Arc::new(MockEnquiryRepository::default());
    let res = app(repo.clone())
        .oneshot(post_json("/enquiry", garry().to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(repo.len(), 1);

    let res = app(repo)
        .oneshot(Request::get("/enquiries").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let list = body_json(res).await;
    let first = &list.as_array().unwrap()[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["email"], "garry.hall@example.com");
    assert_eq!(first["services"], json!(["Ceilidh", "Wedding Film"]));
    assert_eq!(first["otherServices"], json!(["Bagpiper"]));
    assert_eq!(first["eventDate"], "2024-12-26");
}

#[tokio::test]
async fn list_empty_is_empty_array() {
    let res = app(Arc::default())
        .oneshot(Request::get("/enquiries").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!([]));
}

#[tokio::test]
async fn delete_missing_id_is_no_content() {
    let res = app(Arc::default())
        .oneshot(Request::delete("/enquiry/999").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_removes_enquiry() {
    let repo = Arc::new(MockEnquiryRepository::default());
    app(repo.clone())
        .oneshot(post_json("/enquiry", garry().to_string()))
        .await
        .unwrap();
    let res = app(repo.clone())
        .oneshot(Request::delete("/enquiry/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn malformed_body_is_internal_error() {
    let res = app(Arc::default())
        .oneshot(post_json("/enquiry", "{not json".into()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(res).await, json!({"message": "Internal Server Error"}));
}

#[tokio::test]
async fn missing_required_field_is_internal_error() {
    let mut body = garry();
    body["email"] = json!("   ");
    let repo = Arc::new(MockEnquiryRepository::default());
    let res = app(repo.clone())
        .oneshot(post_json("/enquiry", body.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn unknown_service_is_internal_error() {
    let mut body = garry();
    body["services"] = json!(["Fire Eater"]);
    let repo = Arc::new(MockEnquiryRepository::default());
    let res = app(repo.clone())
        .oneshot(post_json("/enquiry", body.to_string()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn non_integer_id_is_internal_error() {
    let res = app(Arc::default())
        .oneshot(Request::delete("/enquiry/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn repository_failure_is_internal_error() {
    let repo = Arc::new(MockEnquiryRepository::default());
    repo.fail_all();
    let res = app(repo)
        .oneshot(Request::get("/enquiries").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(res).await["message"], "Internal Server Error");
}

#[tokio::test]
async fn openapi_document_lists_enquiry_paths() {
    let res = app(Arc::default())
        .oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc = body_json(res).await;
    assert!(doc["paths"].get("/enquiry").is_some());
    assert!(doc["paths"].get("/enquiry/{id}").is_some());
}
