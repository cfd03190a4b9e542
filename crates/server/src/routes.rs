pub mod enquiries;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, OpenAPI document and the enquiry endpoints.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/enquiry", post(enquiries::create))
        .route("/enquiries", get(enquiries::list))
        .route("/enquiry/:id", delete(enquiries::delete))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
