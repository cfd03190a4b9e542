use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::domain::{Enquiry, EnquiryInput};
use tracing::info;

use crate::{errors::ApiError, state::ServerState};

// Malformed bodies and ids are reported like any other failure (500),
// not as 400/422.

#[utoipa::path(
    post, path = "/enquiry", tag = "enquiries",
    request_body = crate::openapi::EnquiryInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<EnquiryInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = body.map_err(|e| ApiError::new("create enquiry", e))?;
    let created = state
        .enquiries
        .create(input)
        .await
        .map_err(|e| ApiError::new("create enquiry", e))?;
    info!(id = ?created.id(), "enquiry_create");
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get, path = "/enquiries", tag = "enquiries",
    responses(
        (status = 200, description = "All enquiries", body = [crate::openapi::EnquiryDoc]),
        (status = 500, description = "Internal Server Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Enquiry>>, ApiError> {
    let all = state
        .enquiries
        .list()
        .await
        .map_err(|e| ApiError::new("list enquiries", e))?;
    info!(count = all.len(), "enquiry_list");
    Ok(Json(all))
}

#[utoipa::path(
    delete, path = "/enquiry/{id}", tag = "enquiries",
    params(("id" = i32, Path, description = "Enquiry ID")),
    responses(
        (status = 204, description = "Deleted (also when the id did not exist)"),
        (status = 500, description = "Internal Server Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::new("delete enquiry", e))?;
    state
        .enquiries
        .delete(id)
        .await
        .map_err(|e| ApiError::new("delete enquiry", e))?;
    Ok(StatusCode::NO_CONTENT)
}
