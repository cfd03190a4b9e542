use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use tracing::error;

/// Any failure of an enquiry endpoint. Clients only ever see a generic 500;
/// the cause is logged with the operation it interrupted.
#[derive(Debug)]
pub struct ApiError {
    pub operation: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn new(operation: &'static str, cause: impl std::fmt::Display) -> Self {
        Self { operation, detail: cause.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(operation = self.operation, error = %self.detail, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageBody::internal_error())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_internal_server_error() {
        let res = ApiError::new("delete enquiry", "boom").into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
