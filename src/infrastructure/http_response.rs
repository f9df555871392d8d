// HTTP response utilities for the JSON envelope
use crate::application::error::BillError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// `{statusCode, data, message, success}` wrapper used by every endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data: Some(data),
            message: message.into(),
            success: status.is_success(),
            errors: Vec::new(),
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(status: StatusCode, message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data: None,
            message: message.into(),
            success: false,
            errors,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Build an enveloped JSON response
pub fn json_response<T: Serialize>(status: StatusCode, data: T, message: &str) -> Response {
    ApiResponse::ok(status, data, message).into_response()
}

impl From<JsonRejection> for BillError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        BillError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for BillError {
    fn from(rejection: PathRejection) -> Self {
        BillError::validation(rejection.body_text())
    }
}

impl IntoResponse for BillError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            BillError::InvalidOperation(message) => (StatusCode::BAD_REQUEST, message, Vec::new()),
            BillError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, "Validation failed".to_string(), errors)
            }
            BillError::NotFound(message) => (StatusCode::NOT_FOUND, message, Vec::new()),
            BillError::Repository(e) => {
                tracing::error!("Repository error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                    Vec::new(),
                )
            }
        };

        ApiResponse::failure(status, message, errors).into_response()
    }
}
