use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use fxdeals_core::deals::DealErrorKind;
use fxdeals_core::errors::Error as CoreError;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing. Please try again later";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MalformedRequest(String),
    #[error("{}", .0.join(", "))]
    FieldValidation(Vec<String>),
    #[error("{0}")]
    Core(#[from] CoreError),
}

impl ApiError {
    fn status_and_messages(&self) -> (StatusCode, Vec<String>) {
        match self {
            ApiError::MalformedRequest(reason) => (StatusCode::BAD_REQUEST, vec![reason.clone()]),
            ApiError::FieldValidation(messages) => (StatusCode::BAD_REQUEST, messages.clone()),
            ApiError::Core(CoreError::Deal(e)) => {
                let status = match e.kind() {
                    DealErrorKind::Duplicate => StatusCode::CONFLICT,
                    DealErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, vec![e.to_string()])
            }
            ApiError::Core(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                vec![GENERIC_ERROR_MESSAGE.to_string()],
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, messages) = self.status_and_messages();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(ErrorResponse::new(messages))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
