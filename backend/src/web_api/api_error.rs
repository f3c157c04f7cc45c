use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{data_access::store_error::StoreError, envelope::Envelope, validation_error::ValidationError};

/// Every way a task request can fail. Rendered as a failure envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Task not found")]
    NotFound,
    #[error("Route not found")]
    RouteNotFound,
    #[error(transparent)]
    Persistence(StoreError),
}

impl ApiError {
    pub fn invalid_id(raw: &str) -> Self {
        ApiError::BadRequest(format!("Invalid task id: {raw}"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Rejected(e) => ApiError::Validation(e),
            e => ApiError::Persistence(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Persistence(e) = &self {
            tracing::error!(error = %e, "task store failure");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (status, Json(Envelope::<()>::failure(self.to_string()))).into_response()
    }
}
