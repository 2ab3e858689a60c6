use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campus_application::AuthServiceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Service temporarily unavailable")]
    ServiceUnavailable,

    #[error("Unexpected error")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AuthApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AuthApiError::UnexpectedError(ref cause) => {
                tracing::error!(error = %cause, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<AuthServiceError> for AuthApiError {
    fn from(error: AuthServiceError) -> Self {
        match error {
            AuthServiceError::StoreUnavailable => AuthApiError::ServiceUnavailable,
            other => AuthApiError::UnexpectedError(other.to_string()),
        }
    }
}
