use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use campus_application::AuthService;
use serde::Deserialize;

use crate::http::AuthApiError;

pub const VERIFIED_MESSAGE: &str = "Email verified successfully! You can now login.";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired verification token";

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    #[serde(default)]
    pub token: String,
}

#[tracing::instrument(name = "Verify email", skip_all)]
pub async fn verify_email(
    State(service): State<AuthService>,
    Query(query): Query<VerifyQuery>,
) -> Result<(StatusCode, &'static str), AuthApiError> {
    if service.verify_email(&query.token).await? {
        Ok((StatusCode::OK, VERIFIED_MESSAGE))
    } else {
        Ok((StatusCode::BAD_REQUEST, INVALID_TOKEN_MESSAGE))
    }
}
