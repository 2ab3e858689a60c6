use axum::{Json, extract::State, http::StatusCode};
use campus_application::{AuthResponse, AuthService};

use super::credentials::{CredentialsRequest, respond};
use crate::http::AuthApiError;

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register(
    State(service): State<AuthService>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthApiError> {
    let (email, password) = request.into_parts();
    let response = service.register(email, password).await?;
    Ok(respond(response))
}
