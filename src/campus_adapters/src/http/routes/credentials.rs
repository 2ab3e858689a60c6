use axum::{Json, http::StatusCode};
use campus_application::AuthResponse;
use campus_core::Password;
use secrecy::Secret;
use serde::Deserialize;

/// Request body shared by register and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: Secret<String>,
}

impl CredentialsRequest {
    pub fn into_parts(self) -> (String, Password) {
        (self.email, Password::new(self.password))
    }
}

pub(crate) fn respond(response: AuthResponse) -> (StatusCode, Json<AuthResponse>) {
    let status = if response.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response))
}
