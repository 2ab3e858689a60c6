use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use campus_application::AuthService;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub email: Option<String>,
}

/// Check the bearer token of a follow-up request.
#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token(
    State(service): State<AuthService>,
    headers: HeaderMap,
) -> (StatusCode, Json<VerifyTokenResponse>) {
    let issuer = service.token_issuer();

    let subject = bearer_token(&headers).and_then(|token| {
        let subject = issuer.extract_subject(token).ok()?;
        issuer.validate(token, &subject).then_some(subject)
    });

    match subject {
        Some(email) => (
            StatusCode::OK,
            Json(VerifyTokenResponse {
                valid: true,
                email: Some(email),
            }),
        ),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(VerifyTokenResponse {
                valid: false,
                email: None,
            }),
        ),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
