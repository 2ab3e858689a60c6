use campus_core::{AuthRejection, BearerToken, Email};
use serde::Serialize;

const REGISTERED_MESSAGE: &str =
    "Registration successful. Please check your email for verification.";
const LOGGED_IN_MESSAGE: &str = "Login successful";

/// Outcome of a register or login request.
///
/// `success` is authoritative; transports must not signal the outcome only
/// through their own status codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthResponse {
    success: bool,
    token: Option<BearerToken>,
    email: Option<Email>,
    message: String,
    #[serde(skip)]
    rejection: Option<AuthRejection>,
}

impl AuthResponse {
    pub fn rejected(rejection: AuthRejection) -> Self {
        Self {
            success: false,
            token: None,
            email: None,
            message: rejection.to_string(),
            rejection: Some(rejection),
        }
    }

    pub fn registered(email: Email) -> Self {
        Self {
            success: true,
            token: None,
            email: Some(email),
            message: REGISTERED_MESSAGE.to_owned(),
            rejection: None,
        }
    }

    pub fn logged_in(token: BearerToken, email: Email) -> Self {
        Self {
            success: true,
            token: Some(token),
            email: Some(email),
            message: LOGGED_IN_MESSAGE.to_owned(),
            rejection: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn rejection(&self) -> Option<AuthRejection> {
        self.rejection
    }
}
