use thiserror::Error;

use super::email::EmailError;

/// Expected, user-facing reasons a register or login request is refused.
///
/// Client UIs branch on these messages, so the strings are part of the API.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    #[error("Only .edu email addresses are allowed")]
    DomainRejected,
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("User not found")]
    NotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Please verify your email first")]
    Unverified,
}

impl From<EmailError> for AuthRejection {
    fn from(error: EmailError) -> Self {
        match error {
            EmailError::NotInstitutional => AuthRejection::DomainRejected,
        }
    }
}
