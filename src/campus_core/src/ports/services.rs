use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    bearer_token::BearerToken,
    email::Email,
    password::{HashedPassword, Password},
    verification_token::VerificationToken,
};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

/// One-way, salted password hashing.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, CredentialError>;

    /// `Ok(false)` on mismatch. Errors are reserved for unusable hashes or
    /// primitive failures.
    async fn matches(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, CredentialError>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InvalidToken, Self::InvalidToken) | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

/// Mints and checks signed, time-limited bearer tokens.
///
/// Tokens are validated statelessly. There is no revocation: a token stays
/// valid until its embedded expiry.
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for `subject`, valid for the configured lifetime.
    fn issue(&self, subject: &Email) -> Result<BearerToken, TokenError>;

    /// The subject of a token with an intact signature, expired or not.
    fn extract_subject(&self, token: &str) -> Result<String, TokenError>;

    /// Whether the current time is at or after the embedded expiry.
    fn is_expired(&self, token: &str) -> Result<bool, TokenError>;

    /// Signature intact, subject equal to `expected_subject` and not expired.
    /// Every failure collapses to `false`.
    fn validate(&self, token: &str, expected_subject: &str) -> bool;
}

#[derive(Debug, Error)]
#[error("Failed to send email: {0}")]
pub struct EmailClientError(pub String);

/// Outbound delivery of verification messages.
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_verification(
        &self,
        recipient: &Email,
        token: &VerificationToken,
    ) -> Result<(), EmailClientError>;
}
