use std::{future::Future, time::Duration};

use campus_core::{AccountError, AccountStoreError, CredentialError, TokenError};
use thiserror::Error;

/// Failures of the infrastructure the service depends on.
///
/// Expected rejections (wrong domain, bad password, ...) are not errors; they
/// are carried by [`crate::AuthResponse`].
#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("Account store unavailable")]
    StoreUnavailable,
    #[error("Account store error: {0}")]
    Store(#[from] AccountStoreError),
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

/// Run a store call under `limit`. Elapsing maps to `StoreUnavailable`.
pub(crate) async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, AuthServiceError>
where
    F: Future<Output = Result<T, AccountStoreError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(AuthServiceError::from),
        Err(_) => {
            tracing::error!(timeout_ms = limit.as_millis() as u64, "Account store call timed out");
            Err(AuthServiceError::StoreUnavailable)
        }
    }
}
