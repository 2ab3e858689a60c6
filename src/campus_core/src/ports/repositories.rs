use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{account::Account, email::Email, verification_token::VerificationToken};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Account not found")]
    NotFound,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateEmail, Self::DuplicateEmail) => true,
            (Self::NotFound, Self::NotFound) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// Durable keyed collection of accounts.
///
/// Implementations must enforce email uniqueness atomically: a concurrent
/// insert of an existing email fails with [`AccountStoreError::DuplicateEmail`]
/// even if an earlier `exists_by_email` returned `false`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError>;

    async fn exists_by_email(&self, email: &Email) -> Result<bool, AccountStoreError>;

    /// Insert an account without an id (assigning one), or update an
    /// existing account in place. Returns the stored account.
    async fn save(&self, account: Account) -> Result<Account, AccountStoreError>;

    async fn find_by_verification_token(
        &self,
        token: &VerificationToken,
    ) -> Result<Option<Account>, AccountStoreError>;

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError>;
}
