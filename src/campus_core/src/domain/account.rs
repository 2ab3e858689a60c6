use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{email::Email, password::HashedPassword, verification_token::VerificationToken};

/// Store-assigned account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Account is already verified")]
    AlreadyVerified,
    #[error("Account verification state is inconsistent")]
    InconsistentVerificationState,
}

/// A registered account.
///
/// The verification token is present exactly while the account is
/// unverified. `verify` is the only transition and it happens once.
#[derive(Debug, Clone)]
pub struct Account {
    id: Option<AccountId>,
    email: Email,
    password_hash: HashedPassword,
    verified: bool,
    verification_token: Option<VerificationToken>,
}

impl Account {
    /// A new, not yet persisted, unverified account.
    pub fn new(
        email: Email,
        password_hash: HashedPassword,
        verification_token: VerificationToken,
    ) -> Self {
        Self {
            id: None,
            email,
            password_hash,
            verified: false,
            verification_token: Some(verification_token),
        }
    }

    /// Rebuild an account loaded from storage.
    pub fn restore(
        id: AccountId,
        email: Email,
        password_hash: HashedPassword,
        verified: bool,
        verification_token: Option<VerificationToken>,
    ) -> Result<Self, AccountError> {
        if verified == verification_token.is_some() {
            return Err(AccountError::InconsistentVerificationState);
        }

        Ok(Self {
            id: Some(id),
            email,
            password_hash,
            verified,
            verification_token,
        })
    }

    /// Assign the identifier chosen by the store on insert.
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn verification_token(&self) -> Option<&VerificationToken> {
        self.verification_token.as_ref()
    }

    /// Mark the email as verified and consume the verification token.
    pub fn verify(&mut self) -> Result<(), AccountError> {
        if self.verified {
            return Err(AccountError::AlreadyVerified);
        }
        self.verified = true;
        self.verification_token = None;
        Ok(())
    }
}
