use std::time::Duration;

use campus_core::{AccountError, AccountStore, VerificationToken};

use crate::error::{AuthServiceError, bounded};

/// Verify email use case - consumes a verification token
pub struct VerifyEmailUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    account_store: &'a S,
    store_timeout: Duration,
}

impl<'a, S> VerifyEmailUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    pub fn new(account_store: &'a S, store_timeout: Duration) -> Self {
        Self {
            account_store,
            store_timeout,
        }
    }

    /// Execute the verify email use case
    ///
    /// # Returns
    /// `true` if an account held exactly this token and is now verified.
    /// Unknown or already consumed tokens yield `false`.
    #[tracing::instrument(name = "VerifyEmailUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &str) -> Result<bool, AuthServiceError> {
        let Some(token) = VerificationToken::parse(token) else {
            return Ok(false);
        };

        let Some(mut account) = bounded(
            self.store_timeout,
            self.account_store.find_by_verification_token(&token),
        )
        .await?
        else {
            tracing::info!("Unknown verification token");
            return Ok(false);
        };

        match account.verify() {
            Ok(()) => {}
            Err(AccountError::AlreadyVerified) => return Ok(false),
            Err(e) => return Err(e.into()),
        }

        let account = bounded(self.store_timeout, self.account_store.save(account)).await?;

        tracing::info!(account_id = ?account.id(), "Email verified");
        Ok(true)
    }
}
