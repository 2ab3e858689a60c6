use std::time::Duration;

use campus_core::{AccountStore, AuthRejection, CredentialVerifier, Email, Password, TokenIssuer};

use crate::{
    error::{AuthServiceError, bounded},
    response::AuthResponse,
};

/// Login use case - checks credentials and issues a bearer token
///
/// Checks run in a fixed order, each with its own message: domain gate,
/// account existence, password, verification status.
pub struct LoginUseCase<'a, S, C, T>
where
    S: AccountStore + ?Sized,
    C: CredentialVerifier + ?Sized,
    T: TokenIssuer + ?Sized,
{
    account_store: &'a S,
    credential_verifier: &'a C,
    token_issuer: &'a T,
    store_timeout: Duration,
    conceal_account_existence: bool,
}

impl<'a, S, C, T> LoginUseCase<'a, S, C, T>
where
    S: AccountStore + ?Sized,
    C: CredentialVerifier + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub fn new(
        account_store: &'a S,
        credential_verifier: &'a C,
        token_issuer: &'a T,
        store_timeout: Duration,
    ) -> Self {
        Self {
            account_store,
            credential_verifier,
            token_issuer,
            store_timeout,
            conceal_account_existence: false,
        }
    }

    /// Report unknown accounts with the same message as a wrong password.
    pub fn conceal_account_existence(mut self, conceal: bool) -> Self {
        self.conceal_account_existence = conceal;
        self
    }

    /// Execute the login use case
    ///
    /// # Returns
    /// A successful `AuthResponse` with a bearer token, or a rejected one
    /// naming the first check that failed.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: String,
        password: Password,
    ) -> Result<AuthResponse, AuthServiceError> {
        let email = match Email::parse(email) {
            Ok(email) => email,
            Err(e) => return Ok(reject(e.into())),
        };

        let Some(account) =
            bounded(self.store_timeout, self.account_store.find_by_email(&email)).await?
        else {
            return Ok(reject(if self.conceal_account_existence {
                AuthRejection::InvalidCredentials
            } else {
                AuthRejection::NotFound
            }));
        };

        if !self
            .credential_verifier
            .matches(&password, account.password_hash())
            .await?
        {
            return Ok(reject(AuthRejection::InvalidCredentials));
        }

        if !account.is_verified() {
            return Ok(reject(AuthRejection::Unverified));
        }

        let token = self.token_issuer.issue(account.email())?;

        tracing::info!(account_id = ?account.id(), "Login succeeded");
        Ok(AuthResponse::logged_in(token, account.email().clone()))
    }
}

fn reject(rejection: AuthRejection) -> AuthResponse {
    tracing::info!(%rejection, "Login rejected");
    AuthResponse::rejected(rejection)
}
