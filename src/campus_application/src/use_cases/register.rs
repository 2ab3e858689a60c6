use std::time::Duration;

use campus_core::{
    Account, AccountStore, AccountStoreError, AuthRejection, CredentialVerifier, Email,
    EmailClient, Password, VerificationToken,
};

use crate::{
    error::{AuthServiceError, bounded},
    response::AuthResponse,
};

/// Register use case - creates an unverified account behind the domain gate
pub struct RegisterUseCase<'a, S, C, E>
where
    S: AccountStore + ?Sized,
    C: CredentialVerifier + ?Sized,
    E: EmailClient + ?Sized,
{
    account_store: &'a S,
    credential_verifier: &'a C,
    email_client: &'a E,
    store_timeout: Duration,
}

impl<'a, S, C, E> RegisterUseCase<'a, S, C, E>
where
    S: AccountStore + ?Sized,
    C: CredentialVerifier + ?Sized,
    E: EmailClient + ?Sized,
{
    pub fn new(
        account_store: &'a S,
        credential_verifier: &'a C,
        email_client: &'a E,
        store_timeout: Duration,
    ) -> Self {
        Self {
            account_store,
            credential_verifier,
            email_client,
            store_timeout,
        }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// A successful `AuthResponse` carrying the email, a rejected one for
    /// a non-institutional or already registered email, or an
    /// `AuthServiceError` if a collaborator failed.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: String,
        password: Password,
    ) -> Result<AuthResponse, AuthServiceError> {
        let email = match Email::parse(email) {
            Ok(email) => email,
            Err(e) => return Ok(reject(e.into())),
        };

        if bounded(self.store_timeout, self.account_store.exists_by_email(&email)).await? {
            return Ok(reject(AuthRejection::DuplicateEmail));
        }

        let password_hash = self.credential_verifier.hash(&password).await?;
        let account = Account::new(email, password_hash, VerificationToken::generate());

        // A concurrent registration may have won between the check and the insert
        let account = match bounded(self.store_timeout, self.account_store.save(account)).await {
            Ok(account) => account,
            Err(AuthServiceError::Store(AccountStoreError::DuplicateEmail)) => {
                return Ok(reject(AuthRejection::DuplicateEmail));
            }
            Err(e) => return Err(e),
        };

        if let Some(token) = account.verification_token() {
            if let Err(e) = self
                .email_client
                .send_verification(account.email(), token)
                .await
            {
                tracing::warn!(error = %e, "Verification email was not delivered");
            }
        }

        tracing::info!(account_id = ?account.id(), "Account registered");
        Ok(AuthResponse::registered(account.email().clone()))
    }
}

fn reject(rejection: AuthRejection) -> AuthResponse {
    tracing::info!(%rejection, "Registration rejected");
    AuthResponse::rejected(rejection)
}
