use std::sync::Arc;

use campus_core::{AccountStore, CredentialVerifier, EmailClient, Password, TokenIssuer};

use crate::{
    error::AuthServiceError,
    policy::AuthPolicy,
    response::AuthResponse,
    use_cases::{LoginUseCase, RegisterUseCase, VerifyEmailUseCase},
};

/// Entry point for registration, login and email verification.
///
/// Collaborators are injected at construction; the service holds no other
/// state and is cheap to clone into request handlers.
#[derive(Clone)]
pub struct AuthService {
    account_store: Arc<dyn AccountStore>,
    credential_verifier: Arc<dyn CredentialVerifier>,
    token_issuer: Arc<dyn TokenIssuer>,
    email_client: Arc<dyn EmailClient>,
    policy: AuthPolicy,
}

impl AuthService {
    pub fn new(
        account_store: Arc<dyn AccountStore>,
        credential_verifier: Arc<dyn CredentialVerifier>,
        token_issuer: Arc<dyn TokenIssuer>,
        email_client: Arc<dyn EmailClient>,
        policy: AuthPolicy,
    ) -> Self {
        Self {
            account_store,
            credential_verifier,
            token_issuer,
            email_client,
            policy,
        }
    }

    pub async fn register(
        &self,
        email: String,
        password: Password,
    ) -> Result<AuthResponse, AuthServiceError> {
        RegisterUseCase::new(
            self.account_store.as_ref(),
            self.credential_verifier.as_ref(),
            self.email_client.as_ref(),
            self.policy.store_timeout,
        )
        .execute(email, password)
        .await
    }

    pub async fn login(
        &self,
        email: String,
        password: Password,
    ) -> Result<AuthResponse, AuthServiceError> {
        LoginUseCase::new(
            self.account_store.as_ref(),
            self.credential_verifier.as_ref(),
            self.token_issuer.as_ref(),
            self.policy.store_timeout,
        )
        .conceal_account_existence(self.policy.conceal_account_existence)
        .execute(email, password)
        .await
    }

    pub async fn verify_email(&self, token: &str) -> Result<bool, AuthServiceError> {
        VerifyEmailUseCase::new(self.account_store.as_ref(), self.policy.store_timeout)
            .execute(token)
            .await
    }

    /// The issuer used for login, for transports that check bearer tokens.
    pub fn token_issuer(&self) -> &dyn TokenIssuer {
        self.token_issuer.as_ref()
    }
}
