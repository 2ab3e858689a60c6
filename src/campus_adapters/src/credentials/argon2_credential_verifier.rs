use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use campus_core::{CredentialError, CredentialVerifier, HashedPassword, Password};
use secrecy::{ExposeSecret, Secret};

/// Argon2id hashing, run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialVerifier;

impl Argon2CredentialVerifier {
    pub fn new() -> Self {
        Self
    }
}

fn hasher() -> Result<Argon2<'static>, CredentialError> {
    let params =
        Params::new(15000, 2, 1, None).map_err(|e| CredentialError::Unexpected(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait]
impl CredentialVerifier for Argon2CredentialVerifier {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<HashedPassword, CredentialError> {
        let password = password.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(&mut OsRng);
                hasher()?
                    .hash_password(password.expose_secret().as_bytes(), &salt)
                    .map(|hash| HashedPassword::new(Secret::new(hash.to_string())))
                    .map_err(|e| CredentialError::Unexpected(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialError::Unexpected(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn matches(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, CredentialError> {
        let password = password.as_ref().clone();
        let expected_hash = hash.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash = PasswordHash::new(expected_hash.expose_secret())
                    .map_err(|e| CredentialError::MalformedHash(e.to_string()))?;

                match hasher()?.verify_password(password.expose_secret().as_bytes(), &expected_hash)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialError::Unexpected(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialError::Unexpected(e.to_string()))?
    }
}
