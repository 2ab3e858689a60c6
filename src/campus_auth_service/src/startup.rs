use std::sync::Arc;

use campus_adapters::{
    Argon2CredentialVerifier, HashMapAccountStore, JwtConfig, JwtTokenIssuer, LoggingEmailClient,
    PostgresAccountStore, config::AuthServiceSetting,
};
use campus_application::{AuthPolicy, AuthService};
use campus_core::{AccountStore, TokenError};
use secrecy::ExposeSecret;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid token settings: {0}")]
    Token(#[from] TokenError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL when `store.database_url` is set, otherwise an in-process map.
pub async fn configure_account_store(
    setting: &AuthServiceSetting,
) -> Result<Arc<dyn AccountStore>, StartupError> {
    let Some(url) = &setting.store.database_url else {
        tracing::warn!("No database configured, accounts are kept in memory");
        return Ok(Arc::new(HashMapAccountStore::new()));
    };

    let pool = PostgresAccountStore::connect(url.expose_secret(), setting.store_timeout()).await?;
    let store = PostgresAccountStore::new(pool);
    store.run_migrations().await?;

    Ok(Arc::new(store))
}

/// Wire the service from settings around the given store.
pub fn build_auth_service(
    setting: &AuthServiceSetting,
    account_store: Arc<dyn AccountStore>,
) -> Result<AuthService, StartupError> {
    let token_issuer = JwtTokenIssuer::new(&JwtConfig {
        secret: setting.auth.jwt.secret.clone(),
        lifetime: setting.token_lifetime(),
    })?;

    let policy = AuthPolicy {
        conceal_account_existence: setting.auth.conceal_account_existence,
        store_timeout: setting.store_timeout(),
    };

    Ok(AuthService::new(
        account_store,
        Arc::new(Argon2CredentialVerifier::new()),
        Arc::new(token_issuer),
        Arc::new(LoggingEmailClient::new()),
        policy,
    ))
}
