use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{
    CONFIG_DIR, DEFAULT_STORE_TIMEOUT_MILLIS, DEFAULT_TOKEN_LIFETIME_MILLIS,
    DEVELOPMENT_JWT_SECRET, LOCAL_ENVIRONMENT,
    env::{APP_ENVIRONMENT_ENV_VAR, DATABASE_URL_ENV_VAR, JWT_SECRET_ENV_VAR},
    prod,
};

type Builder = config::ConfigBuilder<DefaultState>;

/// Immutable process-wide settings, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub application: ApplicationSetting,
    pub auth: AuthSetting,
    pub store: StoreSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
    pub allowed_origins: AllowedOrigins,
    pub conceal_account_existence: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
    pub lifetime_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSetting {
    pub timeout_millis: u64,
    #[serde(default)]
    pub database_url: Option<Secret<String>>,
}

/// CORS origins; a single `*` entry allows any origin.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn allows_any(&self) -> bool {
        self.0.iter().any(|origin| origin == "*")
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.allows_any()
            || origin
                .to_str()
                .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }
}

impl AuthServiceSetting {
    /// Load settings from defaults, `config/base`, `config/<APP_ENVIRONMENT>`,
    /// `APP__*` environment variables, then `JWT_SECRET` and `DATABASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| LOCAL_ENVIRONMENT.to_owned());

        let builder = Self::defaults()?
            .add_source(File::with_name(&format!("{CONFIG_DIR}/base")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt.secret", std::env::var(JWT_SECRET_ENV_VAR).ok())?
            .set_override_option(
                "store.database_url",
                std::env::var(DATABASE_URL_ENV_VAR).ok(),
            )?;

        Self::from_builder(builder, &environment)
    }

    /// Built-in defaults. An empty secret means "not configured".
    pub fn defaults() -> Result<Builder, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("auth.jwt.secret", "")?
            .set_default(
                "auth.jwt.lifetime_millis",
                DEFAULT_TOKEN_LIFETIME_MILLIS as i64,
            )?
            .set_default("auth.allowed_origins", vec!["*"])?
            .set_default("auth.conceal_account_existence", false)?
            .set_default("store.timeout_millis", DEFAULT_STORE_TIMEOUT_MILLIS as i64)
    }

    pub fn from_builder(builder: Builder, environment: &str) -> Result<Self, ConfigError> {
        let mut setting: Self = builder.build()?.try_deserialize()?;
        setting.resolve_jwt_secret(environment)?;
        Ok(setting)
    }

    fn resolve_jwt_secret(&mut self, environment: &str) -> Result<(), ConfigError> {
        if !self.auth.jwt.secret.expose_secret().is_empty() {
            return Ok(());
        }

        if environment != LOCAL_ENVIRONMENT {
            return Err(ConfigError::Message(format!(
                "auth.jwt.secret must be set (via {JWT_SECRET_ENV_VAR}) in the '{environment}' environment"
            )));
        }

        tracing::warn!(
            "No {JWT_SECRET_ENV_VAR} configured, signing tokens with the development secret"
        );
        self.auth.jwt.secret = Secret::new(DEVELOPMENT_JWT_SECRET.to_owned());
        Ok(())
    }

    pub fn token_lifetime(&self) -> Duration {
        Duration::from_millis(self.auth.jwt.lifetime_millis)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store.timeout_millis)
    }
}
