pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

pub const CONFIG_DIR: &str = "config";
pub const LOCAL_ENVIRONMENT: &str = "local";

/// Signing secret used only when running locally without `JWT_SECRET`.
/// Any other environment refuses to start without an explicit secret.
pub const DEVELOPMENT_JWT_SECRET: &str = "campus-auth-local-development-signing-secret-not-for-deployment";

pub const DEFAULT_TOKEN_LIFETIME_MILLIS: u64 = 86_400_000;
pub const DEFAULT_STORE_TIMEOUT_MILLIS: u64 = 5_000;

pub const API_PREFIX: &str = "/api/auth";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8080";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
