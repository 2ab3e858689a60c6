pub mod auth_server;
pub mod startup;
pub mod telemetry;

pub use auth_server::AuthServer;
pub use startup::{StartupError, build_auth_service, configure_account_store};
