pub mod config;
pub mod credentials;
pub mod email;
pub mod http;
pub mod persistence;
pub mod token;

pub use credentials::Argon2CredentialVerifier;
pub use email::LoggingEmailClient;
pub use persistence::{HashMapAccountStore, PostgresAccountStore};
pub use token::{JwtConfig, JwtTokenIssuer};
