//! # Campus Auth
//!
//! Facade over the campus auth crates: registration restricted to `.edu`
//! addresses, email verification and bearer-token login.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `VerificationToken`, ...
//! - **Ports**: `AccountStore`, `CredentialVerifier`, `TokenIssuer`, `EmailClient`
//! - **Application**: `AuthService` and the register, login and verify use cases
//! - **Adapters**: Argon2, JWT, in-memory and PostgreSQL stores, HTTP routes
//! - **Server**: `AuthServer`, the axum front of an `AuthService`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use campus_core::*;
}

pub use campus_core::{
    Account, AccountError, AccountId, AuthRejection, BearerToken, Email, EmailError,
    HashedPassword, Password, VerificationToken,
};

// ============================================================================
// Ports
// ============================================================================

pub use campus_core::{
    AccountStore, AccountStoreError, CredentialError, CredentialVerifier, EmailClient,
    EmailClientError, TokenError, TokenIssuer,
};

// ============================================================================
// Application Layer
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use campus_application::*;
}

pub use campus_application::{
    AuthPolicy, AuthResponse, AuthService, AuthServiceError, LoginUseCase, RegisterUseCase,
    VerifyEmailUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    pub use campus_adapters::{config, credentials, email, http, persistence, token};
}

pub use campus_adapters::{
    Argon2CredentialVerifier, HashMapAccountStore, JwtConfig, JwtTokenIssuer, LoggingEmailClient,
    PostgresAccountStore,
};

// ============================================================================
// Server
// ============================================================================

pub use campus_auth_service::{
    AuthServer, StartupError, build_auth_service, configure_account_store,
};

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
