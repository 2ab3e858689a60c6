pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountError, AccountId},
    bearer_token::BearerToken,
    email::{Email, EmailError, INSTITUTIONAL_SUFFIX},
    password::{HashedPassword, Password},
    rejection::AuthRejection,
    verification_token::VerificationToken,
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{
        CredentialError, CredentialVerifier, EmailClient, EmailClientError, TokenError,
        TokenIssuer,
    },
};
