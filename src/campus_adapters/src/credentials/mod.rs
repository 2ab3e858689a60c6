pub mod argon2_credential_verifier;

pub use argon2_credential_verifier::Argon2CredentialVerifier;
