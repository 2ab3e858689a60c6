pub mod auth_service;
pub mod error;
pub mod policy;
pub mod response;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_service::AuthService;
pub use error::AuthServiceError;
pub use policy::AuthPolicy;
pub use response::AuthResponse;
pub use use_cases::{LoginUseCase, RegisterUseCase, VerifyEmailUseCase};
