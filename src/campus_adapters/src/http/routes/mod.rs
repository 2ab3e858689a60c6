//! Axum handlers for the `/api/auth` endpoints.
//!
//! Handlers translate between HTTP and [`campus_application::AuthService`];
//! rejections become `400` with the response body, infrastructure failures
//! become [`error::AuthApiError`].

pub mod credentials;
pub mod error;
pub mod health;
pub mod login;
pub mod register;
pub mod verify_email;
pub mod verify_token;

pub use health::health;
pub use login::login;
pub use register::register;
pub use verify_email::verify_email;
pub use verify_token::verify_token;
