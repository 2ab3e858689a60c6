pub mod routes;

pub use routes::error::{AuthApiError, ErrorResponse};
