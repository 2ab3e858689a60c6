pub mod account;
pub mod bearer_token;
pub mod email;
pub mod password;
pub mod rejection;
pub mod verification_token;
