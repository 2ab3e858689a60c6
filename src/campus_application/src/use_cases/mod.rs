pub mod login;
pub mod register;
pub mod verify_email;

pub use login::LoginUseCase;
pub use register::RegisterUseCase;
pub use verify_email::VerifyEmailUseCase;
