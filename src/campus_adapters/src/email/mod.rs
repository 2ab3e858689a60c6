pub mod logging_email_client;

pub use logging_email_client::LoggingEmailClient;
