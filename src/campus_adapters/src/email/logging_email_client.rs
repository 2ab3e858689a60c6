use campus_core::{Email, EmailClient, EmailClientError, VerificationToken};

use crate::config::API_PREFIX;

/// Delivers verification links to the log instead of a mailbox.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmailClient;

impl LoggingEmailClient {
    pub fn new() -> Self {
        Self
    }

    pub fn verification_link(token: &VerificationToken) -> String {
        format!("{API_PREFIX}/verify?token={token}")
    }
}

#[async_trait::async_trait]
impl EmailClient for LoggingEmailClient {
    #[tracing::instrument(name = "Sending verification email", skip_all)]
    async fn send_verification(
        &self,
        recipient: &Email,
        token: &VerificationToken,
    ) -> Result<(), EmailClientError> {
        tracing::info!(
            recipient = %recipient,
            link = %Self::verification_link(token),
            "Verification email"
        );
        Ok(())
    }
}
