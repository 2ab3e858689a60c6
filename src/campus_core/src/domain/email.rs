use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffix every account email must end with. Matched case-sensitively.
pub const INSTITUTIONAL_SUFFIX: &str = ".edu";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("Only .edu email addresses are allowed")]
    NotInstitutional,
}

/// An email address that has passed the institutional domain gate.
///
/// This is deliberately not a general email-format validator: the only rule
/// is a literal trailing match against [`INSTITUTIONAL_SUFFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, EmailError> {
        let raw = raw.into();
        if !raw.ends_with(INSTITUTIONAL_SUFFIX) {
            return Err(EmailError::NotInstitutional);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
