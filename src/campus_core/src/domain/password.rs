use secrecy::{ExposeSecret, Secret};

/// A plaintext password as submitted by a client. Never persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(password: Secret<String>) -> Self {
        Self(password)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<Secret<String>> for Password {
    fn from(password: Secret<String>) -> Self {
        Self(password)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Output of a one-way credential hash (PHC string for Argon2id).
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
