use std::time::Duration;

/// Tunables of the auth service that are not owned by a collaborator.
#[derive(Debug, Clone, Copy)]
pub struct AuthPolicy {
    /// Report unknown accounts as "Invalid credentials" instead of
    /// "User not found" on login.
    pub conceal_account_existence: bool,
    /// Upper bound on every account store call.
    pub store_timeout: Duration,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            conceal_account_existence: false,
            store_timeout: Duration::from_secs(5),
        }
    }
}
