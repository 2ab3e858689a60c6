//! Test doubles shared by the use case tests.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicI64, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use campus_core::{
    Account, AccountId, AccountStore, AccountStoreError, BearerToken, CredentialError,
    CredentialVerifier, Email, EmailClient, EmailClientError, HashedPassword, Password,
    TokenError, TokenIssuer, VerificationToken,
};
use secrecy::Secret;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
    next_id: Arc<AtomicI64>,
}

impl MockAccountStore {
    pub async fn account(&self, email: &str) -> Option<Account> {
        let email = Email::parse(email).ok()?;
        self.accounts.read().await.get(&email).cloned()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, AccountStoreError> {
        Ok(self.accounts.read().await.contains_key(email))
    }

    async fn save(&self, account: Account) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = match account.id() {
            Some(_) => account,
            None => {
                if accounts.contains_key(account.email()) {
                    return Err(AccountStoreError::DuplicateEmail);
                }
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                account.with_id(AccountId::new(id))
            }
        };
        accounts.insert(account.email().clone(), account.clone());
        Ok(account)
    }

    async fn find_by_verification_token(
        &self,
        token: &VerificationToken,
    ) -> Result<Option<Account>, AccountStoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.verification_token() == Some(token))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }
}

/// Store whose `exists_by_email` lies, to simulate a lost registration race.
#[derive(Clone, Default)]
pub struct RacingAccountStore(pub MockAccountStore);

#[async_trait]
impl AccountStore for RacingAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        self.0.find_by_email(email).await
    }

    async fn exists_by_email(&self, _email: &Email) -> Result<bool, AccountStoreError> {
        Ok(false)
    }

    async fn save(&self, account: Account) -> Result<Account, AccountStoreError> {
        self.0.save(account).await
    }

    async fn find_by_verification_token(
        &self,
        token: &VerificationToken,
    ) -> Result<Option<Account>, AccountStoreError> {
        self.0.find_by_verification_token(token).await
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        self.0.list_all().await
    }
}

/// Store that never answers in time.
#[derive(Clone, Default)]
pub struct HangingAccountStore;

#[async_trait]
impl AccountStore for HangingAccountStore {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<Account>, AccountStoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn exists_by_email(&self, _email: &Email) -> Result<bool, AccountStoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(false)
    }

    async fn save(&self, account: Account) -> Result<Account, AccountStoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(account)
    }

    async fn find_by_verification_token(
        &self,
        _token: &VerificationToken,
    ) -> Result<Option<Account>, AccountStoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }
}

/// Reversible "hash" so tests stay fast.
#[derive(Clone, Default)]
pub struct PlainCredentialVerifier;

#[async_trait]
impl CredentialVerifier for PlainCredentialVerifier {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, CredentialError> {
        Ok(HashedPassword::new(Secret::new(format!(
            "plain${}",
            password.expose()
        ))))
    }

    async fn matches(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, CredentialError> {
        Ok(hash.expose() == format!("plain${}", password.expose()))
    }
}

#[derive(Clone, Default)]
pub struct FakeTokenIssuer;

impl TokenIssuer for FakeTokenIssuer {
    fn issue(&self, subject: &Email) -> Result<BearerToken, TokenError> {
        Ok(BearerToken::new(format!("token-for:{subject}")))
    }

    fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        token
            .strip_prefix("token-for:")
            .map(str::to_owned)
            .ok_or(TokenError::InvalidToken)
    }

    fn is_expired(&self, token: &str) -> Result<bool, TokenError> {
        self.extract_subject(token).map(|_| false)
    }

    fn validate(&self, token: &str, expected_subject: &str) -> bool {
        self.extract_subject(token)
            .is_ok_and(|subject| subject == expected_subject)
    }
}

#[derive(Clone, Default)]
pub struct RecordingEmailClient {
    pub sent: Arc<Mutex<Vec<(Email, VerificationToken)>>>,
    pub fail: bool,
}

#[async_trait]
impl EmailClient for RecordingEmailClient {
    async fn send_verification(
        &self,
        recipient: &Email,
        token: &VerificationToken,
    ) -> Result<(), EmailClientError> {
        if self.fail {
            return Err(EmailClientError("mailbox unreachable".to_owned()));
        }
        self.sent
            .lock()
            .expect("lock poisoned")
            .push((recipient.clone(), token.clone()));
        Ok(())
    }
}

pub fn password(raw: &str) -> Password {
    Password::from(Secret::new(raw.to_owned()))
}
