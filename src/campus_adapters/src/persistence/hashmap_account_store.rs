use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use campus_core::{
    Account, AccountId, AccountStore, AccountStoreError, Email, VerificationToken,
};

#[derive(Default)]
struct Accounts {
    by_id: BTreeMap<AccountId, Account>,
    by_email: HashMap<Email, AccountId>,
    by_token: HashMap<VerificationToken, AccountId>,
    last_id: i64,
}

impl Accounts {
    fn insert(&mut self, account: Account) -> Result<Account, AccountStoreError> {
        if self.by_email.contains_key(account.email()) {
            return Err(AccountStoreError::DuplicateEmail);
        }

        self.last_id += 1;
        let account = account.with_id(AccountId::new(self.last_id));
        self.index(&account);
        Ok(account)
    }

    fn update(&mut self, id: AccountId, account: Account) -> Result<Account, AccountStoreError> {
        let previous = self.by_id.get(&id).ok_or(AccountStoreError::NotFound)?;

        if previous.email() != account.email() && self.by_email.contains_key(account.email()) {
            return Err(AccountStoreError::DuplicateEmail);
        }

        self.by_email.remove(previous.email());
        if let Some(token) = previous.verification_token() {
            self.by_token.remove(token);
        }
        self.index(&account);
        Ok(account)
    }

    fn index(&mut self, account: &Account) {
        let Some(id) = account.id() else {
            return;
        };
        self.by_email.insert(account.email().clone(), id);
        if let Some(token) = account.verification_token() {
            self.by_token.insert(token.clone(), id);
        }
        self.by_id.insert(id, account.clone());
    }
}

/// In-process account store. All indexes sit behind one lock so the
/// uniqueness check and the insert happen atomically.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, AccountStoreError> {
        Ok(self.accounts.read().await.by_email.contains_key(email))
    }

    async fn save(&self, account: Account) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        match account.id() {
            Some(id) => accounts.update(id, account),
            None => accounts.insert(account),
        }
    }

    async fn find_by_verification_token(
        &self,
        token: &VerificationToken,
    ) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .by_token
            .get(token)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        Ok(self.accounts.read().await.by_id.values().cloned().collect())
    }
}
