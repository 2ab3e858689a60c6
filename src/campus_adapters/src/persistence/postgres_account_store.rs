use std::time::Duration;

use campus_core::{
    Account, AccountId, AccountStore, AccountStoreError, Email, HashedPassword, VerificationToken,
};
use secrecy::Secret;
use sqlx::{PgPool, postgres::PgPoolOptions};

#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    password_hash: String,
    verified: bool,
    verification_token: Option<String>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountStoreError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let email =
            Email::parse(row.email).map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;
        let token = row
            .verification_token
            .as_deref()
            .and_then(VerificationToken::parse);

        Account::restore(
            AccountId::new(row.id),
            email,
            HashedPassword::new(Secret::new(row.password_hash)),
            row.verified,
            token,
        )
        .map_err(|e| AccountStoreError::Unexpected(e.to_string()))
    }
}

pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }

    /// Open a small pool against `url`. Acquiring a connection gives up after
    /// `acquire_timeout`.
    pub async fn connect(url: &str, acquire_timeout: Duration) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    async fn insert(&self, account: Account) -> Result<Account, AccountStoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO accounts (email, password_hash, verified, verification_token)
                VALUES ($1, $2, $3, $4)
                RETURNING id
            "#,
        )
        .bind(account.email().as_str())
        .bind(account.password_hash().expose())
        .bind(account.is_verified())
        .bind(account.verification_token().map(VerificationToken::as_str))
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(account.with_id(AccountId::new(id)))
    }

    async fn update(&self, id: AccountId, account: Account) -> Result<Account, AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET email = $1, password_hash = $2, verified = $3, verification_token = $4
                WHERE id = $5
            "#,
        )
        .bind(account.email().as_str())
        .bind(account.password_hash().expose())
        .bind(account.is_verified())
        .bind(account.verification_token().map(VerificationToken::as_str))
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::NotFound);
        }

        Ok(account)
    }
}

fn map_write_error(e: sqlx::Error) -> AccountStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AccountStoreError::DuplicateEmail;
        }
    }
    AccountStoreError::Unexpected(e.to_string())
}

fn unexpected(e: sqlx::Error) -> AccountStoreError {
    AccountStoreError::Unexpected(e.to_string())
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"
                SELECT id, email, password_hash, verified, verification_token
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Checking account existence in PostgreSQL", skip_all)]
    async fn exists_by_email(&self, email: &Email) -> Result<bool, AccountStoreError> {
        sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)"#)
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)
    }

    #[tracing::instrument(name = "Saving account to PostgreSQL", skip_all)]
    async fn save(&self, account: Account) -> Result<Account, AccountStoreError> {
        match account.id() {
            Some(id) => self.update(id, account).await,
            None => self.insert(account).await,
        }
    }

    #[tracing::instrument(name = "Retrieving account by verification token", skip_all)]
    async fn find_by_verification_token(
        &self,
        token: &VerificationToken,
    ) -> Result<Option<Account>, AccountStoreError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"
                SELECT id, email, password_hash, verified, verification_token
                FROM accounts
                WHERE verification_token = $1
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        row.map(Account::try_from).transpose()
    }

    #[tracing::instrument(name = "Listing accounts", skip_all)]
    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        let rows: Vec<AccountRow> = sqlx::query_as(
            r#"
                SELECT id, email, password_hash, verified, verification_token
                FROM accounts
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        rows.into_iter().map(Account::try_from).collect()
    }
}
