//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &NewAccount) -> AuthResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (
                email,
                password_hash
            ) VALUES ($1, $2)
            RETURNING
                account_id,
                email,
                password_hash,
                is_admin,
                created_at
            "#,
        )
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await?;

        row.into_account()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                is_admin,
                created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: i64,
    email: String,
    password_hash: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = HashedPassword::from_phc_string(&self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password hash: {}", e)))?;

        Ok(Account {
            account_id: AccountId::from_i64(self.account_id),
            email: Email::from_db(self.email),
            password_hash,
            is_admin: self.is_admin,
            created_at: self.created_at,
        })
    }
}
