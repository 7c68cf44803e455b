//! Account Entity
//!
//! One row per registered account; the source of truth for authentication.
//! Accounts are never deleted by this core.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use kernel::principal::Principal;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// Registered account
#[derive(Debug, Clone)]
pub struct Account {
    /// Database-generated identifier
    pub account_id: AccountId,
    /// Unique login email
    pub email: Email,
    /// Argon2id hash in PHC format
    pub password_hash: HashedPassword,
    /// Admin role flag
    pub is_admin: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Claim set embedded in credentials issued for this account
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.account_id.as_i64(),
            email: self.email.as_str().to_string(),
            is_admin: self.is_admin,
        }
    }
}

/// Account data prior to insertion (the id is storage-generated)
#[derive(Debug)]
pub struct NewAccount {
    pub email: Email,
    pub password_hash: HashedPassword,
}
