//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert a new account and return the stored row
    async fn create(&self, account: &NewAccount) -> AuthResult<Account>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;
}
