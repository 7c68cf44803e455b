//! Register Use Case
//!
//! Creates a new account and issues its first credential.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::NewAccount;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub id: i64,
    pub email: String,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    codec: Arc<TokenCodec>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, codec: Arc<TokenCodec>) -> Self {
        Self {
            repo,
            config,
            codec,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate email
        let email =
            Email::new(input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Persist; a duplicate email surfaces as a storage error here
        let account = self
            .repo
            .create(&NewAccount {
                email,
                password_hash,
            })
            .await?;

        // Issue the first credential for the new account
        let token = self
            .codec
            .issue(&account.principal())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            account_id = %account.account_id,
            email = %account.email,
            "Account registered"
        );

        Ok(RegisterOutput {
            id: account.account_id.as_i64(),
            email: account.email.as_str().to_string(),
            token,
        })
    }
}
