//! Login Use Case
//!
//! Authenticates an account and issues a credential embedding its
//! identity and role claim.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    codec: Arc<TokenCodec>,
}

impl<R> LoginUseCase<R>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::AccountNotFound)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // A password failing the policy can never match a stored hash
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidPassword)?;

        if !account.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidPassword);
        }

        let token = self
            .codec
            .issue(&account.principal())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            account_id = %account.account_id,
            is_admin = account.is_admin,
            "Account logged in"
        );

        Ok(LoginOutput {
            id: account.account_id.as_i64(),
            email: account.email.as_str().to_string(),
            is_admin: account.is_admin,
            token,
        })
    }
}
