//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use platform::token::TokenCodec;

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAccountRepository, config: AuthConfig, codec: TokenCodec) -> Router {
    auth_router_generic(repo, config, codec)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig, codec: TokenCodec) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        codec: Arc::new(codec),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
