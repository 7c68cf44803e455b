//! Research Routers
//!
//! The user-facing progress router and the admin catalog router are built
//! separately so the composition root can stack different gates in front of
//! each.

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::domain::repository::ResearchRepository;
use crate::infra::postgres::PgResearchRepository;
use crate::presentation::handlers::{self, ResearchAppState};

/// Create the user-facing research router with PostgreSQL repository
pub fn research_router(repo: PgResearchRepository) -> Router {
    research_router_generic(repo)
}

/// Create a generic user-facing research router for any repository implementation
pub fn research_router_generic<R>(repo: R) -> Router
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    let state = ResearchAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list_progress::<R>))
        .route(
            "/{research_id}/missions/{mission_id}/toggle",
            post(handlers::toggle_mission::<R>),
        )
        .route(
            "/{research_id}/rewards/{reward_id}/toggle",
            post(handlers::toggle_reward::<R>),
        )
        .with_state(state)
}

/// Create the admin catalog router with PostgreSQL repository
pub fn catalog_admin_router(repo: PgResearchRepository) -> Router {
    catalog_admin_router_generic(repo)
}

/// Create a generic admin catalog router for any repository implementation
pub fn catalog_admin_router_generic<R>(repo: R) -> Router
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    let state = ResearchAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_catalog::<R>).post(handlers::create_entry::<R>),
        )
        .route("/{research_id}", delete(handlers::delete_entry::<R>))
        .with_state(state)
}
