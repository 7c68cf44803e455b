//! Field Research Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, the join-collapse service,
//!   repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Data Model
//! - A field research entry is a catalog task with ordered stages
//! - Missions (checklist) and rewards (claim checklist) belong to exactly
//!   one entry; their completion flags are the only mutable state
//! - Toggles are single atomic scoped updates; a (child, parent) pair that
//!   does not correspond mutates nothing and still reports success

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ResearchError, ResearchResult};
pub use infra::postgres::PgResearchRepository;
pub use presentation::router::{catalog_admin_router, research_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgResearchRepository as ResearchStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
