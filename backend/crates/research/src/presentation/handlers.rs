//! HTTP Handlers
//!
//! User-facing progress handlers read the verified identity from request
//! extensions; the credential gate in front of the router guarantees it is
//! present. Admin handlers additionally sit behind the admin gate.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Extension;
use std::sync::Arc;

use kernel::id::{MissionId, ResearchId, RewardId};
use kernel::principal::Principal;

use crate::application::{CreateEntryInput, ListProgressUseCase, ManageCatalogUseCase, ToggleProgressUseCase};
use crate::domain::repository::ResearchRepository;
use crate::error::ResearchResult;
use crate::presentation::dto::{CatalogEntryResponse, CreateEntryRequest, ResearchProgressResponse};

/// Shared state for research handlers
#[derive(Clone)]
pub struct ResearchAppState<R>
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Progress view
// ============================================================================

/// GET /api/field-researches
pub async fn list_progress<R>(
    State(state): State<ResearchAppState<R>>,
    Extension(principal): Extension<Principal>,
) -> ResearchResult<Json<Vec<ResearchProgressResponse>>>
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProgressUseCase::new(state.repo.clone());

    let entries = use_case.execute(principal.account_id()).await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

// ============================================================================
// Toggles
// ============================================================================

/// POST /api/field-researches/{researchId}/missions/{missionId}/toggle
pub async fn toggle_mission<R>(
    State(state): State<ResearchAppState<R>>,
    Path((research_id, mission_id)): Path<(i64, i64)>,
) -> ResearchResult<StatusCode>
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ToggleProgressUseCase::new(state.repo.clone());

    use_case
        .toggle_mission(
            ResearchId::from_i64(research_id),
            MissionId::from_i64(mission_id),
        )
        .await?;

    Ok(StatusCode::OK)
}

/// POST /api/field-researches/{researchId}/rewards/{rewardId}/toggle
pub async fn toggle_reward<R>(
    State(state): State<ResearchAppState<R>>,
    Path((research_id, reward_id)): Path<(i64, i64)>,
) -> ResearchResult<StatusCode>
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ToggleProgressUseCase::new(state.repo.clone());

    use_case
        .toggle_reward(
            ResearchId::from_i64(research_id),
            RewardId::from_i64(reward_id),
        )
        .await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// Catalog administration
// ============================================================================

/// GET /api/admin/field-researches
pub async fn list_catalog<R>(
    State(state): State<ResearchAppState<R>>,
) -> ResearchResult<Json<Vec<CatalogEntryResponse>>>
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageCatalogUseCase::new(state.repo.clone());

    let entries = use_case.list().await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// POST /api/admin/field-researches
pub async fn create_entry<R>(
    State(state): State<ResearchAppState<R>>,
    Json(req): Json<CreateEntryRequest>,
) -> ResearchResult<impl IntoResponse>
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageCatalogUseCase::new(state.repo.clone());

    let entry = use_case
        .create(CreateEntryInput {
            title: req.title,
            total_stages: req.total_stages,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CatalogEntryResponse::from(entry))))
}

/// DELETE /api/admin/field-researches/{id}
pub async fn delete_entry<R>(
    State(state): State<ResearchAppState<R>>,
    Path(research_id): Path<i64>,
) -> ResearchResult<StatusCode>
where
    R: ResearchRepository + Clone + Send + Sync + 'static,
{
    let use_case = ManageCatalogUseCase::new(state.repo.clone());

    use_case.delete(ResearchId::from_i64(research_id)).await?;

    Ok(StatusCode::OK)
}
