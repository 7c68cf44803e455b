//! Manage Catalog Use Case
//!
//! Admin-only create/list/delete operations on the research catalog.
//! Authorization is enforced by the gate in front of the router, not here.

use std::sync::Arc;

use kernel::id::ResearchId;

use crate::domain::entities::ResearchEntry;
use crate::domain::repository::ResearchRepository;
use crate::domain::value_objects::{ResearchTitle, StageCount};
use crate::error::{ResearchError, ResearchResult};

/// Create entry input
pub struct CreateEntryInput {
    pub title: String,
    pub total_stages: i32,
}

/// Manage catalog use case
pub struct ManageCatalogUseCase<R>
where
    R: ResearchRepository,
{
    repo: Arc<R>,
}

impl<R> ManageCatalogUseCase<R>
where
    R: ResearchRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List all catalog entries without children
    pub async fn list(&self) -> ResearchResult<Vec<ResearchEntry>> {
        self.repo.list_entries().await
    }

    /// Create a catalog entry; the current stage starts unset
    pub async fn create(&self, input: CreateEntryInput) -> ResearchResult<ResearchEntry> {
        let title = ResearchTitle::new(input.title)
            .map_err(|e| ResearchError::Validation(e.message().to_string()))?;
        let total_stages = StageCount::new(input.total_stages)
            .map_err(|e| ResearchError::Validation(e.message().to_string()))?;

        let entry = self.repo.create_entry(&title, total_stages).await?;

        tracing::info!(
            research_id = %entry.id,
            title = %entry.title,
            total_stages = entry.total_stages,
            "Field research created"
        );

        Ok(entry)
    }

    /// Delete a catalog entry; missions and rewards cascade with it
    pub async fn delete(&self, research_id: ResearchId) -> ResearchResult<()> {
        let deleted = self.repo.delete_entry(research_id).await?;

        if deleted == 0 {
            tracing::debug!(research_id = %research_id, "Delete matched no entry");
        } else {
            tracing::info!(research_id = %research_id, "Field research deleted");
        }

        Ok(())
    }
}
