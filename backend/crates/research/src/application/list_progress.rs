//! List Progress Use Case
//!
//! Assembles the nested per-entry progress view from the flat join rows.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entities::ResearchProgress;
use crate::domain::repository::ResearchRepository;
use crate::domain::services::collapse_progress;
use crate::error::ResearchResult;

/// List progress use case
pub struct ListProgressUseCase<R>
where
    R: ResearchRepository,
{
    repo: Arc<R>,
}

impl<R> ListProgressUseCase<R>
where
    R: ResearchRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, account_id: AccountId) -> ResearchResult<Vec<ResearchProgress>> {
        let rows = self.repo.fetch_progress_rows(account_id).await?;
        let entries = collapse_progress(rows);

        tracing::debug!(
            account_id = %account_id,
            entries = entries.len(),
            "Assembled research progress view"
        );

        Ok(entries)
    }
}
