//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{AccountId, MissionId, ResearchId, RewardId};

use crate::domain::entities::{ProgressRow, ResearchEntry};
use crate::domain::value_objects::{ResearchTitle, StageCount};
use crate::error::ResearchResult;

/// Research repository trait
///
/// Toggle methods return the number of rows affected (0 or 1); callers
/// treat both outcomes as success.
#[trait_variant::make(ResearchRepository: Send)]
pub trait LocalResearchRepository {
    /// Fetch the flat double-left-join row set for the aggregation.
    ///
    /// Catalog entries are global; the caller's account id scopes the
    /// request, not the join, which is entry-to-children only.
    async fn fetch_progress_rows(&self, account_id: AccountId) -> ResearchResult<Vec<ProgressRow>>;

    /// Atomically negate a mission's completed flag, scoped to its entry
    async fn toggle_mission(
        &self,
        research_id: ResearchId,
        mission_id: MissionId,
    ) -> ResearchResult<u64>;

    /// Atomically negate a reward's obtained flag, scoped to its entry
    async fn toggle_reward(
        &self,
        research_id: ResearchId,
        reward_id: RewardId,
    ) -> ResearchResult<u64>;

    /// List all catalog entries, no children
    async fn list_entries(&self) -> ResearchResult<Vec<ResearchEntry>>;

    /// Insert a catalog entry and return the stored row
    async fn create_entry(
        &self,
        title: &ResearchTitle,
        total_stages: StageCount,
    ) -> ResearchResult<ResearchEntry>;

    /// Delete a catalog entry; its missions and rewards cascade
    async fn delete_entry(&self, research_id: ResearchId) -> ResearchResult<u64>;
}
