//! Toggle Progress Use Case
//!
//! Applies parent-scoped boolean negations to mission and reward rows.
//! A toggle that matches no row is a success with no effect; the caller
//! cannot distinguish the two outcomes from the response.

use std::sync::Arc;

use kernel::id::{MissionId, ResearchId, RewardId};

use crate::domain::repository::ResearchRepository;
use crate::error::ResearchResult;

/// Toggle progress use case
pub struct ToggleProgressUseCase<R>
where
    R: ResearchRepository,
{
    repo: Arc<R>,
}

impl<R> ToggleProgressUseCase<R>
where
    R: ResearchRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Negate the completed flag of one mission belonging to the entry
    pub async fn toggle_mission(
        &self,
        research_id: ResearchId,
        mission_id: MissionId,
    ) -> ResearchResult<()> {
        let affected = self.repo.toggle_mission(research_id, mission_id).await?;

        if affected == 0 {
            tracing::debug!(
                research_id = %research_id,
                mission_id = %mission_id,
                "Mission toggle matched no row"
            );
        }

        Ok(())
    }

    /// Negate the obtained flag of one reward belonging to the entry
    pub async fn toggle_reward(
        &self,
        research_id: ResearchId,
        reward_id: RewardId,
    ) -> ResearchResult<()> {
        let affected = self.repo.toggle_reward(research_id, reward_id).await?;

        if affected == 0 {
            tracing::debug!(
                research_id = %research_id,
                reward_id = %reward_id,
                "Reward toggle matched no row"
            );
        }

        Ok(())
    }
}
