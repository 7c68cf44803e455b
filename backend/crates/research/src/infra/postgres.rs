//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, MissionId, ResearchId, RewardId};
use sqlx::PgPool;

use crate::domain::entities::{ProgressRow, ResearchEntry};
use crate::domain::repository::ResearchRepository;
use crate::domain::value_objects::{ResearchTitle, StageCount};
use crate::error::ResearchResult;

/// PostgreSQL-backed research repository
#[derive(Clone)]
pub struct PgResearchRepository {
    pool: PgPool,
}

impl PgResearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ResearchRepository for PgResearchRepository {
    async fn fetch_progress_rows(&self, account_id: AccountId) -> ResearchResult<Vec<ProgressRow>> {
        // One round trip: entry columns repeat per (mission, reward) pairing.
        // ORDER BY fixes the first-seen order the collapse preserves.
        let rows = sqlx::query_as::<_, ProgressJoinRow>(
            r#"
            SELECT
                fr.field_research_id,
                fr.title,
                fr.current_stage,
                fr.total_stages,
                m.mission_id,
                m.description AS mission_description,
                m.completed AS mission_completed,
                r.reward_id,
                r.description AS reward_description,
                r.obtained AS reward_obtained
            FROM field_researches fr
            LEFT JOIN missions m ON m.field_research_id = fr.field_research_id
            LEFT JOIN rewards r ON r.field_research_id = fr.field_research_id
            ORDER BY fr.field_research_id, m.mission_id, r.reward_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            account_id = %account_id,
            rows = rows.len(),
            "Fetched progress rows"
        );

        Ok(rows.into_iter().map(ProgressJoinRow::into_progress_row).collect())
    }

    async fn toggle_mission(
        &self,
        research_id: ResearchId,
        mission_id: MissionId,
    ) -> ResearchResult<u64> {
        // Single atomic negation; no read-modify-write window
        let affected = sqlx::query(
            r#"
            UPDATE missions
            SET completed = NOT completed
            WHERE mission_id = $1 AND field_research_id = $2
            "#,
        )
        .bind(mission_id.as_i64())
        .bind(research_id.as_i64())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected)
    }

    async fn toggle_reward(
        &self,
        research_id: ResearchId,
        reward_id: RewardId,
    ) -> ResearchResult<u64> {
        let affected = sqlx::query(
            r#"
            UPDATE rewards
            SET obtained = NOT obtained
            WHERE reward_id = $1 AND field_research_id = $2
            "#,
        )
        .bind(reward_id.as_i64())
        .bind(research_id.as_i64())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected)
    }

    async fn list_entries(&self) -> ResearchResult<Vec<ResearchEntry>> {
        let rows = sqlx::query_as::<_, ResearchEntryRow>(
            r#"
            SELECT
                field_research_id,
                title,
                current_stage,
                total_stages,
                created_at
            FROM field_researches
            ORDER BY field_research_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ResearchEntryRow::into_entry).collect())
    }

    async fn create_entry(
        &self,
        title: &ResearchTitle,
        total_stages: StageCount,
    ) -> ResearchResult<ResearchEntry> {
        let row = sqlx::query_as::<_, ResearchEntryRow>(
            r#"
            INSERT INTO field_researches (
                title,
                total_stages
            ) VALUES ($1, $2)
            RETURNING
                field_research_id,
                title,
                current_stage,
                total_stages,
                created_at
            "#,
        )
        .bind(title.as_str())
        .bind(total_stages.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_entry())
    }

    async fn delete_entry(&self, research_id: ResearchId) -> ResearchResult<u64> {
        // Missions and rewards go with the entry via ON DELETE CASCADE
        let deleted = sqlx::query(
            r#"
            DELETE FROM field_researches
            WHERE field_research_id = $1
            "#,
        )
        .bind(research_id.as_i64())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProgressJoinRow {
    field_research_id: i64,
    title: String,
    current_stage: Option<i32>,
    total_stages: i32,
    mission_id: Option<i64>,
    mission_description: Option<String>,
    mission_completed: Option<bool>,
    reward_id: Option<i64>,
    reward_description: Option<String>,
    reward_obtained: Option<bool>,
}

impl ProgressJoinRow {
    fn into_progress_row(self) -> ProgressRow {
        ProgressRow {
            research_id: self.field_research_id,
            title: self.title,
            current_stage: self.current_stage,
            total_stages: self.total_stages,
            mission_id: self.mission_id,
            mission_description: self.mission_description,
            mission_completed: self.mission_completed,
            reward_id: self.reward_id,
            reward_description: self.reward_description,
            reward_obtained: self.reward_obtained,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ResearchEntryRow {
    field_research_id: i64,
    title: String,
    current_stage: Option<i32>,
    total_stages: i32,
    created_at: DateTime<Utc>,
}

impl ResearchEntryRow {
    fn into_entry(self) -> ResearchEntry {
        ResearchEntry {
            id: ResearchId::from_i64(self.field_research_id),
            title: self.title,
            current_stage: self.current_stage,
            total_stages: self.total_stages,
            created_at: self.created_at,
        }
    }
}
