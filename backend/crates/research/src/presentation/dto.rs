//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::{MissionProgress, ResearchEntry, ResearchProgress, RewardProgress};

// ============================================================================
// Progress view
// ============================================================================

/// One nested research entry in the progress view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchProgressResponse {
    pub id: i64,
    pub title: String,
    pub current_stage: Option<i32>,
    pub total_stages: i32,
    pub missions: Vec<MissionProgressDto>,
    pub rewards: Vec<RewardProgressDto>,
}

/// Mission nested under a progress entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionProgressDto {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

/// Reward nested under a progress entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardProgressDto {
    pub id: i64,
    pub description: String,
    pub obtained: bool,
}

impl From<ResearchProgress> for ResearchProgressResponse {
    fn from(progress: ResearchProgress) -> Self {
        Self {
            id: progress.id.as_i64(),
            title: progress.title,
            current_stage: progress.current_stage,
            total_stages: progress.total_stages,
            missions: progress.missions.into_iter().map(Into::into).collect(),
            rewards: progress.rewards.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MissionProgress> for MissionProgressDto {
    fn from(mission: MissionProgress) -> Self {
        Self {
            id: mission.id.as_i64(),
            description: mission.description,
            completed: mission.completed,
        }
    }
}

impl From<RewardProgress> for RewardProgressDto {
    fn from(reward: RewardProgress) -> Self {
        Self {
            id: reward.id.as_i64(),
            description: reward.description,
            obtained: reward.obtained,
        }
    }
}

// ============================================================================
// Catalog administration
// ============================================================================

/// Catalog entry as listed/echoed by admin routes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntryResponse {
    pub id: i64,
    pub title: String,
    pub total_stages: i32,
}

impl From<ResearchEntry> for CatalogEntryResponse {
    fn from(entry: ResearchEntry) -> Self {
        Self {
            id: entry.id.as_i64(),
            title: entry.title,
            total_stages: entry.total_stages,
        }
    }
}

/// Create entry request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub title: String,
    pub total_stages: i32,
}
