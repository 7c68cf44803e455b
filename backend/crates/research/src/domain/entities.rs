//! Domain Entities
//!
//! Core entities for the field research domain, plus the flat and nested
//! shapes of the progress aggregation.

use chrono::{DateTime, Utc};
use kernel::id::{MissionId, ResearchId, RewardId};

/// Field research entry - an admin-managed catalog task with ordered stages
///
/// `current_stage` is informational metadata; it is not derived from mission
/// completion and the system never auto-advances it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchEntry {
    pub id: ResearchId,
    pub title: String,
    pub current_stage: Option<i32>,
    pub total_stages: i32,
    pub created_at: DateTime<Utc>,
}

/// Mission - a checklist sub-item of a research entry
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub id: MissionId,
    pub research_id: ResearchId,
    pub description: String,
    pub completed: bool,
}

/// Reward - a claim sub-item of a research entry
#[derive(Debug, Clone, PartialEq)]
pub struct Reward {
    pub id: RewardId,
    pub research_id: ResearchId,
    pub description: String,
    pub obtained: bool,
}

// ============================================================================
// Aggregation shapes
// ============================================================================

/// One flat row of the double left join
///
/// Entry columns repeat once per (mission, reward) pairing the two left
/// joins produce; a row with no mission carries null mission columns, and
/// symmetrically for rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRow {
    pub research_id: i64,
    pub title: String,
    pub current_stage: Option<i32>,
    pub total_stages: i32,
    pub mission_id: Option<i64>,
    pub mission_description: Option<String>,
    pub mission_completed: Option<bool>,
    pub reward_id: Option<i64>,
    pub reward_description: Option<String>,
    pub reward_obtained: Option<bool>,
}

/// Mission as it appears nested in the progress view
#[derive(Debug, Clone, PartialEq)]
pub struct MissionProgress {
    pub id: MissionId,
    pub description: String,
    pub completed: bool,
}

/// Reward as it appears nested in the progress view
#[derive(Debug, Clone, PartialEq)]
pub struct RewardProgress {
    pub id: RewardId,
    pub description: String,
    pub obtained: bool,
}

/// Nested per-entry progress record returned by the aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchProgress {
    pub id: ResearchId,
    pub title: String,
    pub current_stage: Option<i32>,
    pub total_stages: i32,
    pub missions: Vec<MissionProgress>,
    pub rewards: Vec<RewardProgress>,
}
