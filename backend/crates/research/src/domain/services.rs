//! Domain Services
//!
//! Pure functions over domain data; no storage access.

use std::collections::HashMap;

use kernel::id::{MissionId, ResearchId, RewardId};

use crate::domain::entities::{MissionProgress, ProgressRow, ResearchProgress, RewardProgress};

/// Collapse the flat double-left-join row set into nested per-entry records.
///
/// The two independent left joins produce a Cartesian cross of mission rows
/// x reward rows per entry, so every mission repeats once per reward and
/// vice versa. Children are therefore appended only once per distinct child
/// id per entry; dropping the dedup would inflate a 2-mission/3-reward entry
/// to 6 of each.
///
/// Entries keep first-seen order, as do missions/rewards within each entry.
/// An empty row set yields an empty result.
pub fn collapse_progress(rows: Vec<ProgressRow>) -> Vec<ResearchProgress> {
    let mut order: Vec<i64> = Vec::new();
    let mut by_id: HashMap<i64, ResearchProgress> = HashMap::new();

    for row in rows {
        let entry = by_id.entry(row.research_id).or_insert_with(|| {
            order.push(row.research_id);
            ResearchProgress {
                id: ResearchId::from_i64(row.research_id),
                title: row.title.clone(),
                current_stage: row.current_stage,
                total_stages: row.total_stages,
                missions: Vec::new(),
                rewards: Vec::new(),
            }
        });

        if let (Some(id), Some(description), Some(completed)) = (
            row.mission_id,
            row.mission_description,
            row.mission_completed,
        ) {
            let id = MissionId::from_i64(id);
            if !entry.missions.iter().any(|m| m.id == id) {
                entry.missions.push(MissionProgress {
                    id,
                    description,
                    completed,
                });
            }
        }

        if let (Some(id), Some(description), Some(obtained)) = (
            row.reward_id,
            row.reward_description,
            row.reward_obtained,
        ) {
            let id = RewardId::from_i64(id);
            if !entry.rewards.iter().any(|r| r.id == id) {
                entry.rewards.push(RewardProgress {
                    id,
                    description,
                    obtained,
                });
            }
        }
    }

    order.into_iter().filter_map(|id| by_id.remove(&id)).collect()
}
