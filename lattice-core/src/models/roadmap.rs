//! The output artifact: an ordered roadmap of learning steps.

use serde::{Deserialize, Serialize};

use crate::concept::{ConceptType, Rating};

/// Whether a step introduces new material or reinforces learned material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStatus {
    New,
    Reinforcement,
}

/// Context attached to reinforcement steps only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementContext {
    pub days_since_last_use: i64,
    pub last_rating: Rating,
    /// Named spaced interval when the timing lines up, e.g. `"7-day review"`.
    pub spaced_interval: Option<String>,
}

/// One step of a roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    /// 1-based position; contiguous across the roadmap.
    pub order: u32,
    pub concept_id: String,
    pub title: String,
    pub concept_type: ConceptType,
    pub category: String,
    /// The relevance score this step was selected with.
    pub score: f64,
    pub learning_status: LearningStatus,
    pub reinforcement_context: Option<ReinforcementContext>,
    pub rationale: String,
    pub suggested_focus: String,
}

/// How many steps are new vs. reinforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoadmapSummary {
    pub new_count: usize,
    pub reinforcement_count: usize,
    pub total: usize,
}

/// A finished, ordered roadmap.
///
/// Invariant: step orders are exactly `1..=N` with no gaps or repeats, and
/// no concept id appears twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    /// Goal description, possibly rewritten by validation or prefixed by
    /// the synthesis path.
    pub goal_description: String,
    pub steps: Vec<RoadmapStep>,
    pub summary: RoadmapSummary,
    pub estimated_duration: String,
}

impl Roadmap {
    /// Recompute the summary from the steps.
    pub fn summarize(steps: &[RoadmapStep]) -> RoadmapSummary {
        let reinforcement_count = steps
            .iter()
            .filter(|s| s.learning_status == LearningStatus::Reinforcement)
            .count();
        RoadmapSummary {
            new_count: steps.len() - reinforcement_count,
            reinforcement_count,
            total: steps.len(),
        }
    }
}

/// Human-readable duration estimate for a roadmap.
pub fn estimate_duration(step_count: usize, weeks_per_step: u32) -> String {
    let weeks = step_count as u32 * weeks_per_step;
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{weeks} weeks")
    }
}
