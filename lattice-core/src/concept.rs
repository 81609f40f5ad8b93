//! Concept reference data and per-user learning records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of learnable concept types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptType {
    PrimaryModel,
    Bias,
    Fallacy,
}

impl ConceptType {
    /// Fixed structural-variety constant used by the scorer.
    /// Primary models anchor a roadmap, so they carry the highest weight.
    pub fn diversity_weight(self) -> f64 {
        match self {
            Self::PrimaryModel => 0.6,
            Self::Bias => 0.5,
            Self::Fallacy => 0.4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PrimaryModel => "primary model",
            Self::Bias => "bias",
            Self::Fallacy => "fallacy",
        }
    }
}

/// A worked example attached to a concept: a target goal phrase plus either
/// an if/then implementation intention or a spotting mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalExample {
    pub goal: String,
    #[serde(default)]
    pub if_then: Option<String>,
    #[serde(default)]
    pub spotting_mission: Option<String>,
}

/// A unit of learnable content. Immutable reference data owned by the
/// corpus collaborator; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub title: String,
    /// Free-text category label, e.g. "decision-making".
    pub category: String,
    pub concept_type: ConceptType,
    pub summary: String,
    pub description: String,
    /// Guidance on applying the concept day to day.
    pub application: String,
    pub keywords: Vec<String>,
    /// Fixed-length embedding vector owned by the corpus.
    pub embedding: Vec<f32>,
    #[serde(default)]
    pub examples: Vec<GoalExample>,
}

/// Identity equality: a concept's identity is its id, not its content.
impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Effectiveness rating clamped to 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    /// Ratings at or above this mark a concept as mastered.
    pub const EFFECTIVE: u8 = 4;

    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Normalized rating in [0.2, 1.0].
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 5.0
    }

    pub fn is_effective(self) -> bool {
        self.0 >= Self::EFFECTIVE
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(3)
    }
}

/// Per-user record of a completed concept. Created on completion, updated
/// on each new reflection, never deleted by this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedConcept {
    pub concept_id: String,
    pub completed_at: DateTime<Utc>,
    /// Most recent reflection on this concept.
    pub last_reflected_at: DateTime<Utc>,
    pub rating: Rating,
    pub application_count: u32,
}

impl LearnedConcept {
    /// Whole days elapsed since the last reflection, floored at zero.
    pub fn days_since_last_use(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_reflected_at).num_days().max(0)
    }
}
