//! Fully-typed scored candidates.
//!
//! Every sub-score is a named field from creation; nothing is attached to a
//! candidate after the fact.

use serde::{Deserialize, Serialize};

use crate::concept::{Concept, Rating};

/// The six scoring signals, each in [0, 1] (bonuses capped lower).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub semantic_similarity: f64,
    pub category_alignment: f64,
    pub type_diversity: f64,
    pub goal_example_match: f64,
    /// Additive, unweighted: 0.15 for unlearned concepts.
    pub novelty: f64,
    /// Additive, unweighted: up to 0.05 near a spaced-repetition interval.
    pub spaced_repetition: f64,
}

/// A concept plus its composite relevance score for one generation request.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub concept: Concept,
    /// Raw similarity from vector search.
    pub similarity: f64,
    pub breakdown: ScoreBreakdown,
    pub final_score: f64,
    pub is_learned: bool,
    pub days_since_last_use: Option<i64>,
    pub last_rating: Option<Rating>,
}
