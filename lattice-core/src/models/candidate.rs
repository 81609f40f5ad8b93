//! Request-scoped candidate records produced by retrieval.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::concept::{Concept, Rating};

/// A raw vector-search hit: a concept plus its similarity to the goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub concept: Concept,
    /// Cosine similarity in [0, 1] as returned by the corpus collaborator.
    pub similarity: f64,
}

/// A search hit annotated with the user's learning history.
///
/// `days_since_last_use` is computed per request after any cache fetch, so
/// cached lists never carry stale day counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedCandidate {
    pub concept: Concept,
    pub similarity: f64,
    pub is_learned: bool,
    pub last_reflected_at: Option<DateTime<Utc>>,
    pub last_rating: Option<Rating>,
    pub days_since_last_use: Option<i64>,
}

impl AnnotatedCandidate {
    /// Annotate a hit as unlearned.
    pub fn new_hit(hit: SearchHit) -> Self {
        Self {
            concept: hit.concept,
            similarity: hit.similarity,
            is_learned: false,
            last_reflected_at: None,
            last_rating: None,
            days_since_last_use: None,
        }
    }

    /// Annotate a hit with a learned-concept record.
    pub fn learned_hit(hit: SearchHit, last_reflected_at: DateTime<Utc>, rating: Rating) -> Self {
        Self {
            concept: hit.concept,
            similarity: hit.similarity,
            is_learned: true,
            last_reflected_at: Some(last_reflected_at),
            last_rating: Some(rating),
            days_since_last_use: None,
        }
    }
}
