//! Multi-factor relevance scorer (6 signals).
//!
//! Weighted: semantic similarity, category alignment, type diversity,
//! goal-example match. Additive: novelty, spaced repetition.

pub mod category;
pub mod example_match;

use lattice_core::concept::Rating;
use lattice_core::config::CurationConfig;
use lattice_core::constants::{NOVELTY_BONUS, SPACED_REPETITION_BONUS};
use lattice_core::goal::GoalContext;
use lattice_core::models::{AnnotatedCandidate, ScoreBreakdown, ScoredCandidate};
use lattice_core::spaced;

/// Weights for the four weighted signals. Sum ≤ 1; the novelty and
/// spaced-repetition bonuses are added on top unweighted.
#[derive(Debug, Clone)]
pub struct ScorerWeights {
    pub semantic_similarity: f64,
    pub category_alignment: f64,
    pub type_diversity: f64,
    pub goal_example_match: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            semantic_similarity: 0.35,
            category_alignment: 0.15,
            type_diversity: 0.15,
            goal_example_match: 0.15,
        }
    }
}

/// Score annotated candidates, sort by composite score descending, and cap
/// the list at `limit`.
pub fn score(
    candidates: &[AnnotatedCandidate],
    goal: &str,
    ctx: &GoalContext,
    config: &CurationConfig,
    weights: &ScorerWeights,
    limit: usize,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|c| score_one(c, goal, ctx, config, weights))
        .collect();

    // Stable sort: equal scores keep original candidate order.
    scored.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);
    scored
}

fn score_one(
    candidate: &AnnotatedCandidate,
    goal: &str,
    ctx: &GoalContext,
    config: &CurationConfig,
    weights: &ScorerWeights,
) -> ScoredCandidate {
    let concept = &candidate.concept;

    // Signal 1: similarity from vector search, used as-is.
    let semantic_similarity = candidate.similarity.clamp(0.0, 1.0);

    // Signal 2: category alignment with the goal classification.
    let category_alignment = category::alignment(&concept.category, ctx, config);

    // Signal 3: fixed structural-variety constant per type.
    let type_diversity = concept.concept_type.diversity_weight();

    // Signal 4: conservative bonus from example-phrase overlap. Semantic
    // similarity already captures example text; this stays secondary.
    let goal_example_match = example_match::bonus(goal, &concept.examples, config);

    // Signal 5 (additive): reward unseen concepts.
    let novelty = if candidate.is_learned { 0.0 } else { NOVELTY_BONUS };

    // Signal 6 (additive): reward reviews that land on a spaced interval.
    let spaced_repetition = spaced_repetition_score(
        candidate.days_since_last_use,
        candidate.last_rating,
        candidate.is_learned,
    );

    let breakdown = ScoreBreakdown {
        semantic_similarity,
        category_alignment,
        type_diversity,
        goal_example_match,
        novelty,
        spaced_repetition,
    };

    let final_score = weights.semantic_similarity * semantic_similarity
        + weights.category_alignment * category_alignment
        + weights.type_diversity * type_diversity
        + weights.goal_example_match * goal_example_match
        + novelty
        + spaced_repetition;

    ScoredCandidate {
        concept: concept.clone(),
        similarity: candidate.similarity,
        breakdown,
        final_score,
        is_learned: candidate.is_learned,
        days_since_last_use: candidate.days_since_last_use,
        last_rating: candidate.last_rating,
    }
}

/// `0.05 × rating/5` when the review lands within ±20% of a canonical
/// spaced interval, 0 otherwise. Learned concepts only.
fn spaced_repetition_score(days: Option<i64>, rating: Option<Rating>, is_learned: bool) -> f64 {
    if !is_learned {
        return 0.0;
    }
    let (Some(days), Some(rating)) = (days, rating) else {
        return 0.0;
    };
    match spaced::matched_interval(days) {
        Some(_) => SPACED_REPETITION_BONUS * rating.fraction(),
        None => 0.0,
    }
}
