//! Synergy bonus: how much a candidate complements the current selection.
//!
//! Recomputed as the selection grows; capped at 0.3 so synergy can nudge
//! but never dominate the relevance score.

use lattice_core::concept::ConceptType;
use lattice_core::config::CurationConfig;
use lattice_core::constants::SYNERGY_CAP;
use lattice_core::goal::GoalContext;
use lattice_core::models::ScoredCandidate;

use super::Selected;

const PAIR_BONUS: f64 = 0.1;
const CATEGORY_OVERLAP_WEIGHT: f64 = 0.05;
const NEW_TYPE_BONUS: f64 = 0.1;
const FOUNDATIONAL_BONUS: f64 = 0.05;
const LEARNED_PAIRING_BONUS: f64 = 0.08;
const TYPE_DOMINANCE: f64 = 0.6;

/// Synergy of `candidate` relative to the current selection.
pub fn bonus(
    candidate: &ScoredCandidate,
    selected: &[Selected],
    ctx: &GoalContext,
    config: &CurationConfig,
) -> f64 {
    let mut bonus = 0.0;

    bonus += pair_affinity(candidate, selected, config);
    bonus += category_overlap(candidate, selected, config);
    bonus += new_type_bonus(candidate, selected);

    if selected.len() < 3 && config.is_foundational(&candidate.concept.title, ctx) {
        bonus += FOUNDATIONAL_BONUS;
    }

    if learned_new_pairing(candidate, selected, config) {
        bonus += LEARNED_PAIRING_BONUS;
    }

    bonus.min(SYNERGY_CAP)
}

/// +0.1 per already-selected partner from the curated pair table.
fn pair_affinity(candidate: &ScoredCandidate, selected: &[Selected], config: &CurationConfig) -> f64 {
    let title = &candidate.concept.title;
    let mut total = 0.0;
    for (a, b) in &config.concept_pairs {
        let partner = if CurationConfig::titles_match(a, title) {
            b
        } else if CurationConfig::titles_match(b, title) {
            a
        } else {
            continue;
        };
        if selected
            .iter()
            .any(|s| CurationConfig::titles_match(partner, &s.candidate.concept.title))
        {
            total += PAIR_BONUS;
        }
    }
    total
}

/// Category-affinity overlap with the selection, scaled by the fraction of
/// selected concepts in an adjacent category.
fn category_overlap(
    candidate: &ScoredCandidate,
    selected: &[Selected],
    config: &CurationConfig,
) -> f64 {
    if selected.is_empty() {
        return 0.0;
    }
    let Some(related) = config.category_affinities.get(&candidate.concept.category) else {
        return 0.0;
    };
    let overlap = selected
        .iter()
        .filter(|s| related.iter().any(|c| c == &s.candidate.concept.category))
        .count();
    (overlap as f64 / selected.len() as f64) * CATEGORY_OVERLAP_WEIGHT
}

/// +0.1 for breaking up a selection that is >60% one type.
fn new_type_bonus(candidate: &ScoredCandidate, selected: &[Selected]) -> f64 {
    if selected.len() < 2 {
        return 0.0;
    }
    let types = [ConceptType::PrimaryModel, ConceptType::Bias, ConceptType::Fallacy];
    for t in types {
        let count = selected
            .iter()
            .filter(|s| s.candidate.concept.concept_type == t)
            .count();
        let fraction = count as f64 / selected.len() as f64;
        if fraction > TYPE_DOMINANCE && candidate.concept.concept_type != t {
            return NEW_TYPE_BONUS;
        }
    }
    0.0
}

/// A learned concept paired with a related new one (or vice versa): same
/// category, or thematically related by the word-group heuristic.
fn learned_new_pairing(
    candidate: &ScoredCandidate,
    selected: &[Selected],
    config: &CurationConfig,
) -> bool {
    selected.iter().any(|s| {
        s.candidate.is_learned != candidate.is_learned
            && (s.candidate.concept.category == candidate.concept.category
                || config.share_word_group(&s.candidate.concept.title, &candidate.concept.title))
    })
}
