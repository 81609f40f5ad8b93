//! Progression ordering: turn the curated set into a teaching sequence.
//!
//! Quick wins lead immediate goals, foundations come before everything
//! else, reinforcement waits for two new concepts, and curated
//! prerequisite pairs always teach the prerequisite first.

use std::cmp::Ordering;

use lattice_core::config::CurationConfig;
use lattice_core::goal::GoalContext;
use lattice_core::models::LearningStatus;

use crate::curation::Selected;

/// Final ordering of the curated selection. The position in the returned
/// vec, not selection order, becomes the roadmap `order` field.
pub fn order_progression(
    selected: Vec<Selected>,
    ctx: &GoalContext,
    config: &CurationConfig,
) -> Vec<Selected> {
    let mut ordered = selected;

    ordered.sort_by(|a, b| compare(a, b, ctx, config));
    let ordered = defer_reinforcement(ordered);
    apply_prerequisites(ordered, config)
}

fn compare(a: &Selected, b: &Selected, ctx: &GoalContext, config: &CurationConfig) -> Ordering {
    if ctx.immediate {
        let a_quick = config.is_quick_win(&a.candidate.concept.title);
        let b_quick = config.is_quick_win(&b.candidate.concept.title);
        if a_quick != b_quick {
            return if a_quick { Ordering::Less } else { Ordering::Greater };
        }
    }

    if a.foundational != b.foundational {
        return if a.foundational { Ordering::Less } else { Ordering::Greater };
    }

    b.adjusted_score
        .partial_cmp(&a.adjusted_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.candidate
                .final_score
                .partial_cmp(&a.candidate.final_score)
                .unwrap_or(Ordering::Equal)
        })
}

fn status(s: &Selected) -> LearningStatus {
    if s.candidate.is_learned {
        LearningStatus::Reinforcement
    } else {
        LearningStatus::New
    }
}

/// Hold reinforcement concepts back until two new concepts have been
/// emitted, then interleave one held concept after each further slot.
fn defer_reinforcement(input: Vec<Selected>) -> Vec<Selected> {
    let mut output: Vec<Selected> = Vec::with_capacity(input.len());
    let mut held: Vec<Selected> = Vec::new();
    let mut new_emitted = 0usize;

    for item in input {
        if status(&item) == LearningStatus::Reinforcement && new_emitted < 2 {
            held.push(item);
            continue;
        }
        if status(&item) == LearningStatus::New {
            new_emitted += 1;
        }
        output.push(item);
        if new_emitted >= 2 && !held.is_empty() {
            output.push(held.remove(0));
        }
    }
    output.extend(held);
    output
}

/// Force every curated (prerequisite, dependent) pair into teaching order.
fn apply_prerequisites(mut ordered: Vec<Selected>, config: &CurationConfig) -> Vec<Selected> {
    // One pass per pair bounds the loop; pairs are few and acyclic.
    for _ in 0..config.prerequisites.len() {
        let mut moved = false;
        for (pre, post) in &config.prerequisites {
            let pre_pos = ordered
                .iter()
                .position(|s| CurationConfig::titles_match(pre, &s.candidate.concept.title));
            let post_pos = ordered
                .iter()
                .position(|s| CurationConfig::titles_match(post, &s.candidate.concept.title));
            if let (Some(i), Some(j)) = (pre_pos, post_pos) {
                if i > j {
                    let item = ordered.remove(i);
                    ordered.insert(j, item);
                    moved = true;
                }
            }
        }
        if !moved {
            break;
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::concept::{Concept, ConceptType, Rating};
    use lattice_core::models::{ScoreBreakdown, ScoredCandidate};

    fn pick(title: &str, score: f64, foundational: bool, learned: bool) -> Selected {
        Selected {
            candidate: ScoredCandidate {
                concept: Concept {
                    id: title.to_lowercase().replace(' ', "-"),
                    title: title.into(),
                    category: "decision-making".into(),
                    concept_type: ConceptType::PrimaryModel,
                    summary: String::new(),
                    description: String::new(),
                    application: String::new(),
                    keywords: Vec::new(),
                    embedding: vec![0.0; 4],
                    examples: Vec::new(),
                },
                similarity: score,
                breakdown: ScoreBreakdown::default(),
                final_score: score,
                is_learned: learned,
                days_since_last_use: learned.then_some(7),
                last_rating: learned.then(|| Rating::new(4)),
            },
            adjusted_score: score,
            foundational,
        }
    }

    fn titles(ordered: &[Selected]) -> Vec<&str> {
        ordered.iter().map(|s| s.candidate.concept.title.as_str()).collect()
    }

    #[test]
    fn foundational_sorts_first() {
        let ordered = order_progression(
            vec![
                pick("High Scorer", 0.9, false, false),
                pick("Foundation", 0.5, true, false),
            ],
            &GoalContext::default(),
            &CurationConfig::default(),
        );
        assert_eq!(titles(&ordered)[0], "Foundation");
    }

    #[test]
    fn quick_wins_lead_immediate_goals() {
        let ctx = GoalContext {
            immediate: true,
            ..GoalContext::default()
        };
        let ordered = order_progression(
            vec![
                pick("Foundation", 0.9, true, false),
                pick("Pareto Principle", 0.4, false, false),
            ],
            &ctx,
            &CurationConfig::default(),
        );
        assert_eq!(titles(&ordered)[0], "Pareto Principle");
    }

    #[test]
    fn reinforcement_waits_for_two_new_concepts() {
        let ordered = order_progression(
            vec![
                pick("Learned", 0.95, false, true),
                pick("New A", 0.8, false, false),
                pick("New B", 0.7, false, false),
                pick("New C", 0.6, false, false),
            ],
            &GoalContext::default(),
            &CurationConfig::default(),
        );
        let names = titles(&ordered);
        let learned_pos = names.iter().position(|t| *t == "Learned").unwrap();
        let new_before = names[..learned_pos]
            .iter()
            .filter(|t| t.starts_with("New"))
            .count();
        assert!(new_before >= 2, "expected 2 new before reinforcement, got {new_before}");
    }

    #[test]
    fn prerequisite_pairs_force_order() {
        let ordered = order_progression(
            vec![
                pick("Second-Order Thinking", 0.9, false, false),
                pick("First Principles Thinking", 0.3, false, false),
            ],
            &GoalContext::default(),
            &CurationConfig::default(),
        );
        let names = titles(&ordered);
        let pre = names.iter().position(|t| *t == "First Principles Thinking").unwrap();
        let post = names.iter().position(|t| *t == "Second-Order Thinking").unwrap();
        assert!(pre < post);
    }

    #[test]
    fn ties_fall_back_to_raw_score() {
        let mut a = pick("A", 0.8, false, false);
        let mut b = pick("B", 0.8, false, false);
        a.candidate.final_score = 0.6;
        b.candidate.final_score = 0.7;
        let ordered = order_progression(
            vec![a, b],
            &GoalContext::default(),
            &CurationConfig::default(),
        );
        assert_eq!(titles(&ordered)[0], "B");
    }
}
