//! Greedy, order-sensitive selection.
//!
//! Six passes: foundational seeding, priority-category fill, best-score
//! fill, floor backfill, then type-balance enforcement. Deterministic: ties
//! always resolve to the earliest original candidate.

use tracing::debug;

use lattice_core::concept::ConceptType;
use lattice_core::config::CurationConfig;
use lattice_core::constants::{
    CATEGORY_CAP, CATEGORY_CAP_REINFORCEMENT, MIN_BIAS_OR_FALLACY, MIN_PRIMARY_MODELS,
};
use lattice_core::goal::GoalContext;
use lattice_core::models::ScoredCandidate;

use super::{synergy, Selected};

/// Select between `min` and `max` concepts from the scored candidates.
///
/// Returns fewer than `min` only when the candidate pool itself is smaller;
/// callers enforce their own floor before scoring.
pub fn select(
    scored: Vec<ScoredCandidate>,
    ctx: &GoalContext,
    config: &CurationConfig,
    min: usize,
    max: usize,
) -> Vec<Selected> {
    let mut remaining = scored;
    let mut selected: Vec<Selected> = Vec::new();

    // Pass 1+2: seed foundational concepts, best synergy-adjusted first.
    while selected.len() < max {
        let Some(i) = pick_best(&remaining, &selected, ctx, config, |c| {
            config.is_foundational(&c.concept.title, ctx)
        }) else {
            break;
        };
        take(&mut remaining, &mut selected, i, ctx, config);
    }
    debug!(seeded = selected.len(), "foundational seeding complete");

    // Pass 3: fill by the goal-derived priority-category order.
    'categories: for category in config.priority_categories(ctx) {
        while selected.len() < max {
            let found = pick_best(&remaining, &selected, ctx, config, |c| {
                c.concept.category == category && under_category_cap(&selected, c)
            });
            match found {
                Some(i) => take(&mut remaining, &mut selected, i, ctx, config),
                None => continue 'categories,
            }
        }
        break 'categories;
    }

    // Pass 4: fill remaining slots with the best unselected, same caps.
    while selected.len() < max {
        let Some(i) = pick_best(&remaining, &selected, ctx, config, |c| {
            under_category_cap(&selected, c)
        }) else {
            break;
        };
        take(&mut remaining, &mut selected, i, ctx, config);
    }

    // Pass 5: floor guarantee — backfill disregarding category caps.
    while selected.len() < min {
        let Some(i) = pick_best(&remaining, &selected, ctx, config, |_| true) else {
            break;
        };
        take(&mut remaining, &mut selected, i, ctx, config);
    }

    // Pass 6: type-balance minimums.
    enforce_type_minimum(
        &mut selected,
        &mut remaining,
        ctx,
        config,
        |t| t == ConceptType::PrimaryModel,
        MIN_PRIMARY_MODELS,
    );
    enforce_type_minimum(
        &mut selected,
        &mut remaining,
        ctx,
        config,
        |t| matches!(t, ConceptType::Bias | ConceptType::Fallacy),
        MIN_BIAS_OR_FALLACY,
    );
    truncate_to(&mut selected, max);

    debug!(
        selected = selected.len(),
        "curation complete"
    );
    selected
}

/// Index of the best remaining candidate passing `filter`, by synergy-
/// adjusted score; ties keep the earliest original position.
fn pick_best(
    remaining: &[ScoredCandidate],
    selected: &[Selected],
    ctx: &GoalContext,
    config: &CurationConfig,
    filter: impl Fn(&ScoredCandidate) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in remaining.iter().enumerate() {
        if !filter(candidate) {
            continue;
        }
        let adjusted = candidate.final_score + synergy::bonus(candidate, selected, ctx, config);
        match best {
            Some((_, score)) if adjusted <= score => {}
            _ => best = Some((i, adjusted)),
        }
    }
    best.map(|(i, _)| i)
}

/// Move `remaining[i]` into the selection, stamping its adjusted score.
fn take(
    remaining: &mut Vec<ScoredCandidate>,
    selected: &mut Vec<Selected>,
    i: usize,
    ctx: &GoalContext,
    config: &CurationConfig,
) {
    let candidate = remaining.remove(i);
    let adjusted_score =
        candidate.final_score + synergy::bonus(&candidate, selected, ctx, config);
    let foundational = config.is_foundational(&candidate.concept.title, ctx);
    selected.push(Selected {
        candidate,
        adjusted_score,
        foundational,
    });
}

/// Category cap: 2 picks, 3 when the new pick is a reinforcement concept.
fn under_category_cap(selected: &[Selected], candidate: &ScoredCandidate) -> bool {
    let count = selected
        .iter()
        .filter(|s| s.candidate.concept.category == candidate.concept.category)
        .count();
    let cap = if candidate.is_learned {
        CATEGORY_CAP_REINFORCEMENT
    } else {
        CATEGORY_CAP
    };
    count < cap
}

/// Ensure at least `needed` selected concepts satisfy `pred`, swapping out
/// the lowest-scoring non-foundational member of the most over-represented
/// other type; append when no swap victim exists.
fn enforce_type_minimum(
    selected: &mut Vec<Selected>,
    remaining: &mut Vec<ScoredCandidate>,
    ctx: &GoalContext,
    config: &CurationConfig,
    pred: impl Fn(ConceptType) -> bool + Copy,
    needed: usize,
) {
    loop {
        let have = selected
            .iter()
            .filter(|s| pred(s.candidate.concept.concept_type))
            .count();
        if have >= needed {
            return;
        }

        let Some(i) = pick_best(remaining, selected, ctx, config, |c| {
            pred(c.concept.concept_type)
        }) else {
            // Nothing of the needed type exists; leave the selection as-is.
            return;
        };

        if let Some(victim) = swap_victim(selected, &pred) {
            selected.remove(victim);
        }
        // Without a victim this appends beyond the ceiling; truncate_to
        // settles the count afterwards.
        take(remaining, selected, i, ctx, config);
    }
}

/// Lowest-scoring non-foundational member of the most common type not
/// satisfying `pred`.
fn swap_victim(selected: &[Selected], pred: &impl Fn(ConceptType) -> bool) -> Option<usize> {
    let over_type = [ConceptType::PrimaryModel, ConceptType::Bias, ConceptType::Fallacy]
        .into_iter()
        .filter(|t| !pred(*t))
        .max_by_key(|t| {
            selected
                .iter()
                .filter(|s| s.candidate.concept.concept_type == *t)
                .count()
        })?;

    let mut victim: Option<(usize, f64)> = None;
    for (i, s) in selected.iter().enumerate() {
        if s.foundational || s.candidate.concept.concept_type != over_type {
            continue;
        }
        match victim {
            Some((_, score)) if s.adjusted_score >= score => {}
            _ => victim = Some((i, s.adjusted_score)),
        }
    }
    victim.map(|(i, _)| i)
}

/// Drop the globally lowest scorers until the selection fits `max`,
/// protecting the type minimums.
fn truncate_to(selected: &mut Vec<Selected>, max: usize) {
    while selected.len() > max {
        let mut lowest: Option<(usize, f64)> = None;
        for (i, s) in selected.iter().enumerate() {
            if !removal_keeps_minimums(selected, i) {
                continue;
            }
            match lowest {
                Some((_, score)) if s.adjusted_score >= score => {}
                _ => lowest = Some((i, s.adjusted_score)),
            }
        }
        match lowest {
            Some((i, _)) => {
                selected.remove(i);
            }
            // Minimums block every removal; drop the global lowest anyway.
            None => {
                let i = selected
                    .iter()
                    .enumerate()
                    .min_by(|(_, a), (_, b)| {
                        a.adjusted_score
                            .partial_cmp(&b.adjusted_score)
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                selected.remove(i);
            }
        }
    }
}

fn removal_keeps_minimums(selected: &[Selected], skip: usize) -> bool {
    let primaries = selected
        .iter()
        .enumerate()
        .filter(|(i, s)| *i != skip && s.candidate.concept.concept_type == ConceptType::PrimaryModel)
        .count();
    let balancing = selected
        .iter()
        .enumerate()
        .filter(|(i, s)| {
            *i != skip
                && matches!(
                    s.candidate.concept.concept_type,
                    ConceptType::Bias | ConceptType::Fallacy
                )
        })
        .count();
    primaries >= MIN_PRIMARY_MODELS && balancing >= MIN_BIAS_OR_FALLACY
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::constants::{MAX_STEPS, MIN_STEPS};
    use lattice_core::models::ScoreBreakdown;

    fn scored(
        id: &str,
        title: &str,
        category: &str,
        concept_type: ConceptType,
        final_score: f64,
    ) -> ScoredCandidate {
        ScoredCandidate {
            concept: lattice_core::concept::Concept {
                id: id.into(),
                title: title.into(),
                category: category.into(),
                concept_type,
                summary: String::new(),
                description: String::new(),
                application: String::new(),
                keywords: Vec::new(),
                embedding: vec![0.0; 4],
                examples: Vec::new(),
            },
            similarity: final_score,
            breakdown: ScoreBreakdown::default(),
            final_score,
            is_learned: false,
            days_since_last_use: None,
            last_rating: None,
        }
    }

    fn pool() -> Vec<ScoredCandidate> {
        vec![
            scored("c1", "First Principles Thinking", "decision-making", ConceptType::PrimaryModel, 0.9),
            scored("c2", "Inversion", "decision-making", ConceptType::PrimaryModel, 0.85),
            scored("c3", "Second-Order Thinking", "decision-making", ConceptType::PrimaryModel, 0.8),
            scored("c4", "Confirmation Bias", "psychology", ConceptType::Bias, 0.75),
            scored("c5", "Availability Heuristic", "psychology", ConceptType::Bias, 0.7),
            scored("c6", "Feedback Loops", "systems-thinking", ConceptType::PrimaryModel, 0.65),
            scored("c7", "Straw Man", "logic", ConceptType::Fallacy, 0.6),
            scored("c8", "Opportunity Cost", "economics", ConceptType::PrimaryModel, 0.55),
            scored("c9", "Anchoring Bias", "psychology", ConceptType::Bias, 0.5),
            scored("c10", "Pareto Principle", "productivity", ConceptType::PrimaryModel, 0.45),
        ]
    }

    fn run(pool: Vec<ScoredCandidate>) -> Vec<Selected> {
        select(
            pool,
            &GoalContext::default(),
            &CurationConfig::default(),
            MIN_STEPS,
            MAX_STEPS,
        )
    }

    #[test]
    fn selects_between_min_and_max() {
        let selected = run(pool());
        assert!(selected.len() >= MIN_STEPS && selected.len() <= MAX_STEPS);
    }

    #[test]
    fn no_duplicate_concepts() {
        let selected = run(pool());
        let mut ids: Vec<&str> = selected.iter().map(|s| s.candidate.concept.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), selected.len());
    }

    #[test]
    fn type_minimums_hold() {
        let selected = run(pool());
        let primaries = selected
            .iter()
            .filter(|s| s.candidate.concept.concept_type == ConceptType::PrimaryModel)
            .count();
        let balancing = selected
            .iter()
            .filter(|s| {
                matches!(
                    s.candidate.concept.concept_type,
                    ConceptType::Bias | ConceptType::Fallacy
                )
            })
            .count();
        assert!(primaries >= MIN_PRIMARY_MODELS);
        assert!(balancing >= MIN_BIAS_OR_FALLACY);
    }

    #[test]
    fn foundational_concepts_are_seeded() {
        let selected = run(pool());
        assert!(selected
            .iter()
            .any(|s| s.candidate.concept.title == "First Principles Thinking" && s.foundational));
    }

    #[test]
    fn category_cap_limits_new_concepts() {
        // Six high-scoring new concepts in one category; only two may land
        // through the capped passes, the rest fill from other categories.
        let mut pool: Vec<ScoredCandidate> = (0..6)
            .map(|i| {
                scored(
                    &format!("dm{i}"),
                    &format!("Model {i}"),
                    "decision-making",
                    ConceptType::PrimaryModel,
                    0.9 - 0.01 * f64::from(i),
                )
            })
            .collect();
        pool.push(scored("b1", "Confirmation Bias", "psychology", ConceptType::Bias, 0.4));
        pool.push(scored("b2", "Straw Man", "logic", ConceptType::Fallacy, 0.35));
        pool.push(scored("m1", "Feedback Loops", "systems-thinking", ConceptType::PrimaryModel, 0.3));

        let selected = run(pool);
        let dm_count = selected
            .iter()
            .filter(|s| s.candidate.concept.category == "decision-making")
            .count();
        assert!(dm_count <= CATEGORY_CAP);
    }

    #[test]
    fn floor_backfill_ignores_caps_with_thin_pool() {
        // Five candidates all in one category: caps alone would starve the
        // selection, the floor pass must still reach five.
        let pool: Vec<ScoredCandidate> = (0..5)
            .map(|i| {
                let t = if i < 3 {
                    ConceptType::PrimaryModel
                } else {
                    ConceptType::Bias
                };
                scored(&format!("c{i}"), &format!("Concept {i}"), "psychology", t, 0.5)
            })
            .collect();
        let selected = run(pool);
        assert_eq!(selected.len(), MIN_STEPS);
    }

    #[test]
    fn never_exceeds_max_even_when_balancing() {
        // All primaries except one low-scoring bias forces a swap/append.
        let mut pool: Vec<ScoredCandidate> = (0..9)
            .map(|i| {
                scored(
                    &format!("p{i}"),
                    &format!("Primary {i}"),
                    ["decision-making", "economics", "systems-thinking", "probability", "productivity"]
                        [i % 5],
                    ConceptType::PrimaryModel,
                    0.9 - 0.02 * i as f64,
                )
            })
            .collect();
        pool.push(scored("bias", "Confirmation Bias", "psychology", ConceptType::Bias, 0.05));
        let selected = run(pool);
        assert!(selected.len() <= MAX_STEPS);
        assert!(selected
            .iter()
            .any(|s| s.candidate.concept.concept_type == ConceptType::Bias));
    }
}
