use lattice_core::concept::{Concept, ConceptType};
use lattice_core::config::CurationConfig;
use lattice_core::constants::{MAX_STEPS, MIN_STEPS};
use lattice_core::goal::GoalContext;
use lattice_core::models::{ScoreBreakdown, ScoredCandidate};
use lattice_retrieval::curation::select;
use proptest::prelude::*;

fn candidate(id: usize, type_ix: u8, category_ix: u8, score: f64, learned: bool) -> ScoredCandidate {
    let concept_type = match type_ix % 3 {
        0 => ConceptType::PrimaryModel,
        1 => ConceptType::Bias,
        _ => ConceptType::Fallacy,
    };
    let category = ["decision-making", "psychology", "systems-thinking", "logic", "economics"]
        [usize::from(category_ix % 5)];
    ScoredCandidate {
        concept: Concept {
            id: format!("c{id}"),
            title: format!("Concept {id}"),
            category: category.into(),
            concept_type,
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
        last_rating: learned.then(lattice_core::concept::Rating::default),
    }
}

prop_compose! {
    fn arb_pool()(specs in prop::collection::vec((0u8..3, 0u8..5, 0.0f64..1.0, any::<bool>()), 5..40))
        -> Vec<ScoredCandidate>
    {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (t, c, score, learned))| candidate(i, t, c, score, learned))
            .collect()
    }
}

proptest! {
    #[test]
    fn selection_size_is_bounded(pool in arb_pool()) {
        let selected = select(
            pool,
            &GoalContext::default(),
            &CurationConfig::default(),
            MIN_STEPS,
            MAX_STEPS,
        );
        prop_assert!(selected.len() >= MIN_STEPS);
        prop_assert!(selected.len() <= MAX_STEPS);
    }

    #[test]
    fn selection_has_no_duplicate_ids(pool in arb_pool()) {
        let selected = select(
            pool,
            &GoalContext::default(),
            &CurationConfig::default(),
            MIN_STEPS,
            MAX_STEPS,
        );
        let mut ids: Vec<&str> = selected.iter().map(|s| s.candidate.concept.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }

    #[test]
    fn adjusted_score_never_lags_final_score(pool in arb_pool()) {
        let selected = select(
            pool,
            &GoalContext::default(),
            &CurationConfig::default(),
            MIN_STEPS,
            MAX_STEPS,
        );
        for s in &selected {
            // Synergy only ever adds, capped at 0.3.
            prop_assert!(s.adjusted_score >= s.candidate.final_score - 1e-9);
            prop_assert!(s.adjusted_score <= s.candidate.final_score + 0.3 + 1e-9);
        }
    }
}
