//! Deterministic concept corpus and learning-history builders.

use chrono::{Duration, Utc};

use lattice_core::concept::{Concept, ConceptType, GoalExample, LearnedConcept, Rating};

/// Fixture embedding dimensionality. Small on purpose: similarity maths
/// works the same at 8 dims as at 768 and the fixtures stay readable.
pub const EMBEDDING_DIMS: usize = 8;

/// Deterministic pseudo-embedding derived from a blake3 hash of the seed.
///
/// Components are in (0, 1], so the cosine of any two vectors is positive
/// and the stub corpus's mapped similarity comfortably clears the default
/// retrieval threshold.
pub fn pseudo_embedding(seed: &str) -> Vec<f32> {
    let hash = blake3::hash(seed.trim().to_lowercase().as_bytes());
    hash.as_bytes()
        .chunks(4)
        .take(EMBEDDING_DIMS)
        .map(|chunk| {
            let v = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            (v as f32 / u32::MAX as f32).max(0.05)
        })
        .collect()
}

struct CatalogueEntry {
    title: &'static str,
    category: &'static str,
    concept_type: ConceptType,
    keywords: &'static [&'static str],
    example_goal: &'static str,
}

/// Hand-curated catalogue mirroring the titles the default curation tables
/// reference, plus enough off-table material to exercise the fill passes.
const CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry {
        title: "First Principles Thinking",
        category: "problem-solving",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["think", "decision", "improve"],
        example_goal: "make better decisions at work",
    },
    CatalogueEntry {
        title: "Inversion",
        category: "decision-making",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["decision", "think", "risk"],
        example_goal: "improve my decision making",
    },
    CatalogueEntry {
        title: "Second-Order Thinking",
        category: "decision-making",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["decision", "think"],
        example_goal: "improve my decision making",
    },
    CatalogueEntry {
        title: "Circle of Competence",
        category: "decision-making",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["decision", "risk", "learn"],
        example_goal: "take smarter career risks",
    },
    CatalogueEntry {
        title: "Probabilistic Thinking",
        category: "probability",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["risk", "think", "decision"],
        example_goal: "get better at judging uncertain bets",
    },
    CatalogueEntry {
        title: "Habit Loop",
        category: "psychology",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["habit", "improve"],
        example_goal: "build a consistent morning routine",
    },
    CatalogueEntry {
        title: "Deliberate Practice",
        category: "learning",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["learn", "improve", "focus"],
        example_goal: "learn a new skill faster",
    },
    CatalogueEntry {
        title: "Opportunity Cost",
        category: "economics",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["decision", "risk"],
        example_goal: "spend my time on what matters",
    },
    CatalogueEntry {
        title: "Margin of Safety",
        category: "economics",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["risk", "decision"],
        example_goal: "make safer financial choices",
    },
    CatalogueEntry {
        title: "Eisenhower Matrix",
        category: "productivity",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["focus", "productive", "decision"],
        example_goal: "stop drowning in urgent work",
    },
    CatalogueEntry {
        title: "Pareto Principle",
        category: "productivity",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["focus", "productive", "improve"],
        example_goal: "get more done with less effort",
    },
    CatalogueEntry {
        title: "Hanlon's Razor",
        category: "psychology",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["communicate", "think"],
        example_goal: "stop taking things personally",
    },
    CatalogueEntry {
        title: "Feedback Loops",
        category: "systems-thinking",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["think", "improve"],
        example_goal: "understand why my habits stick or slip",
    },
    CatalogueEntry {
        title: "Occam's Razor",
        category: "logic",
        concept_type: ConceptType::PrimaryModel,
        keywords: &["think", "decision"],
        example_goal: "cut through overcomplicated plans",
    },
    CatalogueEntry {
        title: "Confirmation Bias",
        category: "psychology",
        concept_type: ConceptType::Bias,
        keywords: &["bias", "think", "decision"],
        example_goal: "improve my decision making",
    },
    CatalogueEntry {
        title: "Availability Heuristic",
        category: "psychology",
        concept_type: ConceptType::Bias,
        keywords: &["bias", "risk", "think"],
        example_goal: "judge risks more accurately",
    },
    CatalogueEntry {
        title: "Loss Aversion",
        category: "economics",
        concept_type: ConceptType::Bias,
        keywords: &["bias", "risk", "decision"],
        example_goal: "make safer financial choices",
    },
    CatalogueEntry {
        title: "Anchoring Bias",
        category: "psychology",
        concept_type: ConceptType::Bias,
        keywords: &["bias", "decision"],
        example_goal: "negotiate without getting anchored",
    },
    CatalogueEntry {
        title: "Sunk Cost Fallacy",
        category: "economics",
        concept_type: ConceptType::Fallacy,
        keywords: &["bias", "decision", "risk"],
        example_goal: "walk away from failing projects",
    },
    CatalogueEntry {
        title: "Straw Man Fallacy",
        category: "logic",
        concept_type: ConceptType::Fallacy,
        keywords: &["communicate", "think"],
        example_goal: "argue more fairly with my partner",
    },
];

fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn build(entry: &CatalogueEntry) -> Concept {
    let example = match entry.concept_type {
        ConceptType::PrimaryModel => GoalExample {
            goal: entry.example_goal.to_string(),
            if_then: Some(format!(
                "If I face a hard call, then I will apply {} before committing.",
                entry.title
            )),
            spotting_mission: None,
        },
        ConceptType::Bias | ConceptType::Fallacy => GoalExample {
            goal: entry.example_goal.to_string(),
            if_then: None,
            spotting_mission: Some(format!(
                "Catch one instance of {} in your own reasoning this week.",
                entry.title
            )),
        },
    };
    Concept {
        id: slug(entry.title),
        title: entry.title.to_string(),
        category: entry.category.to_string(),
        concept_type: entry.concept_type,
        summary: format!("{} in one sentence.", entry.title),
        description: format!("A longer treatment of {}.", entry.title),
        application: format!("How to use {} day to day.", entry.title),
        keywords: entry.keywords.iter().map(|k| k.to_string()).collect(),
        embedding: pseudo_embedding(entry.title),
        examples: vec![example],
    }
}

/// The full curated catalogue: 14 primary models, 4 biases, 2 fallacies.
pub fn curated_corpus() -> Vec<Concept> {
    CATALOGUE.iter().map(build).collect()
}

/// A corpus too small to curate from. Three concepts, one of each type.
pub fn small_corpus() -> Vec<Concept> {
    vec![
        build(&CATALOGUE[0]),
        build(&CATALOGUE[14]),
        build(&CATALOGUE[18]),
    ]
}

/// The curated catalogue padded with synthetic concepts up to `n` entries.
///
/// Filler cycles types and categories so any prefix of the corpus still
/// contains a healthy mix of models and biases.
pub fn corpus_of(n: usize) -> Vec<Concept> {
    let mut concepts = curated_corpus();
    concepts.truncate(n);
    let filler_types = [
        ConceptType::PrimaryModel,
        ConceptType::Bias,
        ConceptType::PrimaryModel,
        ConceptType::Fallacy,
    ];
    let filler_categories = [
        "decision-making",
        "psychology",
        "productivity",
        "systems-thinking",
        "economics",
    ];
    let mut i = 0;
    while concepts.len() < n {
        let title = format!("Synthetic Concept {i}");
        let concept_type = filler_types[i % filler_types.len()];
        let category = filler_categories[i % filler_categories.len()];
        concepts.push(Concept {
            id: format!("synthetic-{i}"),
            title: title.clone(),
            category: category.to_string(),
            concept_type,
            summary: format!("{title} in one sentence."),
            description: format!("A longer treatment of {title}."),
            application: format!("How to use {title} day to day."),
            keywords: vec!["think".to_string()],
            embedding: pseudo_embedding(&title),
            examples: Vec::new(),
        });
        i += 1;
    }
    concepts
}

/// A learning record for `concept_id` last reflected on `days_ago` days
/// ago with the given rating.
pub fn learned(concept_id: &str, days_ago: i64, rating: u8) -> LearnedConcept {
    let now = Utc::now();
    LearnedConcept {
        concept_id: concept_id.to_string(),
        completed_at: now - Duration::days(days_ago + 30),
        last_reflected_at: now - Duration::days(days_ago),
        rating: Rating::new(rating),
        application_count: 3,
    }
}

/// Learning records for every concept in the slice, all with the same
/// recency and rating.
pub fn history_for(concepts: &[Concept], days_ago: i64, rating: u8) -> Vec<LearnedConcept> {
    concepts
        .iter()
        .map(|c| learned(&c.id, days_ago, rating))
        .collect()
}
