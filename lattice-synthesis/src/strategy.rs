//! The advanced-synthesis strategy.
//!
//! Takes over once a user has mastered enough of the corpus that fresh
//! retrieval would mostly resurface known material. Builds combination
//! pseudo-concepts from the user's strongest learned models and biases,
//! adds two fixed meta-learning concepts, and ranks them with a fixed
//! heuristic.

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use lattice_core::concept::{Concept, ConceptType, LearnedConcept};
use lattice_core::constants::{
    MAX_STEPS, MIN_CANDIDATES, SYNTHESIS_DURATION_MULTIPLIER, SYNTHESIS_THRESHOLD, WEEKS_PER_STEP,
};
use lattice_core::errors::{LatticeError, LatticeResult};
use lattice_core::models::{
    estimate_duration, GenerationRequest, LearningStatus, Roadmap, RoadmapStep,
};
use lattice_core::traits::{ConceptSearch, GenerationStrategy};

/// Learned concepts considered for synthesis, after effectiveness ranking.
const TOP_MASTERED: usize = 20;

/// Cross-product caps: sources drawn from the mastered set.
const MAX_PRIMARY_SOURCES: usize = 4;
const MAX_BIAS_SOURCES: usize = 3;

/// Fixed heuristic scores. Meta concepts outrank every combination so the
/// roadmap always carries its two primary-model anchors.
const META_SCORES: [f64; 2] = [0.95, 0.9];
const COMBO_BASE: f64 = 0.4;

pub struct SynthesisStrategy<'a> {
    corpus: &'a dyn ConceptSearch,
    threshold: usize,
}

impl<'a> SynthesisStrategy<'a> {
    pub fn new(corpus: &'a dyn ConceptSearch) -> Self {
        Self {
            corpus,
            threshold: SYNTHESIS_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }
}

/// A mastered concept with its recency/effectiveness composite.
struct MasteredConcept {
    concept: Concept,
    effectiveness: f64,
    recency: f64,
}

/// A synthesized roadmap candidate.
struct SynthCandidate {
    id: String,
    title: String,
    concept_type: ConceptType,
    category: String,
    score: f64,
    rationale: String,
    suggested_focus: String,
}

impl<'a> GenerationStrategy for SynthesisStrategy<'a> {
    fn name(&self) -> &'static str {
        "advanced-synthesis"
    }

    fn applies(&self, history: &[LearnedConcept]) -> bool {
        history.len() >= self.threshold
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> LatticeResult<Roadmap> {
        let corpus = self.corpus.all_concepts()?;
        let mastered = rank_mastered(&corpus, request.history, request.now);
        debug!(
            mastered = mastered.len(),
            history = request.history.len(),
            "ranked mastered concepts for synthesis"
        );

        let mut candidates = meta_candidates();
        candidates.extend(combination_candidates(&mastered));

        if candidates.len() < MIN_CANDIDATES {
            return Err(LatticeError::InsufficientContent {
                found: candidates.len(),
                needed: MIN_CANDIDATES,
            });
        }

        // Stable sort keeps metas ahead of equal-scoring combinations.
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(MAX_STEPS);

        let steps: Vec<RoadmapStep> = candidates
            .into_iter()
            .enumerate()
            .map(|(i, c)| RoadmapStep {
                order: (i + 1) as u32,
                concept_id: c.id,
                title: c.title,
                concept_type: c.concept_type,
                category: c.category,
                score: c.score,
                learning_status: LearningStatus::New,
                reinforcement_context: None,
                rationale: c.rationale,
                suggested_focus: c.suggested_focus,
            })
            .collect();

        let summary = Roadmap::summarize(&steps);
        let estimated_duration =
            estimate_duration(steps.len(), WEEKS_PER_STEP * SYNTHESIS_DURATION_MULTIPLIER);

        info!(
            user_id = request.user_id,
            steps = steps.len(),
            "advanced synthesis roadmap generated"
        );

        Ok(Roadmap {
            goal_description: format!("Advanced Synthesis: {}", request.goal),
            steps,
            summary,
            estimated_duration,
        })
    }
}

/// Join history with the corpus, keep effective (rating ≥ 4) concepts, and
/// rank by a recency/effectiveness composite.
fn rank_mastered(
    corpus: &[Concept],
    history: &[LearnedConcept],
    now: DateTime<Utc>,
) -> Vec<MasteredConcept> {
    let mut mastered: Vec<(f64, MasteredConcept)> = history
        .iter()
        .filter(|record| record.rating.is_effective())
        .filter_map(|record| {
            let concept = corpus.iter().find(|c| c.id == record.concept_id)?;
            let days = record.days_since_last_use(now) as f64;
            let recency = 1.0 / (1.0 + days / 30.0);
            let effectiveness = record.rating.fraction();
            let composite = 0.6 * recency + 0.4 * effectiveness;
            Some((
                composite,
                MasteredConcept {
                    concept: concept.clone(),
                    effectiveness,
                    recency,
                },
            ))
        })
        .collect();

    mastered.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    mastered
        .into_iter()
        .take(TOP_MASTERED)
        .map(|(_, m)| m)
        .collect()
}

/// Cross a capped subset of mastered primary models with mastered biases.
///
/// A combination carries the bias source's type: the exercise is spotting
/// the bias through the model's lens, which keeps the roadmap's
/// bias/fallacy balance intact.
fn combination_candidates(mastered: &[MasteredConcept]) -> Vec<SynthCandidate> {
    let primaries: Vec<&MasteredConcept> = mastered
        .iter()
        .filter(|m| m.concept.concept_type == ConceptType::PrimaryModel)
        .take(MAX_PRIMARY_SOURCES)
        .collect();
    let biases: Vec<&MasteredConcept> = mastered
        .iter()
        .filter(|m| m.concept.concept_type == ConceptType::Bias)
        .take(MAX_BIAS_SOURCES)
        .collect();

    let mut combos = Vec::with_capacity(primaries.len() * biases.len());
    for model in &primaries {
        for bias in &biases {
            let a = &model.concept;
            let b = &bias.concept;
            let effectiveness = (model.effectiveness + bias.effectiveness) / 2.0;
            let recency = (model.recency + bias.recency) / 2.0;
            combos.push(SynthCandidate {
                id: Uuid::new_v4().to_string(),
                title: format!("{} + {} Synthesis", a.title, b.title),
                concept_type: ConceptType::Bias,
                category: "synthesis".to_string(),
                score: COMBO_BASE + 0.3 * effectiveness + 0.2 * recency,
                rationale: format!(
                    "You have mastered both {} and {}. This synthesis trains you to apply {} \
                     while actively watching for {}.",
                    a.title, b.title, a.title, b.title
                ),
                suggested_focus: format!(
                    "Pick one live situation this week, reason through it with {}, and log any \
                     moment {} distorts your read.",
                    a.title, b.title
                ),
            });
        }
    }
    combos
}

/// The two fixed meta-learning concepts every synthesis roadmap anchors on.
fn meta_candidates() -> Vec<SynthCandidate> {
    vec![
        SynthCandidate {
            id: Uuid::new_v4().to_string(),
            title: "Learning How to Learn".to_string(),
            concept_type: ConceptType::PrimaryModel,
            category: "meta-learning".to_string(),
            score: META_SCORES[0],
            rationale: "At your level the highest-leverage move is improving how you acquire \
                        and retain new models."
                .to_string(),
            suggested_focus: "Audit your review cadence: which learned concepts decayed, and why?"
                .to_string(),
        },
        SynthCandidate {
            id: Uuid::new_v4().to_string(),
            title: "Building a Mental Model Lattice".to_string(),
            concept_type: ConceptType::PrimaryModel,
            category: "meta-learning".to_string(),
            score: META_SCORES[1],
            rationale: "Isolated models plateau; connecting them into a lattice is what compounds."
                .to_string(),
            suggested_focus: "Map three of your strongest models and write down where they \
                              disagree."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{corpus_of, history_for, StubCorpus};

    fn strategy_corpus(n: usize) -> StubCorpus {
        StubCorpus::new(corpus_of(n))
    }

    #[test]
    fn applies_only_above_threshold() {
        let corpus = strategy_corpus(100);
        let strategy = SynthesisStrategy::new(&corpus);
        let concepts = corpus.concepts();
        let thin = history_for(&concepts[..10], 30, 5);
        let thick = history_for(&concepts[..80], 30, 5);
        assert!(!strategy.applies(&thin));
        assert!(strategy.applies(&thick));
    }

    #[test]
    fn generates_prefixed_all_new_roadmap() {
        let corpus = strategy_corpus(100);
        let strategy = SynthesisStrategy::new(&corpus);
        let concepts = corpus.concepts();
        let history = history_for(&concepts[..80], 10, 5);
        let request = GenerationRequest {
            user_id: "u1",
            goal: "integrate everything I know",
            history: &history,
            now: Utc::now(),
        };
        let roadmap = strategy.generate(&request).expect("synthesis roadmap");

        assert!(roadmap.goal_description.starts_with("Advanced Synthesis:"));
        assert_eq!(roadmap.steps.len(), MAX_STEPS);
        assert!(roadmap
            .steps
            .iter()
            .all(|s| s.learning_status == LearningStatus::New));
        assert_eq!(roadmap.estimated_duration, "14 weeks");
    }

    #[test]
    fn meta_concepts_lead_the_roadmap() {
        let corpus = strategy_corpus(100);
        let strategy = SynthesisStrategy::new(&corpus);
        let concepts = corpus.concepts();
        let history = history_for(&concepts[..80], 10, 5);
        let request = GenerationRequest {
            user_id: "u1",
            goal: "integrate everything I know",
            history: &history,
            now: Utc::now(),
        };
        let roadmap = strategy.generate(&request).expect("synthesis roadmap");
        assert_eq!(roadmap.steps[0].title, "Learning How to Learn");
        assert_eq!(roadmap.steps[1].title, "Building a Mental Model Lattice");
    }

    #[test]
    fn combination_titles_are_syntheses_of_sources() {
        let corpus = strategy_corpus(100);
        let strategy = SynthesisStrategy::new(&corpus);
        let concepts = corpus.concepts();
        let history = history_for(&concepts[..80], 10, 5);
        let request = GenerationRequest {
            user_id: "u1",
            goal: "integrate everything I know",
            history: &history,
            now: Utc::now(),
        };
        let roadmap = strategy.generate(&request).expect("synthesis roadmap");
        assert!(roadmap
            .steps
            .iter()
            .skip(2)
            .all(|s| s.title.ends_with("Synthesis")));
    }

    #[test]
    fn too_little_mastery_is_insufficient_content() {
        let corpus = strategy_corpus(100);
        let strategy = SynthesisStrategy::new(&corpus).with_threshold(5);
        let concepts = corpus.concepts();
        // Effective history but rated too low to count as mastered.
        let history = history_for(&concepts[..10], 10, 2);
        let request = GenerationRequest {
            user_id: "u1",
            goal: "integrate everything I know",
            history: &history,
            now: Utc::now(),
        };
        let result = strategy.generate(&request);
        assert!(matches!(
            result,
            Err(LatticeError::InsufficientContent { .. })
        ));
    }
}
