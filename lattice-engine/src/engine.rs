//! The engine facade.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use lattice_cache::TtlCache;
use lattice_core::concept::LearnedConcept;
use lattice_core::config::EngineConfig;
use lattice_core::errors::{LatticeError, LatticeResult};
use lattice_core::models::{AnnotatedCandidate, GenerationRequest, Roadmap};
use lattice_core::traits::{ConceptSearch, EmbeddingProvider, GenerationStrategy};
use lattice_resilience::{OperationTimings, RetryPolicy, TimingStats};
use lattice_synthesis::SynthesisStrategy;
use lattice_validation::{validate_goal, validate_roadmap};

use crate::strategy::StandardStrategy;

/// Orchestrates one roadmap generation end to end.
///
/// Owns the caches, retry policy, and timing recorder; borrows the two
/// external collaborators. Persistence is the caller's concern.
pub struct RoadmapEngine<'a> {
    embedder: &'a dyn EmbeddingProvider,
    corpus: &'a dyn ConceptSearch,
    config: EngineConfig,
    embedding_cache: TtlCache<Vec<f32>>,
    search_cache: TtlCache<Vec<AnnotatedCandidate>>,
    retry: RetryPolicy,
    timings: Mutex<OperationTimings>,
}

impl<'a> RoadmapEngine<'a> {
    pub fn new(
        embedder: &'a dyn EmbeddingProvider,
        corpus: &'a dyn ConceptSearch,
        config: EngineConfig,
    ) -> Self {
        let cache = &config.cache;
        let ttl = Duration::from_secs(cache.ttl_secs);
        Self {
            embedder,
            corpus,
            embedding_cache: TtlCache::new(cache.embedding_capacity, ttl),
            search_cache: TtlCache::new(cache.search_capacity, ttl),
            retry: RetryPolicy::from(&config.retry),
            timings: Mutex::new(OperationTimings::new()),
            config,
        }
    }

    pub fn with_defaults(
        embedder: &'a dyn EmbeddingProvider,
        corpus: &'a dyn ConceptSearch,
    ) -> Self {
        Self::new(embedder, corpus, EngineConfig::default())
    }

    /// Generate a roadmap against the current wall clock.
    pub fn generate(
        &self,
        user_id: &str,
        goal: &str,
        history: &[LearnedConcept],
    ) -> LatticeResult<Roadmap> {
        self.generate_at(user_id, goal, history, Utc::now())
    }

    /// Generate a roadmap with an injected clock.
    pub fn generate_at(
        &self,
        user_id: &str,
        goal: &str,
        history: &[LearnedConcept],
        now: DateTime<Utc>,
    ) -> LatticeResult<Roadmap> {
        let started = Instant::now();
        let result = self.run(user_id, goal, history, now);
        self.record_timing("generate", started.elapsed());

        match &result {
            Ok(roadmap) => info!(
                user_id,
                steps = roadmap.steps.len(),
                new = roadmap.summary.new_count,
                reinforcement = roadmap.summary.reinforcement_count,
                "roadmap generated"
            ),
            Err(e) => error!(user_id, goal, code = e.code(), %e, "generation failed"),
        }
        result
    }

    fn run(
        &self,
        user_id: &str,
        goal: &str,
        history: &[LearnedConcept],
        now: DateTime<Utc>,
    ) -> LatticeResult<Roadmap> {
        let validation = validate_goal(goal);
        let processed = match validation.processed_goal {
            Some(processed) if validation.is_valid => processed,
            _ => {
                let reason = validation
                    .error
                    .unwrap_or_else(|| "goal failed validation".to_string());
                warn!(user_id, goal, "goal rejected: {reason}");
                return Err(LatticeError::InvalidGoal { reason });
            }
        };

        let request = GenerationRequest {
            user_id,
            goal: &processed,
            history,
            now,
        };

        let synthesis = SynthesisStrategy::new(self.corpus)
            .with_threshold(self.config.retrieval.synthesis_threshold);
        let standard = StandardStrategy::new(
            self.embedder,
            self.corpus,
            &self.embedding_cache,
            &self.search_cache,
            &self.retry,
            &self.config,
        );
        let strategy: &dyn GenerationStrategy = if synthesis.applies(history) {
            &synthesis
        } else {
            &standard
        };
        info!(user_id, strategy = strategy.name(), "strategy chosen");

        let roadmap = strategy.generate(&request)?;

        let check = validate_roadmap(&roadmap);
        if !check.is_valid {
            return Err(LatticeError::Internal {
                details: check.errors.join("; "),
            });
        }
        Ok(roadmap)
    }

    /// Rolling stats for a named engine operation.
    pub fn timing_stats(&self, name: &str) -> Option<TimingStats> {
        self.timings.lock().ok().and_then(|t| t.stats(name))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn record_timing(&self, name: &str, elapsed: Duration) {
        if let Ok(mut timings) = self.timings.lock() {
            timings.record(name, elapsed);
        }
    }
}
