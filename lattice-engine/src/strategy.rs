//! The standard retrieval strategy: analyze → retrieve → score → curate →
//! order → assemble.

use tracing::debug;

use lattice_cache::TtlCache;
use lattice_core::concept::LearnedConcept;
use lattice_core::config::EngineConfig;
use lattice_core::errors::{LatticeError, LatticeResult};
use lattice_core::models::{AnnotatedCandidate, GenerationRequest, Roadmap};
use lattice_core::traits::{ConceptSearch, EmbeddingProvider, GenerationStrategy};
use lattice_resilience::RetryPolicy;
use lattice_retrieval::{
    analyze_goal_context, curation, ordering, scoring, CandidateRetriever, ScorerWeights,
};

use crate::assembly;

/// The default pipeline. Handles every user below the synthesis threshold.
pub struct StandardStrategy<'a> {
    embedder: &'a dyn EmbeddingProvider,
    corpus: &'a dyn ConceptSearch,
    embedding_cache: &'a TtlCache<Vec<f32>>,
    search_cache: &'a TtlCache<Vec<AnnotatedCandidate>>,
    retry: &'a RetryPolicy,
    config: &'a EngineConfig,
}

impl<'a> StandardStrategy<'a> {
    pub fn new(
        embedder: &'a dyn EmbeddingProvider,
        corpus: &'a dyn ConceptSearch,
        embedding_cache: &'a TtlCache<Vec<f32>>,
        search_cache: &'a TtlCache<Vec<AnnotatedCandidate>>,
        retry: &'a RetryPolicy,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            embedder,
            corpus,
            embedding_cache,
            search_cache,
            retry,
            config,
        }
    }
}

impl<'a> GenerationStrategy for StandardStrategy<'a> {
    fn name(&self) -> &'static str {
        "standard-retrieval"
    }

    fn applies(&self, history: &[LearnedConcept]) -> bool {
        history.len() < self.config.retrieval.synthesis_threshold
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> LatticeResult<Roadmap> {
        let retrieval = &self.config.retrieval;
        let curation_config = &self.config.curation;

        let ctx = analyze_goal_context(request.goal);
        debug!(?ctx, "goal context analyzed");

        let retriever = CandidateRetriever::new(
            self.embedder,
            self.corpus,
            self.embedding_cache,
            self.search_cache,
            self.retry,
        );
        let candidates = retriever.retrieve(
            request.goal,
            request.history,
            retrieval.similarity_threshold,
            retrieval.candidate_limit,
            request.now,
        )?;

        if candidates.len() < retrieval.min_candidates {
            return Err(LatticeError::InsufficientContent {
                found: candidates.len(),
                needed: retrieval.min_candidates,
            });
        }

        let scored = scoring::score(
            &candidates,
            request.goal,
            &ctx,
            curation_config,
            &ScorerWeights::default(),
            retrieval.candidate_limit,
        );

        let selected = curation::select(
            scored,
            &ctx,
            curation_config,
            retrieval.min_steps,
            retrieval.max_steps,
        );
        let ordered = ordering::order_progression(selected, &ctx, curation_config);

        Ok(assembly::build_roadmap(
            ordered,
            request.goal,
            &ctx,
            curation_config,
        ))
    }
}
