//! Candidate retrieval: embedding resolution and annotated vector search,
//! both cached and retried.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use lattice_cache::{keys, TtlCache};
use lattice_core::concept::LearnedConcept;
use lattice_core::errors::{LatticeError, LatticeResult};
use lattice_core::models::AnnotatedCandidate;
use lattice_core::traits::{ConceptSearch, EmbeddingProvider};
use lattice_resilience::{execute_with_retry, RetryPolicy};

/// Resolves a goal into a de-duplicated, similarity-ranked candidate list.
///
/// Owns nothing: borrows the collaborators, the two shared caches, and the
/// retry policy from the engine.
pub struct CandidateRetriever<'a> {
    embedder: &'a dyn EmbeddingProvider,
    corpus: &'a dyn ConceptSearch,
    embedding_cache: &'a TtlCache<Vec<f32>>,
    search_cache: &'a TtlCache<Vec<AnnotatedCandidate>>,
    retry: &'a RetryPolicy,
}

impl<'a> CandidateRetriever<'a> {
    pub fn new(
        embedder: &'a dyn EmbeddingProvider,
        corpus: &'a dyn ConceptSearch,
        embedding_cache: &'a TtlCache<Vec<f32>>,
        search_cache: &'a TtlCache<Vec<AnnotatedCandidate>>,
        retry: &'a RetryPolicy,
    ) -> Self {
        Self {
            embedder,
            corpus,
            embedding_cache,
            search_cache,
            retry,
        }
    }

    /// Produce up to `limit` annotated candidates for the goal.
    ///
    /// The <5 usable-candidate floor is the caller's check, not ours: a thin
    /// result here is still a valid result.
    pub fn retrieve(
        &self,
        goal: &str,
        history: &[LearnedConcept],
        threshold: f64,
        limit: usize,
        now: DateTime<Utc>,
    ) -> LatticeResult<Vec<AnnotatedCandidate>> {
        let embedding = self.resolve_embedding(goal)?;
        let mut candidates = self.resolve_search(&embedding, threshold, limit, history)?;

        // Day counts are request-scoped; never trust them from the cache.
        for candidate in &mut candidates {
            candidate.days_since_last_use = candidate
                .last_reflected_at
                .map(|t| (now - t).num_days().max(0));
        }

        dedupe_by_id(&mut candidates);
        candidates.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(limit);
        Ok(candidates)
    }

    /// Goal text → embedding, through the cache and retry layer.
    fn resolve_embedding(&self, goal: &str) -> LatticeResult<Vec<f32>> {
        let key = keys::embedding_key(goal);
        if let Some(vector) = self.embedding_cache.get(&key) {
            debug!(key = %key, "embedding cache hit");
            return Ok(vector);
        }

        let vector = execute_with_retry(self.retry, None, || {
            self.embedder
                .embed(goal)
                .map_err(|e| LatticeError::EmbeddingService {
                    reason: e.to_string(),
                })
        })?;

        self.embedding_cache.insert(key, vector.clone());
        Ok(vector)
    }

    /// Embedding → annotated search results, through the cache and retry
    /// layer. The cache key carries a history fingerprint so a user's
    /// changing history invalidates stale annotations.
    fn resolve_search(
        &self,
        embedding: &[f32],
        threshold: f64,
        limit: usize,
        history: &[LearnedConcept],
    ) -> LatticeResult<Vec<AnnotatedCandidate>> {
        let history_ids: Vec<String> = history.iter().map(|h| h.concept_id.clone()).collect();
        let fingerprint = (!history_ids.is_empty()).then(|| keys::history_fingerprint(&history_ids));
        let key = keys::search_key(embedding, threshold, limit, fingerprint.as_deref());

        if let Some(cached) = self.search_cache.get(&key) {
            debug!(key = %key, hits = cached.len(), "search cache hit");
            return Ok(cached);
        }

        let hits = execute_with_retry(self.retry, None, || {
            self.corpus
                .search_by_embedding(embedding, threshold, limit)
                .map_err(|e| LatticeError::DatabaseSearch {
                    reason: e.to_string(),
                })
        })?;

        let by_id: HashMap<&str, &LearnedConcept> = history
            .iter()
            .map(|h| (h.concept_id.as_str(), h))
            .collect();

        let annotated: Vec<AnnotatedCandidate> = hits
            .into_iter()
            .map(|hit| match by_id.get(hit.concept.id.as_str()) {
                Some(record) => {
                    AnnotatedCandidate::learned_hit(hit, record.last_reflected_at, record.rating)
                }
                None => AnnotatedCandidate::new_hit(hit),
            })
            .collect();

        debug!(hits = annotated.len(), "search cache miss, annotated fresh results");
        self.search_cache.insert(key, annotated.clone());
        Ok(annotated)
    }
}

/// Drop duplicate concept ids, keeping the highest-similarity occurrence.
fn dedupe_by_id(candidates: &mut Vec<AnnotatedCandidate>) {
    let mut best: HashMap<String, f64> = HashMap::new();
    for c in candidates.iter() {
        let entry = best.entry(c.concept.id.clone()).or_insert(f64::MIN);
        if c.similarity > *entry {
            *entry = c.similarity;
        }
    }
    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
    candidates.retain(|c| {
        let is_best = (c.similarity - best[&c.concept.id]).abs() < f64::EPSILON;
        is_best && seen.insert(c.concept.id.clone())
    });
}
