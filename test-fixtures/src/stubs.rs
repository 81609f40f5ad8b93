//! In-memory stand-ins for the engine's collaborators.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use lattice_core::concept::Concept;
use lattice_core::errors::{LatticeError, LatticeResult};
use lattice_core::models::{Roadmap, SearchHit};
use lattice_core::traits::{ConceptSearch, EmbeddingProvider, RoadmapStore};

use crate::corpus::{pseudo_embedding, EMBEDDING_DIMS};

/// Embedder backed by [`pseudo_embedding`]. Always succeeds.
#[derive(Default)]
pub struct StubEmbedder;

impl EmbeddingProvider for StubEmbedder {
    fn embed(&self, text: &str) -> LatticeResult<Vec<f32>> {
        Ok(pseudo_embedding(text))
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMS
    }

    fn name(&self) -> &str {
        "stub-embedder"
    }
}

/// In-memory corpus with brute-force cosine search.
///
/// Cosine is mapped to `(cos + 1) / 2` so all-positive fixture vectors
/// land well above the default retrieval threshold.
pub struct StubCorpus {
    concepts: Vec<Concept>,
}

impl StubCorpus {
    pub fn new(concepts: Vec<Concept>) -> Self {
        Self { concepts }
    }

    pub fn concepts(&self) -> Vec<Concept> {
        self.concepts.clone()
    }
}

impl ConceptSearch for StubCorpus {
    fn search_by_embedding(
        &self,
        embedding: &[f32],
        threshold: f64,
        limit: usize,
    ) -> LatticeResult<Vec<SearchHit>> {
        let mut hits: Vec<SearchHit> = self
            .concepts
            .iter()
            .map(|c| SearchHit {
                similarity: (cosine(embedding, &c.embedding) + 1.0) / 2.0,
                concept: c.clone(),
            })
            .filter(|hit| hit.similarity >= threshold)
            .collect();
        hits.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);
        Ok(hits)
    }

    fn all_concepts(&self) -> LatticeResult<Vec<Concept>> {
        Ok(self.concepts.clone())
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| f64::from(*x) * f64::from(*y)).sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| f64::from(*x).powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Embedder that fails its first `failures` calls, then behaves like
/// [`StubEmbedder`]. For exercising the retry path.
pub struct FlakyEmbedder {
    failures: u32,
    calls: AtomicU32,
}

impl FlakyEmbedder {
    pub fn failing(failures: u32) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
        }
    }

    /// Total embed calls observed, successes and failures both.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EmbeddingProvider for FlakyEmbedder {
    fn embed(&self, text: &str) -> LatticeResult<Vec<f32>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(LatticeError::EmbeddingService {
                reason: format!("simulated outage, call {call}"),
            });
        }
        Ok(pseudo_embedding(text))
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMS
    }

    fn name(&self) -> &str {
        "flaky-embedder"
    }
}

/// Corpus whose search fails its first `failures` calls.
pub struct FlakyCorpus {
    inner: StubCorpus,
    failures: u32,
    calls: AtomicU32,
}

impl FlakyCorpus {
    pub fn failing(concepts: Vec<Concept>, failures: u32) -> Self {
        Self {
            inner: StubCorpus::new(concepts),
            failures,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConceptSearch for FlakyCorpus {
    fn search_by_embedding(
        &self,
        embedding: &[f32],
        threshold: f64,
        limit: usize,
    ) -> LatticeResult<Vec<SearchHit>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(LatticeError::DatabaseSearch {
                reason: format!("simulated outage, call {call}"),
            });
        }
        self.inner.search_by_embedding(embedding, threshold, limit)
    }

    fn all_concepts(&self) -> LatticeResult<Vec<Concept>> {
        self.inner.all_concepts()
    }
}

/// Store that records every persisted roadmap.
#[derive(Default)]
pub struct RecordingStore {
    persisted: Mutex<Vec<(String, Roadmap)>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.persisted.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn last(&self) -> Option<(String, Roadmap)> {
        self.persisted.lock().ok().and_then(|v| v.last().cloned())
    }
}

impl RoadmapStore for RecordingStore {
    fn persist(&self, user_id: &str, roadmap: &Roadmap) -> LatticeResult<String> {
        let mut persisted = self
            .persisted
            .lock()
            .map_err(|_| LatticeError::Internal {
                details: "recording store poisoned".to_string(),
            })?;
        persisted.push((user_id.to_string(), roadmap.clone()));
        Ok(format!("roadmap-{}", persisted.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::curated_corpus;

    #[test]
    fn stub_search_clears_default_threshold() {
        let corpus = StubCorpus::new(curated_corpus());
        let query = pseudo_embedding("improve my decision making");
        let hits = corpus
            .search_by_embedding(&query, 0.3, 30)
            .expect("search succeeds");
        assert_eq!(hits.len(), curated_corpus().len());
        assert!(hits.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }

    #[test]
    fn flaky_embedder_recovers_after_failures() {
        let embedder = FlakyEmbedder::failing(2);
        assert!(embedder.embed("goal").is_err());
        assert!(embedder.embed("goal").is_err());
        assert!(embedder.embed("goal").is_ok());
        assert_eq!(embedder.calls(), 3);
    }
}
