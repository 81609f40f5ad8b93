//! Collaborator contracts and the generation-strategy seam.

use crate::concept::{Concept, LearnedConcept};
use crate::errors::LatticeResult;
use crate::models::{GenerationRequest, Roadmap, SearchHit};

/// Embedding generation collaborator. Implemented outside this core.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a fixed-length vector.
    fn embed(&self, text: &str) -> LatticeResult<Vec<f32>>;

    /// Dimensionality of produced embeddings.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

/// Concept corpus collaborator: approximate nearest-neighbour search plus
/// a full dump for the synthesis path.
pub trait ConceptSearch: Send + Sync {
    /// Up to `limit` concepts at or above `threshold` similarity.
    fn search_by_embedding(
        &self,
        embedding: &[f32],
        threshold: f64,
        limit: usize,
    ) -> LatticeResult<Vec<SearchHit>>;

    /// Full corpus dump. Used only by the advanced-synthesis path.
    fn all_concepts(&self) -> LatticeResult<Vec<Concept>>;
}

/// Roadmap persistence collaborator. The core engine never calls this; it
/// returns the finished roadmap for an external caller to persist.
pub trait RoadmapStore: Send + Sync {
    /// Persist a finished roadmap, returning its storage id.
    fn persist(&self, user_id: &str, roadmap: &Roadmap) -> LatticeResult<String>;
}

/// One way of turning a request into a roadmap.
///
/// The standard retrieval pipeline and the advanced-synthesis path both
/// implement this; the engine picks one by policy per request.
pub trait GenerationStrategy {
    fn name(&self) -> &'static str;

    /// Whether this strategy should handle a user with this history.
    fn applies(&self, history: &[LearnedConcept]) -> bool;

    fn generate(&self, request: &GenerationRequest<'_>) -> LatticeResult<Roadmap>;
}
