//! Shared deterministic fixtures for lattice tests.
//!
//! Everything here is pure and seeded: the same corpus, embeddings, and
//! history come back on every run. Embeddings are blake3-derived pseudo
//! vectors whose pairwise similarity always clears the retrieval
//! threshold, so tests exercise scoring and curation rather than vector
//! math.

mod corpus;
mod stubs;

pub use corpus::{
    corpus_of, curated_corpus, history_for, learned, pseudo_embedding, small_corpus, EMBEDDING_DIMS,
};
pub use stubs::{FlakyCorpus, FlakyEmbedder, RecordingStore, StubCorpus, StubEmbedder};
