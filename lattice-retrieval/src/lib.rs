//! # lattice-retrieval
//!
//! The standard generation pipeline's stages, in dependency order:
//! goal-context analysis → candidate retrieval (cache + retry) →
//! multi-factor scoring → greedy curation with synergy → progression
//! ordering. The orchestration that strings them together lives in
//! `lattice-engine`.

pub mod candidates;
pub mod curation;
pub mod goal;
pub mod ordering;
pub mod scoring;

pub use candidates::CandidateRetriever;
pub use curation::{select, Selected};
pub use goal::analyze_goal_context;
pub use scoring::ScorerWeights;
