//! # lattice-core
//!
//! Foundation crate for the Lattice roadmap engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod concept;
pub mod config;
pub mod constants;
pub mod errors;
pub mod goal;
pub mod models;
pub mod spaced;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use concept::{Concept, ConceptType, GoalExample, LearnedConcept, Rating};
pub use config::EngineConfig;
pub use errors::{LatticeError, LatticeResult};
pub use goal::{GoalContext, GoalDomain};
pub use models::{
    AnnotatedCandidate, GenerationRequest, LearningStatus, Roadmap, RoadmapStep, ScoreBreakdown,
    ScoredCandidate, SearchHit,
};
