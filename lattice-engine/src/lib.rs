//! # lattice-engine
//!
//! The orchestrator: validates the goal, picks a generation strategy
//! (standard retrieval or advanced synthesis), runs it with shared caches
//! and retry, post-checks the structural invariants of the result, and
//! hands the finished roadmap back to the caller.

pub mod assembly;
pub mod engine;
pub mod strategy;
pub mod telemetry;

pub use engine::RoadmapEngine;
pub use strategy::StandardStrategy;
