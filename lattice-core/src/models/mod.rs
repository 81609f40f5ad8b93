pub mod candidate;
pub mod request;
pub mod roadmap;
pub mod scored;

pub use candidate::{AnnotatedCandidate, SearchHit};
pub use request::GenerationRequest;
pub use roadmap::{
    estimate_duration, LearningStatus, ReinforcementContext, Roadmap, RoadmapStep, RoadmapSummary,
};
pub use scored::{ScoreBreakdown, ScoredCandidate};
