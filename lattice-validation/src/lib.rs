//! # lattice-validation
//!
//! Pure validation functions bracketing generation: the goal pre-check
//! runs before any I/O, the roadmap post-check asserts the structural
//! invariants of the finished artifact.

pub mod goal;
pub mod roadmap;

pub use goal::{validate_goal, GoalValidation};
pub use roadmap::{validate_roadmap, RoadmapValidation};
