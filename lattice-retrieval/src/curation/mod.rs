//! Curation: greedy selection of 5–7 concepts with category caps, type
//! balance, and synergy bonuses.

pub mod selector;
pub mod synergy;

use lattice_core::models::ScoredCandidate;

pub use selector::select;

/// A curated pick: the scored candidate plus the synergy-adjusted score it
/// was selected with and whether it was seeded as foundational.
#[derive(Debug, Clone)]
pub struct Selected {
    pub candidate: ScoredCandidate,
    /// `final_score` plus the synergy bonus at the moment of selection.
    pub adjusted_score: f64,
    pub foundational: bool,
}
