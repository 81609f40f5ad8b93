//! A single generation request.

use chrono::{DateTime, Utc};

use crate::concept::LearnedConcept;

/// Borrowed view of one generation request, handed to a strategy.
///
/// `goal` is the validated (possibly rewritten) goal text. `now` is
/// injectable so tests can pin the clock.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub user_id: &'a str,
    pub goal: &'a str,
    pub history: &'a [LearnedConcept],
    pub now: DateTime<Utc>,
}
