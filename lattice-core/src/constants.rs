//! Engine-wide constants: scoring weights, selection bounds, retry defaults.

/// Lattice system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of steps in a finished roadmap.
pub const MIN_STEPS: usize = 5;

/// Maximum number of steps in a finished roadmap.
pub const MAX_STEPS: usize = 7;

/// Minimum usable candidates below which generation fails outright.
pub const MIN_CANDIDATES: usize = 5;

/// Hard cap on candidates entering the scoring stage.
pub const CANDIDATE_LIMIT: usize = 30;

/// Default similarity floor for vector search.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Learned-concept count at which the synthesis strategy takes over.
pub const SYNTHESIS_THRESHOLD: usize = 80;

/// Additive bonus for concepts the user has never seen.
pub const NOVELTY_BONUS: f64 = 0.15;

/// Ceiling of the additive spaced-repetition bonus.
pub const SPACED_REPETITION_BONUS: f64 = 0.05;

/// Canonical spaced-repetition review intervals, in days.
pub const SPACED_INTERVALS: [u32; 5] = [1, 3, 7, 30, 90];

/// Tolerance window around a spaced interval, as a fraction of the interval.
pub const SPACED_INTERVAL_TOLERANCE: f64 = 0.2;

/// Hard cap on the synergy bonus during curation.
pub const SYNERGY_CAP: f64 = 0.3;

/// Per-category pick cap during selection.
pub const CATEGORY_CAP: usize = 2;

/// Relaxed per-category cap when the pick is a reinforcement concept.
pub const CATEGORY_CAP_REINFORCEMENT: usize = 3;

/// Minimum primary-model steps in a finished roadmap.
pub const MIN_PRIMARY_MODELS: usize = 2;

/// Minimum bias-or-fallacy steps in a finished roadmap.
pub const MIN_BIAS_OR_FALLACY: usize = 1;

/// Default retry attempts after the first failure.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Rolling sample window per named operation timer.
pub const TIMER_HISTORY: usize = 100;

/// Estimated learning weeks per roadmap step on the standard path.
pub const WEEKS_PER_STEP: u32 = 1;

/// Duration multiplier applied by the advanced-synthesis path.
pub const SYNTHESIS_DURATION_MULTIPLIER: u32 = 2;
