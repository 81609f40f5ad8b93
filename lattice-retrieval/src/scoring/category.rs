//! Category-alignment signal.

use lattice_core::config::CurationConfig;
use lattice_core::goal::GoalContext;

/// Base score per category (0.3 unknown, 0.4–0.5 known), boosted by the
/// goal classification (+0.2), domain affinity (+0.15), and urgency
/// affinity (+0.1). Capped at 1.0.
pub fn alignment(category: &str, ctx: &GoalContext, config: &CurationConfig) -> f64 {
    let mut score = config.base_category_score(category);

    if config.axis_affinity_hit(ctx, category) {
        score += 0.2;
    }
    if config.domain_affinity_hit(ctx.domain, category) {
        score += 0.15;
    }
    if ctx.immediate && config.urgency_affinity_hit(category) {
        score += 0.1;
    }

    score.min(1.0)
}
