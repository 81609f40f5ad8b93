//! Goal-context analysis.
//!
//! A pure keyword-pattern function over lower-cased goal text. The six
//! boolean axes are independent; the domain is single-valued with first
//! match winning. Keyword tables are hardcoded here in the same spirit as
//! the scorer's weight constants — heuristic, not data-derived.

use lattice_core::goal::{GoalContext, GoalDomain};

const BEHAVIORAL: &[&str] = &[
    "habit", "stop", "start", "routine", "consistent", "behavior", "procrastinat", "discipline",
    "every day", "daily",
];
const COGNITIVE: &[&str] = &[
    "think", "decision", "decide", "judg", "reason", "analy", "bias", "logic", "problem",
    "understand",
];
const EMOTIONAL: &[&str] = &[
    "feel", "anxiety", "anxious", "stress", "confiden", "fear", "emotion", "overwhelm", "calm",
    "worry",
];
const SKILL: &[&str] = &[
    "learn", "skill", "improve", "master", "practice", "better at", "communicat", "develop",
];
const IMMEDIATE: &[&str] = &[
    "today", "right now", "quickly", "urgent", "asap", "this week", "immediately", "fast",
];
const LONG_TERM: &[&str] = &[
    "eventually", "long term", "long-term", "career", "life", "someday", "over time", "years",
];

const PROFESSIONAL: &[&str] = &[
    "work", "career", "job", "business", "meeting", "manager", "team", "professional",
];
const RELATIONAL: &[&str] = &[
    "relationship", "partner", "friend", "family", "marriage", "social", "people",
];
const HEALTH: &[&str] = &[
    "health", "fitness", "exercise", "sleep", "diet", "weight", "energy",
];
const FINANCIAL: &[&str] = &[
    "money", "finance", "invest", "saving", "budget", "debt", "spend",
];

fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

/// Classify a goal across the six axes and its life domain.
pub fn analyze_goal_context(goal: &str) -> GoalContext {
    let text = goal.to_lowercase();

    let domain = if matches_any(&text, PROFESSIONAL) {
        GoalDomain::Professional
    } else if matches_any(&text, RELATIONAL) {
        GoalDomain::Relational
    } else if matches_any(&text, HEALTH) {
        GoalDomain::Health
    } else if matches_any(&text, FINANCIAL) {
        GoalDomain::Financial
    } else {
        GoalDomain::Personal
    };

    GoalContext {
        behavioral: matches_any(&text, BEHAVIORAL),
        cognitive: matches_any(&text, COGNITIVE),
        emotional: matches_any(&text, EMOTIONAL),
        skill_based: matches_any(&text, SKILL),
        immediate: matches_any(&text, IMMEDIATE),
        long_term: matches_any(&text, LONG_TERM),
        domain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_goal_is_cognitive_and_skill_based() {
        let ctx = analyze_goal_context("I want to improve my decision making skills");
        assert!(ctx.cognitive);
        assert!(ctx.skill_based);
        assert!(!ctx.emotional);
        assert_eq!(ctx.domain, GoalDomain::Personal);
    }

    #[test]
    fn domain_first_match_wins() {
        // "work" (professional) appears before any financial keyword matters.
        let ctx = analyze_goal_context("I want to budget my money better at work");
        assert_eq!(ctx.domain, GoalDomain::Professional);
    }

    #[test]
    fn axes_are_independent() {
        let ctx = analyze_goal_context("build a daily exercise habit and stop feeling anxious");
        assert!(ctx.behavioral);
        assert!(ctx.emotional);
        assert_eq!(ctx.domain, GoalDomain::Health);
    }

    #[test]
    fn urgency_and_horizon_detected() {
        let ctx = analyze_goal_context("make progress this week on my long term career plan");
        assert!(ctx.immediate);
        assert!(ctx.long_term);
    }

    #[test]
    fn empty_goal_defaults_to_personal() {
        let ctx = analyze_goal_context("");
        assert_eq!(ctx.domain, GoalDomain::Personal);
        assert!(!ctx.behavioral && !ctx.cognitive && !ctx.emotional);
    }
}
