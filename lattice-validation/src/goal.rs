//! Goal-text pre-check.
//!
//! Rejects vague or compound goals, rewrites negative framings into
//! approach goals, and appends a caveat when the language smells of
//! perfectionism. Runs before any I/O.

const MIN_GOAL_LENGTH: usize = 10;

const VAGUE_PHRASES: &[&str] = &[
    "be better",
    "get better",
    "improve myself",
    "be happy",
    "be successful",
    "feel good",
    "do more",
    "be smarter",
];

const MULTI_GOAL_INDICATORS: &[&str] = &[" and also ", " plus ", " as well as "];

/// (negative framing, approach rewrite) applied case-insensitively.
const NEGATIVE_REWRITES: &[(&str, &str)] = &[
    ("don't want to be", "want to overcome being"),
    ("do not want to be", "want to overcome being"),
    ("stop being", "overcome being"),
    ("hate being", "want to move past being"),
];

const PERFECTIONISM_MARKERS: &[&str] = &["perfect", "always ", "never fail", "100%", "flawless"];

const PERFECTIONISM_CAVEAT: &str = " (aim for consistent progress, not perfection)";

/// Result of the pre-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalValidation {
    pub is_valid: bool,
    pub error: Option<String>,
    /// Rewritten goal text when valid.
    pub processed_goal: Option<String>,
}

impl GoalValidation {
    fn rejected(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            processed_goal: None,
        }
    }

    fn accepted(goal: String) -> Self {
        Self {
            is_valid: true,
            error: None,
            processed_goal: Some(goal),
        }
    }
}

/// Validate and normalize a goal description.
pub fn validate_goal(goal: &str) -> GoalValidation {
    let trimmed = goal.trim();
    let lower = trimmed.to_lowercase();

    if trimmed.len() < MIN_GOAL_LENGTH {
        return GoalValidation::rejected(
            "Your goal is too short. Describe what you want to achieve in a full sentence.",
        );
    }

    if VAGUE_PHRASES.iter().any(|p| lower.contains(p)) {
        return GoalValidation::rejected(
            "Your goal is too vague. Make it more specific: what would success look like?",
        );
    }

    let mut processed = rewrite_negatives(trimmed);
    let processed_lower = processed.to_lowercase();

    if MULTI_GOAL_INDICATORS.iter().any(|p| processed_lower.contains(p))
        || processed_lower.contains(';')
        || has_numbered_list(&processed_lower)
    {
        return GoalValidation::rejected(
            "That looks like several goals at once. Pick one goal per roadmap.",
        );
    }

    if PERFECTIONISM_MARKERS.iter().any(|p| processed_lower.contains(p)) {
        processed.push_str(PERFECTIONISM_CAVEAT);
    }

    GoalValidation::accepted(processed)
}

/// Rewrite common negative framings into approach goals, preserving the
/// original casing outside the matched span.
fn rewrite_negatives(goal: &str) -> String {
    let mut out = goal.to_string();
    for (pattern, replacement) in NEGATIVE_REWRITES {
        out = replace_case_insensitive(&out, pattern, replacement);
    }
    // "… anymore" is redundant once the framing is positive.
    out = replace_case_insensitive(&out, " anymore", "");
    out.trim_end().to_string()
}

fn replace_case_insensitive(haystack: &str, pattern: &str, replacement: &str) -> String {
    let lower = haystack.to_lowercase();
    let pattern = pattern.to_lowercase();
    match lower.find(&pattern) {
        // Lowercasing can shift byte offsets for non-ASCII text; only
        // splice when the match lands on char boundaries of the original.
        Some(start)
            if haystack.is_char_boundary(start)
                && haystack.is_char_boundary(start + pattern.len()) =>
        {
            let end = start + pattern.len();
            format!("{}{}{}", &haystack[..start], replacement, &haystack[end..])
        }
        _ => haystack.to_string(),
    }
}

fn has_numbered_list(text: &str) -> bool {
    text.contains("1.") && text.contains("2.") || text.contains("1)") && text.contains("2)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_goals() {
        let v = validate_goal("win");
        assert!(!v.is_valid);
        assert!(v.error.is_some());
    }

    #[test]
    fn rejects_vague_goals() {
        let v = validate_goal("I want to be better");
        assert!(!v.is_valid);
        assert!(v.error.unwrap().contains("vague"));
    }

    #[test]
    fn rejects_multiple_goals() {
        let v = validate_goal("I want to be more productive and also improve my relationships");
        assert!(!v.is_valid);
        assert!(v.error.unwrap().contains("several goals"));
    }

    #[test]
    fn rejects_semicolon_lists() {
        let v = validate_goal("learn chess; get fit; read more");
        assert!(!v.is_valid);
    }

    #[test]
    fn rejects_numbered_lists() {
        let v = validate_goal("my goals: 1. run a marathon 2. write a book");
        assert!(!v.is_valid);
    }

    #[test]
    fn rewrites_negative_framing_to_overcome() {
        let v = validate_goal("I don't want to be lazy anymore");
        assert!(v.is_valid);
        let processed = v.processed_goal.unwrap();
        assert!(processed.contains("overcome"), "got: {processed}");
        assert!(!processed.contains("anymore"));
    }

    #[test]
    fn appends_perfectionism_caveat() {
        let v = validate_goal("I want to give a flawless presentation at work");
        assert!(v.is_valid);
        assert!(v.processed_goal.unwrap().contains("consistent progress"));
    }

    #[test]
    fn accepts_a_specific_goal_untouched() {
        let v = validate_goal("I want to improve my decision making skills");
        assert!(v.is_valid);
        assert_eq!(
            v.processed_goal.unwrap(),
            "I want to improve my decision making skills"
        );
    }
}
