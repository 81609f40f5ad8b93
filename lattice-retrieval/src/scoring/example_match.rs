//! Goal-example match signal.
//!
//! A conservative bonus (≤ 0.15) from overlap between the goal text and a
//! concept's example goal phrases. Keyword hits require the keyword in both
//! texts; near-duplicate phrasing earns a Jaccard bonus on top.

use std::collections::HashSet;

use lattice_core::concept::GoalExample;
use lattice_core::config::CurationConfig;

const KEYWORD_HIT: f64 = 0.03;
const JACCARD_HIT: f64 = 0.05;
const JACCARD_THRESHOLD: f64 = 0.7;
const CEILING: f64 = 0.15;

pub fn bonus(goal: &str, examples: &[GoalExample], config: &CurationConfig) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let goal_lc = goal.to_lowercase();
    let goal_words = word_set(&goal_lc);

    let mut bonus = 0.0;

    for keyword in &config.high_value_keywords {
        let in_goal = goal_lc.contains(keyword.as_str());
        let in_example = examples
            .iter()
            .any(|e| e.goal.to_lowercase().contains(keyword.as_str()));
        if in_goal && in_example {
            bonus += KEYWORD_HIT;
        }
    }

    for example in examples {
        let example_lc = example.goal.to_lowercase();
        let example_words = word_set(&example_lc);
        if jaccard(&goal_words, &example_words) > JACCARD_THRESHOLD {
            bonus += JACCARD_HIT;
        }
    }

    bonus.min(CEILING)
}

fn word_set(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(goal: &str) -> GoalExample {
        GoalExample {
            goal: goal.into(),
            if_then: None,
            spotting_mission: None,
        }
    }

    #[test]
    fn no_examples_no_bonus() {
        let b = bonus("improve my decisions", &[], &CurationConfig::default());
        assert_eq!(b, 0.0);
    }

    #[test]
    fn shared_keyword_earns_small_bonus() {
        let examples = vec![example("make a better decision under pressure")];
        let b = bonus(
            "improve my decision making",
            &examples,
            &CurationConfig::default(),
        );
        assert!(b > 0.0);
        assert!(b <= CEILING);
    }

    #[test]
    fn near_identical_phrasing_earns_jaccard_bonus() {
        let examples = vec![example("improve my decision making skills")];
        let with_overlap = bonus(
            "improve my decision making skills",
            &examples,
            &CurationConfig::default(),
        );
        let without = bonus(
            "sleep more hours at night",
            &examples,
            &CurationConfig::default(),
        );
        assert!(with_overlap > without);
    }

    #[test]
    fn bonus_never_exceeds_ceiling() {
        let examples: Vec<GoalExample> = (0..10)
            .map(|_| example("improve decision focus habit bias think learn risk"))
            .collect();
        let b = bonus(
            "improve decision focus habit bias think learn risk",
            &examples,
            &CurationConfig::default(),
        );
        assert!((b - CEILING).abs() < f64::EPSILON);
    }
}
