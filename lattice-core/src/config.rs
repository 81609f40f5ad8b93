//! Engine configuration.
//!
//! Every struct implements `Default` with the built-in tables and can be
//! overridden from TOML. The curated affinity material in [`CurationConfig`]
//! is deliberately configuration, not code: title-matching tables are
//! brittle to corpus renames and must be replaceable without a rebuild.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::goal::{GoalContext, GoalDomain};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub retrieval: RetrievalConfig,
    pub cache: CacheConfig,
    pub retry: RetryConfig,
    pub curation: CurationConfig,
}

impl EngineConfig {
    /// Parse a config from TOML, falling back to defaults per section.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub similarity_threshold: f64,
    pub candidate_limit: usize,
    pub min_candidates: usize,
    pub min_steps: usize,
    pub max_steps: usize,
    pub synthesis_threshold: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: constants::SIMILARITY_THRESHOLD,
            candidate_limit: constants::CANDIDATE_LIMIT,
            min_candidates: constants::MIN_CANDIDATES,
            min_steps: constants::MIN_STEPS,
            max_steps: constants::MAX_STEPS,
            synthesis_threshold: constants::SYNTHESIS_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub embedding_capacity: u64,
    pub search_capacity: u64,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            embedding_capacity: 512,
            search_capacity: 256,
            ttl_secs: 1800,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: constants::DEFAULT_MAX_RETRIES,
            initial_delay_ms: 200,
            max_delay_ms: 5_000,
        }
    }
}

/// Curated tables driving scoring affinity, synergy, and ordering.
///
/// Axis keys are the strings produced by [`GoalContext::axes`]; title
/// matching is case-insensitive containment in both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationConfig {
    /// Concepts prioritized early in every roadmap.
    pub foundational: Vec<String>,
    /// Extra foundational titles per classification axis.
    pub axis_foundations: HashMap<String, Vec<String>>,
    /// Categories boosted (+0.2) per classification axis.
    pub axis_category_affinity: HashMap<String, Vec<String>>,
    /// Categories boosted (+0.15) per goal domain.
    pub domain_category_affinity: HashMap<String, Vec<String>>,
    /// Categories boosted (+0.1) for immediate goals.
    pub urgency_categories: Vec<String>,
    /// Base alignment score per known category (default 0.3).
    pub category_base_scores: HashMap<String, f64>,
    /// Category fill order per classification axis.
    pub axis_priority_categories: HashMap<String, Vec<String>>,
    /// Category fill order per goal domain.
    pub domain_priority_categories: HashMap<String, Vec<String>>,
    /// Named concept pairs that reinforce each other.
    pub concept_pairs: Vec<(String, String)>,
    /// Categories considered adjacent to a given category.
    pub category_affinities: HashMap<String, Vec<String>>,
    /// Concepts that give fast visible progress on immediate goals.
    pub quick_wins: Vec<String>,
    /// (prerequisite, dependent) title pairs forcing teaching order.
    pub prerequisites: Vec<(String, String)>,
    /// High-value keywords for the conservative example-match bonus.
    pub high_value_keywords: Vec<String>,
    /// Word groups used as a thematic-relatedness heuristic.
    pub word_groups: Vec<Vec<String>>,
}

impl CurationConfig {
    /// Case-insensitive containment match in either direction.
    pub fn titles_match(entry: &str, title: &str) -> bool {
        let entry = entry.to_lowercase();
        let title = title.to_lowercase();
        title.contains(&entry) || entry.contains(&title)
    }

    /// Foundational titles for this goal: the base allow-list plus the
    /// extensions of every active classification axis.
    pub fn foundational_for(&self, ctx: &GoalContext) -> Vec<&str> {
        let mut titles: Vec<&str> = self.foundational.iter().map(String::as_str).collect();
        for axis in ctx.axes() {
            if let Some(extra) = self.axis_foundations.get(axis) {
                for t in extra {
                    if !titles.contains(&t.as_str()) {
                        titles.push(t);
                    }
                }
            }
        }
        titles
    }

    pub fn is_foundational(&self, title: &str, ctx: &GoalContext) -> bool {
        self.foundational_for(ctx)
            .iter()
            .any(|entry| Self::titles_match(entry, title))
    }

    pub fn is_quick_win(&self, title: &str) -> bool {
        self.quick_wins
            .iter()
            .any(|entry| Self::titles_match(entry, title))
    }

    /// Category fill order for this goal: active-axis lists first, then the
    /// domain list, deduplicated in encounter order.
    pub fn priority_categories(&self, ctx: &GoalContext) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let mut push_all = |cats: &Vec<String>, out: &mut Vec<String>| {
            for c in cats {
                if !out.contains(c) {
                    out.push(c.clone());
                }
            }
        };
        for axis in ctx.axes() {
            if let Some(cats) = self.axis_priority_categories.get(axis) {
                push_all(cats, &mut out);
            }
        }
        if let Some(cats) = self.domain_priority_categories.get(ctx.domain.label()) {
            push_all(cats, &mut out);
        }
        out
    }

    /// Base alignment score for a category, 0.3 when unknown.
    pub fn base_category_score(&self, category: &str) -> f64 {
        self.category_base_scores
            .get(category)
            .copied()
            .unwrap_or(0.3)
    }

    /// Whether two titles share a thematic word group.
    pub fn share_word_group(&self, a: &str, b: &str) -> bool {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        self.word_groups.iter().any(|group| {
            group.iter().any(|w| a.contains(w.as_str()))
                && group.iter().any(|w| b.contains(w.as_str()))
        })
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn string_map(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), string_vec(v)))
        .collect()
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self {
            foundational: string_vec(&[
                "First Principles Thinking",
                "Inversion",
                "Second-Order Thinking",
                "Circle of Competence",
            ]),
            axis_foundations: string_map(&[
                ("behavioral", &["Habit Loop"]),
                ("cognitive", &["Probabilistic Thinking"]),
                ("emotional", &["Hanlon's Razor"]),
                ("skill", &["Deliberate Practice"]),
            ]),
            axis_category_affinity: string_map(&[
                ("behavioral", &["psychology", "productivity"]),
                ("cognitive", &["decision-making", "probability", "systems-thinking"]),
                ("emotional", &["psychology", "communication"]),
                ("skill", &["learning", "problem-solving", "productivity"]),
            ]),
            domain_category_affinity: string_map(&[
                ("professional", &["decision-making", "productivity", "economics", "communication"]),
                ("relational", &["communication", "psychology"]),
                ("health", &["psychology", "productivity"]),
                ("financial", &["economics", "probability", "decision-making"]),
                ("personal", &["psychology", "learning", "productivity"]),
            ]),
            urgency_categories: string_vec(&["decision-making", "productivity"]),
            category_base_scores: [
                ("decision-making", 0.5),
                ("problem-solving", 0.5),
                ("psychology", 0.45),
                ("systems-thinking", 0.45),
                ("economics", 0.4),
                ("probability", 0.4),
                ("communication", 0.4),
                ("productivity", 0.4),
                ("learning", 0.4),
                ("logic", 0.4),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
            axis_priority_categories: string_map(&[
                ("behavioral", &["psychology", "productivity", "decision-making"]),
                ("cognitive", &["decision-making", "probability", "systems-thinking"]),
                ("emotional", &["psychology", "communication", "decision-making"]),
                ("skill", &["learning", "problem-solving", "productivity"]),
            ]),
            domain_priority_categories: string_map(&[
                ("professional", &["decision-making", "productivity", "communication"]),
                ("relational", &["communication", "psychology"]),
                ("health", &["psychology", "productivity"]),
                ("financial", &["economics", "probability", "decision-making"]),
                ("personal", &["psychology", "decision-making", "learning"]),
            ]),
            concept_pairs: vec![
                ("First Principles Thinking".into(), "Confirmation Bias".into()),
                ("Inversion".into(), "Second-Order Thinking".into()),
                ("Probabilistic Thinking".into(), "Availability Heuristic".into()),
                ("Opportunity Cost".into(), "Loss Aversion".into()),
                ("Margin of Safety".into(), "Anchoring Bias".into()),
            ],
            category_affinities: string_map(&[
                ("decision-making", &["probability", "psychology", "economics"]),
                ("probability", &["decision-making", "economics"]),
                ("psychology", &["decision-making", "communication"]),
                ("systems-thinking", &["problem-solving", "decision-making"]),
                ("economics", &["decision-making", "probability"]),
                ("communication", &["psychology", "logic"]),
                ("productivity", &["psychology", "learning"]),
                ("learning", &["productivity", "psychology"]),
                ("logic", &["communication", "decision-making"]),
                ("problem-solving", &["systems-thinking", "learning"]),
            ]),
            quick_wins: string_vec(&["Eisenhower Matrix", "Pareto Principle", "Inversion"]),
            prerequisites: vec![
                ("First Principles Thinking".into(), "Second-Order Thinking".into()),
                ("Probabilistic Thinking".into(), "Margin of Safety".into()),
            ],
            high_value_keywords: string_vec(&[
                "decision", "focus", "habit", "bias", "think", "learn", "improve",
                "productive", "communicate", "risk",
            ]),
            word_groups: vec![
                string_vec(&["decision", "choice", "judgment"]),
                string_vec(&["risk", "probability", "uncertainty", "odds"]),
                string_vec(&["habit", "behavior", "routine"]),
                string_vec(&["bias", "fallacy", "error"]),
                string_vec(&["learn", "study", "skill", "practice"]),
                string_vec(&["system", "feedback", "loop"]),
            ],
        }
    }
}

impl CurationConfig {
    /// Categories with an affinity boost for this goal classification.
    pub fn axis_affinity_hit(&self, ctx: &GoalContext, category: &str) -> bool {
        ctx.axes().iter().any(|axis| {
            self.axis_category_affinity
                .get(*axis)
                .is_some_and(|cats| cats.iter().any(|c| c == category))
        })
    }

    pub fn domain_affinity_hit(&self, domain: GoalDomain, category: &str) -> bool {
        self.domain_category_affinity
            .get(domain.label())
            .is_some_and(|cats| cats.iter().any(|c| c == category))
    }

    pub fn urgency_affinity_hit(&self, category: &str) -> bool {
        self.urgency_categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = EngineConfig::default();
        let raw = toml::to_string(&config).expect("serialize");
        let parsed = EngineConfig::from_toml_str(&raw).expect("parse");
        assert_eq!(
            parsed.retrieval.candidate_limit,
            config.retrieval.candidate_limit
        );
        assert_eq!(parsed.curation.foundational, config.curation.foundational);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed =
            EngineConfig::from_toml_str("[retrieval]\nsimilarity_threshold = 0.5\n").expect("parse");
        assert!((parsed.retrieval.similarity_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(parsed.retrieval.candidate_limit, 30);
        assert!(!parsed.curation.foundational.is_empty());
    }

    #[test]
    fn foundational_extends_per_axis() {
        let config = CurationConfig::default();
        let ctx = GoalContext {
            cognitive: true,
            ..GoalContext::default()
        };
        assert!(config.is_foundational("Probabilistic Thinking", &ctx));
        assert!(!config.is_foundational("Probabilistic Thinking", &GoalContext::default()));
    }

    #[test]
    fn title_matching_is_case_insensitive_containment() {
        assert!(CurationConfig::titles_match("inversion", "Inversion"));
        assert!(CurationConfig::titles_match(
            "Inversion",
            "inversion (thinking backwards)"
        ));
        assert!(!CurationConfig::titles_match("Inversion", "Habit Loop"));
    }

    #[test]
    fn priority_categories_dedupe_across_axes() {
        let config = CurationConfig::default();
        let ctx = GoalContext {
            behavioral: true,
            cognitive: true,
            ..GoalContext::default()
        };
        let cats = config.priority_categories(&ctx);
        let unique: std::collections::HashSet<&String> = cats.iter().collect();
        assert_eq!(unique.len(), cats.len());
        assert!(cats.contains(&"psychology".to_string()));
        assert!(cats.contains(&"decision-making".to_string()));
    }
}
