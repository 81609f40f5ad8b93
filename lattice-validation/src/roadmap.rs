//! Roadmap post-check.
//!
//! Collects every structural defect at once rather than failing on the
//! first, so a broken generation run reports all of its problems.

use std::collections::HashSet;

use lattice_core::concept::ConceptType;
use lattice_core::constants::{MAX_STEPS, MIN_BIAS_OR_FALLACY, MIN_PRIMARY_MODELS, MIN_STEPS};
use lattice_core::models::{LearningStatus, Roadmap};

/// Result of the post-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Assert the structural invariants of a finished roadmap.
pub fn validate_roadmap(roadmap: &Roadmap) -> RoadmapValidation {
    let mut errors = Vec::new();
    let steps = &roadmap.steps;

    if steps.len() < MIN_STEPS || steps.len() > MAX_STEPS {
        errors.push(format!(
            "step count {} outside {}..={}",
            steps.len(),
            MIN_STEPS,
            MAX_STEPS
        ));
    }

    let unique: HashSet<&str> = steps.iter().map(|s| s.concept_id.as_str()).collect();
    if unique.len() != steps.len() {
        errors.push("duplicate concept ids in steps".to_string());
    }

    let primaries = steps
        .iter()
        .filter(|s| s.concept_type == ConceptType::PrimaryModel)
        .count();
    if primaries < MIN_PRIMARY_MODELS {
        errors.push(format!(
            "only {primaries} primary-model steps, need at least {MIN_PRIMARY_MODELS}"
        ));
    }

    let balancing = steps
        .iter()
        .filter(|s| matches!(s.concept_type, ConceptType::Bias | ConceptType::Fallacy))
        .count();
    if balancing < MIN_BIAS_OR_FALLACY {
        errors.push(format!(
            "only {balancing} bias/fallacy steps, need at least {MIN_BIAS_OR_FALLACY}"
        ));
    }

    let new_count = steps
        .iter()
        .filter(|s| s.learning_status == LearningStatus::New)
        .count();
    let reinforcement_count = steps.len() - new_count;
    if roadmap.summary.new_count != new_count
        || roadmap.summary.reinforcement_count != reinforcement_count
        || roadmap.summary.total != steps.len()
    {
        errors.push(format!(
            "summary ({}/{}/{}) does not match steps ({}/{}/{})",
            roadmap.summary.new_count,
            roadmap.summary.reinforcement_count,
            roadmap.summary.total,
            new_count,
            reinforcement_count,
            steps.len()
        ));
    }

    for (i, step) in steps.iter().enumerate() {
        let expected = (i + 1) as u32;
        if step.order != expected {
            errors.push(format!(
                "step order {} at position {}, expected {}",
                step.order, i, expected
            ));
        }
    }

    RoadmapValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
