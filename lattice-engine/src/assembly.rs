//! Roadmap assembly: turn an ordered selection into the output artifact,
//! with per-step rationale, focus guidance, and reinforcement context.

use lattice_core::config::CurationConfig;
use lattice_core::constants::WEEKS_PER_STEP;
use lattice_core::goal::GoalContext;
use lattice_core::models::{
    estimate_duration, LearningStatus, ReinforcementContext, Roadmap, RoadmapStep,
};
use lattice_core::spaced;
use lattice_retrieval::Selected;

/// Build the final roadmap from the ordered selection. Step order is the
/// position in `ordered`, 1-based.
pub fn build_roadmap(
    ordered: Vec<Selected>,
    goal: &str,
    ctx: &GoalContext,
    config: &CurationConfig,
) -> Roadmap {
    let steps: Vec<RoadmapStep> = ordered
        .iter()
        .enumerate()
        .map(|(i, s)| build_step(s, (i + 1) as u32, ctx, config))
        .collect();

    let summary = Roadmap::summarize(&steps);
    let estimated_duration = estimate_duration(steps.len(), WEEKS_PER_STEP);

    Roadmap {
        goal_description: goal.to_string(),
        steps,
        summary,
        estimated_duration,
    }
}

fn build_step(s: &Selected, order: u32, ctx: &GoalContext, config: &CurationConfig) -> RoadmapStep {
    let candidate = &s.candidate;
    let concept = &candidate.concept;

    let learning_status = if candidate.is_learned {
        LearningStatus::Reinforcement
    } else {
        LearningStatus::New
    };

    let reinforcement_context = candidate.is_learned.then(|| ReinforcementContext {
        days_since_last_use: candidate.days_since_last_use.unwrap_or(0),
        last_rating: candidate.last_rating.unwrap_or_default(),
        spaced_interval: candidate
            .days_since_last_use
            .and_then(spaced::matched_interval)
            .map(spaced::interval_label),
    });

    RoadmapStep {
        order,
        concept_id: concept.id.clone(),
        title: concept.title.clone(),
        concept_type: concept.concept_type,
        category: concept.category.clone(),
        score: s.adjusted_score,
        learning_status,
        reinforcement_context: reinforcement_context.clone(),
        rationale: rationale(s, reinforcement_context.as_ref(), ctx, config),
        suggested_focus: suggested_focus(s),
    }
}

/// One sentence on why this concept made the roadmap.
fn rationale(
    s: &Selected,
    reinforcement: Option<&ReinforcementContext>,
    ctx: &GoalContext,
    config: &CurationConfig,
) -> String {
    let concept = &s.candidate.concept;

    if let Some(context) = reinforcement {
        return match &context.spaced_interval {
            Some(interval) => format!(
                "You learned {} {} days ago; this lands right on its {}, the best moment to \
                 lock it in.",
                concept.title, context.days_since_last_use, interval
            ),
            None => format!(
                "You learned {} {} days ago and it applies directly here; revisiting it will \
                 deepen the {}.",
                concept.title,
                context.days_since_last_use,
                concept.concept_type.label()
            ),
        };
    }

    if s.foundational {
        return format!(
            "{} is a foundational {} that the rest of this roadmap builds on.",
            concept.title,
            concept.concept_type.label()
        );
    }

    if ctx.immediate && config.is_quick_win(&concept.title) {
        return format!(
            "{} gives fast, visible progress, which matters for a goal with your urgency.",
            concept.title
        );
    }

    format!(
        "{} is a strong {} match for this goal through its {} lens.",
        concept.title,
        concept.concept_type.label(),
        concept.category
    )
}

/// Concrete practice guidance, preferring the concept's own worked example.
fn suggested_focus(s: &Selected) -> String {
    let concept = &s.candidate.concept;
    if let Some(example) = concept.examples.first() {
        if let Some(if_then) = &example.if_then {
            return if_then.clone();
        }
        if let Some(mission) = &example.spotting_mission {
            return mission.clone();
        }
    }
    if !concept.application.is_empty() {
        return concept.application.clone();
    }
    format!("Apply {} to one real situation this week.", concept.title)
}
