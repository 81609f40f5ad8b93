//! Goal classification types.
//!
//! A goal is classified along six independent boolean axes plus a single
//! life domain. Classification itself is a pure keyword function that lives
//! in `lattice-retrieval::goal`; only the types live here.

use serde::{Deserialize, Serialize};

/// Life domain of a goal. First keyword match wins, default `Personal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalDomain {
    Professional,
    Relational,
    Health,
    Financial,
    Personal,
}

impl GoalDomain {
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Relational => "relational",
            Self::Health => "health",
            Self::Financial => "financial",
            Self::Personal => "personal",
        }
    }
}

/// Classification of a goal across six independent axes plus a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalContext {
    pub behavioral: bool,
    pub cognitive: bool,
    pub emotional: bool,
    pub skill_based: bool,
    pub immediate: bool,
    pub long_term: bool,
    pub domain: GoalDomain,
}

impl GoalContext {
    /// Names of the active classification axes, used to key affinity tables.
    pub fn axes(&self) -> Vec<&'static str> {
        let mut axes = Vec::new();
        if self.behavioral {
            axes.push("behavioral");
        }
        if self.cognitive {
            axes.push("cognitive");
        }
        if self.emotional {
            axes.push("emotional");
        }
        if self.skill_based {
            axes.push("skill");
        }
        axes
    }
}

impl Default for GoalContext {
    fn default() -> Self {
        Self {
            behavioral: false,
            cognitive: false,
            emotional: false,
            skill_based: false,
            immediate: false,
            long_term: false,
            domain: GoalDomain::Personal,
        }
    }
}
