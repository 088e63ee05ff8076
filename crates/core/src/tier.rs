//! Experience Tiers
//!
//! Buckets candidates by years of experience. The tier governs how many
//! questions the opening question set asks for and how hard they are.

use serde::{Deserialize, Serialize};

/// Experience-based interview tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceTier {
    /// Less than 2 years
    Junior,
    /// 2 to 4 years
    MidLevel,
    /// 5 years or more
    Senior,
}

impl ExperienceTier {
    /// Select the tier for the given years of experience.
    ///
    /// Boundaries land in the higher tier: 2 years is mid-level, 5 is senior.
    pub fn from_years(years: u32) -> Self {
        match years {
            0..=1 => Self::Junior,
            2..=4 => Self::MidLevel,
            _ => Self::Senior,
        }
    }

    /// Label used in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::MidLevel => "mid-level",
            Self::Senior => "senior",
        }
    }

    /// Number of questions requested in the opening question set
    pub fn question_count(&self) -> usize {
        match self {
            Self::Junior => 3,
            Self::MidLevel => 4,
            Self::Senior => 5,
        }
    }

    /// Difficulty band requested from the model
    pub fn complexity(&self) -> &'static str {
        match self {
            Self::Junior => "basic to intermediate",
            Self::MidLevel => "intermediate to advanced",
            Self::Senior => "advanced to expert",
        }
    }
}

impl std::fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
