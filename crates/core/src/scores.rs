//! Psychometric Scores
//!
//! The five scoring dimensions and the accumulator vector the quiz folds
//! answers into. The category set is closed: every question targets exactly
//! one of these dimensions and the vector always carries all five.

use serde::{Deserialize, Serialize};

/// Scoring dimension a question contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Analytical,
    Creative,
    Social,
    Leadership,
    Practical,
}

impl ScoreCategory {
    /// All categories, in canonical order
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::Analytical,
        ScoreCategory::Creative,
        ScoreCategory::Social,
        ScoreCategory::Leadership,
        ScoreCategory::Practical,
    ];

    /// Get the lowercase identifier used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::Analytical => "analytical",
            ScoreCategory::Creative => "creative",
            ScoreCategory::Social => "social",
            ScoreCategory::Leadership => "leadership",
            ScoreCategory::Practical => "practical",
        }
    }

    /// Get the human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Analytical => "Analytical",
            ScoreCategory::Creative => "Creative",
            ScoreCategory::Social => "Social",
            ScoreCategory::Leadership => "Leadership",
            ScoreCategory::Practical => "Practical",
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accumulated scores across the five dimensions.
///
/// Starts at zero everywhere; the controller applies one answer per
/// question, in question order, then hands the finalized vector to the
/// next phase by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub analytical: u32,
    pub creative: u32,
    pub social: u32,
    pub leadership: u32,
    pub practical: u32,
}

impl ScoreVector {
    /// Read the accumulator for one category
    pub fn get(&self, category: ScoreCategory) -> u32 {
        match category {
            ScoreCategory::Analytical => self.analytical,
            ScoreCategory::Creative => self.creative,
            ScoreCategory::Social => self.social,
            ScoreCategory::Leadership => self.leadership,
            ScoreCategory::Practical => self.practical,
        }
    }

    /// Return a copy with `points` added to exactly one category.
    ///
    /// Pure: the receiver is unchanged. Call-at-most-once-per-question
    /// sequencing is the controller's job, not enforced here.
    #[must_use]
    pub fn apply(mut self, category: ScoreCategory, points: u32) -> Self {
        match category {
            ScoreCategory::Analytical => self.analytical += points,
            ScoreCategory::Creative => self.creative += points,
            ScoreCategory::Social => self.social += points,
            ScoreCategory::Leadership => self.leadership += points,
            ScoreCategory::Practical => self.practical += points,
        }
        self
    }

    /// Sum of all five accumulators
    pub fn total(&self) -> u32 {
        ScoreCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}
