//! Analysis Result
//!
//! The structured reply from the AI service. Wire names are camelCase to
//! match the declared response schema; per-item fields default to empty so
//! a non-compliant item never takes the whole result down with it.
//!
//! A result is created once per successful request, is immutable
//! thereafter, and is discarded on reset.

use serde::{Deserialize, Serialize};

/// A recommended career with market context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub growth_potential: String,
    /// Why this career fits the user's profile
    #[serde(default)]
    pub reasoning: String,
    /// Search term a rendering layer can use to illustrate the career
    #[serde(default)]
    pub image_search_term: String,
}

/// A motivational video recommendation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// A web citation the service grounded its answer on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// The parsed career analysis.
///
/// `top_careers` is expected to hold three entries and
/// `motivational_videos` three as well, but any count the service returns
/// is carried through unchanged. `search_sources` comes from the reply's
/// grounding metadata, not the JSON payload, and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    pub persona: String,
    pub summary: String,
    #[serde(default)]
    pub top_careers: Vec<CareerMatch>,
    #[serde(default)]
    pub motivational_videos: Vec<VideoResource>,
    #[serde(default)]
    pub search_sources: Vec<GroundingSource>,
    pub empathetic_note: String,
}
