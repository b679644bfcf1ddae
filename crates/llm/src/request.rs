//! Analysis Request Builder
//!
//! Assembles the outbound request from the finalized score vector and
//! reflection: the natural-language prompt, the fixed counselor system
//! instruction, and the response-shape schema the service must honor.
//!
//! The narrative strings are embedded verbatim. They are opaque user text
//! bound for the service's prompt context, which is the trust boundary;
//! the transport handles any encoding it needs.

use pathfinder_core::reflection::Reflection;
use pathfinder_core::scores::ScoreVector;

/// Counselor persona and output expectations, invariant across requests
const SYSTEM_PROMPT: &str = "\
You are an expert Career Counselor and Psychometric Analyst.
Based on a user's scores in Analytical, Creative, Social, Leadership, and Practical domains, you will provide:
1. A unique \"Career Persona\" name.
2. A deep-dive personality summary.
3. Use Google Search grounding to find 3 REAL-TIME career paths, current salary ranges, and growth potential for the current year.
4. Provide specific reasoning why these match their profile.

IMPORTANT: Always prioritize real, authentic data found via search.
Format your output strictly as a valid JSON object.";

const VIDEO_ADDENDUM: &str =
    "Additionally, find real YouTube video links that are highly motivational and career-oriented.";

/// The assembled request, ready for a transport to carry.
///
/// Building never mutates its inputs, so a rebuild with the same inputs
/// yields an equivalent request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// User-turn prompt embedding scores and narrative verbatim
    pub prompt: String,
    /// Fixed system instruction
    pub system_instruction: String,
}

impl AnalysisRequest {
    /// Build the request from finalized assessment inputs
    pub fn new(scores: &ScoreVector, reflection: &Reflection) -> Self {
        let prompt = format!(
            "\
Conduct a holistic career analysis combining quantitative scores and qualitative narrative:

QUANTITATIVE PROFILE:
- Analytical: {}
- Creative: {}
- Social: {}
- Leadership: {}
- Practical: {}

QUALITATIVE CONTEXT (USER'S STORY):
- Struggles: {}
- Testimonies: {}
- Fears: {}
- Goals: {}

TASK:
1. Identify 3 real-world careers matching BOTH the scores and the user's specific story context.
2. Find REAL-TIME job market trends via Google Search for the current year.
3. Include 3 highly relevant motivational YouTube video recommendations (provide titles and URLs from search).
4. Provide an empathetic note addressing their specific fears and struggles.
5. For each career, suggest an image search term for visualization.",
            scores.analytical,
            scores.creative,
            scores.social,
            scores.leadership,
            scores.practical,
            reflection.struggles,
            reflection.testimonies,
            reflection.fears,
            reflection.goals,
        );

        Self {
            prompt,
            system_instruction: format!("{}\n{}", SYSTEM_PROMPT, VIDEO_ADDENDUM),
        }
    }
}

/// The response-shape contract declared to the service.
///
/// Top-level `persona`, `summary`, `topCareers`, `motivationalVideos`, and
/// `empatheticNote` are mandatory; item objects declare their own required
/// fields. The parser still treats per-item fields leniently because the
/// service is not contractually guaranteed to comply.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "persona": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "empatheticNote": { "type": "STRING" },
            "topCareers": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "salaryRange": { "type": "STRING" },
                        "growthPotential": { "type": "STRING" },
                        "reasoning": { "type": "STRING" },
                        "imageSearchTerm": { "type": "STRING" }
                    },
                    "required": [
                        "title",
                        "description",
                        "salaryRange",
                        "growthPotential",
                        "reasoning",
                        "imageSearchTerm"
                    ]
                }
            },
            "motivationalVideos": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "url": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["title", "url", "description"]
                }
            }
        },
        "required": [
            "persona",
            "summary",
            "topCareers",
            "motivationalVideos",
            "empatheticNote"
        ]
    })
}

/// Mandatory top-level reply fields, in schema order
pub const REQUIRED_TOP_LEVEL_FIELDS: [&str; 5] = [
    "persona",
    "summary",
    "topCareers",
    "motivationalVideos",
    "empatheticNote",
];
