//! Analysis Response Parser
//!
//! Validates the service reply and extracts the grounding citations that
//! ride alongside it. The primary payload is the schema-constrained JSON in
//! the candidate's text parts; the citations come from a metadata side
//! channel and are merged into the final result.
//!
//! Validation is strict at the top level (a missing mandatory field is a
//! schema violation) and lenient below it (absent item strings become
//! empty), because the declared schema marks item fields required but the
//! service does not always comply.

use pathfinder_core::analysis::{CareerAnalysis, GroundingSource};

use super::request::REQUIRED_TOP_LEVEL_FIELDS;
use super::types::{AnalysisError, AnalysisResult};

/// Fallback title when a grounding chunk carries a uri but no title
const UNTITLED_SOURCE: &str = "Reference Source";

/// The `generateContent` reply envelope, reduced to what the client reads
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    pub(crate) content: Option<CandidateContent>,
    pub(crate) grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub(crate) parts: Vec<Part>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct Part {
    pub(crate) text: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroundingMetadata {
    #[serde(default)]
    pub(crate) grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct GroundingChunk {
    pub(crate) web: Option<WebReference>,
}

#[derive(Debug, serde::Deserialize)]
pub(crate) struct WebReference {
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) uri: String,
}

/// Parse a raw service reply into a career analysis.
///
/// Fails with `MalformedResponse` when the envelope or the embedded
/// payload is not valid JSON, and with `SchemaViolation` when a mandatory
/// top-level field is absent.
pub fn parse_reply(raw: &str) -> AnalysisResult<CareerAnalysis> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(raw).map_err(|e| AnalysisError::MalformedResponse {
            message: format!("invalid reply envelope: {}", e),
        })?;

    let candidate = envelope.candidates.first();

    let payload_text: String = candidate
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    let mut analysis = parse_payload(&payload_text)?;
    analysis.search_sources = candidate.map(extract_sources).unwrap_or_default();
    Ok(analysis)
}

/// Parse the schema-constrained JSON payload.
///
/// Mandatory fields are checked on the raw value first so the error names
/// the first missing field; only then is the typed (and per-item lenient)
/// deserialization attempted.
pub fn parse_payload(text: &str) -> AnalysisResult<CareerAnalysis> {
    let text = if text.is_empty() { "{}" } else { text };

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| AnalysisError::MalformedResponse {
            message: format!("reply payload is not valid JSON: {}", e),
        })?;

    for field in REQUIRED_TOP_LEVEL_FIELDS {
        if value.get(field).is_none() {
            return Err(AnalysisError::SchemaViolation {
                field: field.to_string(),
            });
        }
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::MalformedResponse {
        message: format!("reply payload has the wrong shape: {}", e),
    })
}

/// Derive the citation list from a candidate's grounding metadata.
///
/// Chunks with a web reference become `{title, uri}` pairs in order; the
/// title falls back to a generic placeholder. Chunks without one carry no
/// renderable citation and are dropped.
pub(crate) fn extract_sources(candidate: &Candidate) -> Vec<GroundingSource> {
    candidate
        .grounding_metadata
        .as_ref()
        .map(|meta| {
            meta.grounding_chunks
                .iter()
                .filter_map(|chunk| chunk.web.as_ref())
                .map(|web| GroundingSource {
                    title: web
                        .title
                        .clone()
                        .unwrap_or_else(|| UNTITLED_SOURCE.to_string()),
                    uri: web.uri.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}
