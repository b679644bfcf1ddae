//! Pathfinder LLM
//!
//! The AI-service boundary of the assessment: the provider seam, the
//! request built from the finalized scores and reflection, the strict
//! parser for the schema-constrained reply, and the Gemini transport that
//! carries the single outbound call.

pub mod gemini;
pub mod provider;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types
pub use gemini::GeminiProvider;
pub use provider::AnalysisProvider;
pub use request::AnalysisRequest;
pub use types::{AnalysisError, AnalysisResult, ProviderConfig};
