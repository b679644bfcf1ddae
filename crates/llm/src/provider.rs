//! Analysis Provider Trait
//!
//! The seam between the wizard and the hosted AI service. The controller
//! holds a `dyn AnalysisProvider`, so tests inject a scripted fake and the
//! live build injects the Gemini transport.

use async_trait::async_trait;

use pathfinder_core::analysis::CareerAnalysis;
use pathfinder_core::reflection::Reflection;
use pathfinder_core::scores::ScoreVector;

use super::types::{AnalysisError, AnalysisResult};

/// A service that turns finalized assessment inputs into a career analysis
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Returns the provider name for identification
    fn name(&self) -> &'static str;

    /// Returns the model being used
    fn model(&self) -> &str;

    /// Issue the single analysis request.
    ///
    /// Both inputs are finalized before this is called; the provider never
    /// mutates them and calling again with equal inputs produces an
    /// equivalent request.
    async fn analyze(
        &self,
        scores: &ScoreVector,
        reflection: &Reflection,
    ) -> AnalysisResult<CareerAnalysis>;

    /// Check that the service is reachable and the credential is valid
    async fn health_check(&self) -> AnalysisResult<()>;
}

/// Helper function to create an error for a missing API key
pub fn missing_api_key_error(provider: &str) -> AnalysisError {
    AnalysisError::TransportFailure {
        message: format!("API key not configured for {}", provider),
        status: None,
    }
}

/// Helper function to fold an HTTP error status into the transport variant.
///
/// The propagation policy upstream is uniform (no retry, full restart), so
/// every non-success status maps to the same kind; the status code is kept
/// for the log line.
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> AnalysisError {
    let message = match status {
        401 | 403 => format!("{}: invalid or unauthorized API key", provider),
        429 => format!("{}: rate limited: {}", provider, body),
        500..=599 => format!("{}: server error: {}", provider, body),
        _ => format!("{}: HTTP {}: {}", provider, status, body),
    };
    AnalysisError::TransportFailure {
        message,
        status: Some(status),
    }
}
