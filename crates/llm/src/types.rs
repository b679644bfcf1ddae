//! Provider Types
//!
//! Error taxonomy and configuration for the analysis call. All three error
//! kinds are handled uniformly upstream (no retry, full restart), so the
//! variants exist to name the failure, not to branch on it.

use thiserror::Error;

/// Default analysis model
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Errors from the analysis request/response cycle
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The reply body could not be parsed as the expected structured format
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// The parsed reply is missing a mandatory top-level field
    #[error("Schema violation: missing required field `{field}`")]
    SchemaViolation { field: String },

    /// The request could not be completed (network, credential, or
    /// non-success status)
    #[error("Transport failure: {message}")]
    TransportFailure {
        message: String,
        status: Option<u16>,
    },
}

/// Result type alias for analysis errors
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Configuration injected into a provider at construction.
///
/// The credential is never read ambiently: whoever builds the provider
/// decides where the key comes from, which is what lets tests run against
/// a fake. A missing key surfaces as a request-time transport failure, not
/// a startup crash.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key; `None` fails at request time
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Endpoint override (proxies, fakes); `None` uses the provider default
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
        }
    }
}
