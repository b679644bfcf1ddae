//! Application Configuration
//!
//! Environment-backed configuration, read once at startup and injected
//! into the provider. A missing API key is not a startup error: the
//! provider reports it when a request is actually attempted.

use pathfinder_llm::ProviderConfig;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Optional model override
pub const MODEL_ENV: &str = "GEMINI_MODEL";
/// Optional endpoint override (proxies, local fakes)
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// Process configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Settings injected into the analysis provider
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let mut provider = ProviderConfig::default();

        provider.api_key = std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty());
        if let Some(model) = std::env::var(MODEL_ENV).ok().filter(|v| !v.is_empty()) {
            provider.model = model;
        }
        provider.base_url = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty());

        if provider.api_key.is_none() {
            tracing::warn!("{} is not set; analysis requests will fail", API_KEY_ENV);
        }

        Self { provider }
    }
}
