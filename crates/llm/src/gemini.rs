//! Gemini Provider
//!
//! Implementation of the AnalysisProvider trait over the Gemini
//! `generateContent` REST API. The request carries the assembled prompt,
//! the counselor system instruction, the Google Search grounding tool, and
//! the response schema; the reply is handed to the response parser.

use async_trait::async_trait;

use pathfinder_core::analysis::CareerAnalysis;
use pathfinder_core::reflection::Reflection;
use pathfinder_core::scores::ScoreVector;

use super::provider::{missing_api_key_error, parse_http_error, AnalysisProvider};
use super::request::{response_schema, AnalysisRequest};
use super::response::parse_reply;
use super::types::{AnalysisError, AnalysisResult, ProviderConfig};

/// Default Gemini API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider
pub struct GeminiProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(GEMINI_API_URL)
    }

    /// Full URL of the generateContent call for the configured model
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url(),
            self.config.model
        )
    }

    /// Build the request body for the API
    fn build_request_body(&self, request: &AnalysisRequest) -> serde_json::Value {
        serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": request.prompt }]
                }
            ],
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "tools": [{ "googleSearch": {} }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        })
    }

    async fn post(
        &self,
        url: &str,
        api_key: &str,
        body: &serde_json::Value,
    ) -> AnalysisResult<reqwest::Response> {
        self.client
            .post(url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AnalysisError::TransportFailure {
                message: e.to_string(),
                status: None,
            })
    }
}

#[async_trait]
impl AnalysisProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn analyze(
        &self,
        scores: &ScoreVector,
        reflection: &Reflection,
    ) -> AnalysisResult<CareerAnalysis> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("gemini"))?;

        let request = AnalysisRequest::new(scores, reflection);
        let body = self.build_request_body(&request);

        tracing::debug!(model = %self.config.model, "issuing career analysis request");

        let response = self.post(&self.generate_url(), api_key, &body).await?;

        let status = response.status().as_u16();
        let body_text = response
            .text()
            .await
            .map_err(|e| AnalysisError::TransportFailure {
                message: e.to_string(),
                status: None,
            })?;

        if status != 200 {
            tracing::warn!(status, "career analysis request rejected");
            return Err(parse_http_error(status, &body_text, "gemini"));
        }

        parse_reply(&body_text)
    }

    async fn health_check(&self) -> AnalysisResult<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("gemini"))?;

        let body = serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Hi" }] }],
            "generationConfig": { "maxOutputTokens": 1 }
        });

        let response = self.post(&self.generate_url(), api_key, &body).await?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status, &body, "gemini"))
        }
    }
}
