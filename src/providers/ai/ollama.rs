//! Ollama adapter for self-hosted endpoints.
//!
//! Ollama's native chat API takes the same role-tagged messages array as
//! OpenAI but answers with a single `message` object, and it must be told
//! explicitly not to stream. A reachable endpoint is assumed valid even
//! with no API key; a bearer header is attached only when a key is set
//! (e.g. for an authenticating reverse proxy).

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::traits::{GenerateError, GenerateResult, ProviderAdapter, ProviderRequest};
use super::Provider;
use crate::config::ProviderSettings;

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

/// Adapter for a self-hosted Ollama server.
///
/// The endpoint setting is the server base URL; `/api/chat` is appended
/// per request.
pub struct OllamaAdapter;

impl ProviderAdapter for OllamaAdapter {
    fn build_request(
        &self,
        prompt: &str,
        system_prompt: &str,
        settings: &ProviderSettings,
    ) -> ProviderRequest {
        let payload = OllamaRequest {
            model: settings.model_or(Provider::Ollama).to_string(),
            messages: vec![
                OllamaMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                OllamaMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            stream: false,
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !settings.api_key.is_empty() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
                    .unwrap_or_else(|_| HeaderValue::from_static("")),
            );
        }

        let base = settings.endpoint_or(Provider::Ollama);
        ProviderRequest {
            url: format!("{}/api/chat", base.trim_end_matches('/')),
            method: Method::POST,
            headers,
            body: serde_json::to_value(&payload).unwrap_or_default(),
        }
    }

    fn parse_response(&self, raw_body: &str) -> GenerateResult<String> {
        let response: OllamaResponse = serde_json::from_str(raw_body)
            .map_err(|e| GenerateError::InvalidResponse(format!("malformed Ollama envelope: {e}")))?;
        Ok(response.message.content)
    }

    fn is_configured(&self, _settings: &ProviderSettings) -> bool {
        true
    }
}
