//! Anthropic Claude adapter.
//!
//! Claude authenticates with an `x-api-key` header alongside a fixed
//! protocol version header. The system prompt travels as a top-level
//! field, the messages array holds only the `user` turn, and the request
//! must state an explicit output token cap.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::traits::{GenerateError, GenerateResult, ProviderAdapter, ProviderRequest};
use super::Provider;
use crate::config::ProviderSettings;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<ClaudeMessage>,
}

#[derive(Debug, Serialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ClaudeResponse {
    #[serde(default)]
    content: Vec<ClaudeContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ClaudeContentBlock {
    text: Option<String>,
}

/// Adapter for Anthropic's messages API.
pub struct ClaudeAdapter;

impl ProviderAdapter for ClaudeAdapter {
    fn build_request(
        &self,
        prompt: &str,
        system_prompt: &str,
        settings: &ProviderSettings,
    ) -> ProviderRequest {
        let payload = ClaudeRequest {
            model: settings.model_or(Provider::Claude).to_string(),
            max_tokens: MAX_TOKENS,
            system: system_prompt.to_string(),
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&settings.api_key)
                .unwrap_or_else(|_| HeaderValue::from_static("")),
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        ProviderRequest {
            url: settings.endpoint_or(Provider::Claude).to_string(),
            method: Method::POST,
            headers,
            body: serde_json::to_value(&payload).unwrap_or_default(),
        }
    }

    fn parse_response(&self, raw_body: &str) -> GenerateResult<String> {
        let response: ClaudeResponse = serde_json::from_str(raw_body)
            .map_err(|e| GenerateError::InvalidResponse(format!("malformed Claude envelope: {e}")))?;

        response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or_else(|| {
                GenerateError::InvalidResponse("Claude response carried no content text".to_string())
            })
    }

    fn is_configured(&self, settings: &ProviderSettings) -> bool {
        !settings.api_key.is_empty()
    }
}
