//! OpenAI chat-completions adapter.
//!
//! Bearer-token auth and the familiar messages array with explicit
//! `system` and `user` roles.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::traits::{GenerateError, GenerateResult, ProviderAdapter, ProviderRequest};
use super::Provider;
use crate::config::ProviderSettings;

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Adapter for OpenAI's chat completions API.
///
/// The endpoint setting is the full completions URL, so compatible
/// third-party gateways can be substituted wholesale.
pub struct OpenAiAdapter;

impl ProviderAdapter for OpenAiAdapter {
    fn build_request(
        &self,
        prompt: &str,
        system_prompt: &str,
        settings: &ProviderSettings,
    ) -> ProviderRequest {
        let payload = OpenAiRequest {
            model: settings.model_or(Provider::OpenAi).to_string(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                OpenAiMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
                .unwrap_or_else(|_| HeaderValue::from_static("")),
        );

        ProviderRequest {
            url: settings.endpoint_or(Provider::OpenAi).to_string(),
            method: Method::POST,
            headers,
            body: serde_json::to_value(&payload).unwrap_or_default(),
        }
    }

    fn parse_response(&self, raw_body: &str) -> GenerateResult<String> {
        let response: OpenAiResponse = serde_json::from_str(raw_body)
            .map_err(|e| GenerateError::InvalidResponse(format!("malformed OpenAI envelope: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                GenerateError::InvalidResponse("OpenAI response carried no message content".to_string())
            })
    }

    fn is_configured(&self, settings: &ProviderSettings) -> bool {
        !settings.api_key.is_empty()
    }
}
