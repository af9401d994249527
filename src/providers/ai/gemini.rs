//! Google Gemini adapter.
//!
//! Gemini authenticates through a `key` query parameter rather than a
//! header, and takes a single content carrying one text part; the system
//! prompt is folded into that part ahead of the user prompt.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::traits::{GenerateError, GenerateResult, ProviderAdapter, ProviderRequest};
use super::Provider;
use crate::config::ProviderSettings;

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// Adapter for Gemini's `generateContent` API.
///
/// The endpoint setting is the API base URL up to the version segment;
/// the model path and query-string key are appended per request.
pub struct GeminiAdapter;

impl ProviderAdapter for GeminiAdapter {
    fn build_request(
        &self,
        prompt: &str,
        system_prompt: &str,
        settings: &ProviderSettings,
    ) -> ProviderRequest {
        let base = settings.endpoint_or(Provider::Gemini);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            base.trim_end_matches('/'),
            settings.model_or(Provider::Gemini),
            settings.api_key,
        );

        let payload = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: format!("{system_prompt}\n\n{prompt}"),
                }],
            }],
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        ProviderRequest {
            url,
            method: Method::POST,
            headers,
            body: serde_json::to_value(&payload).unwrap_or_default(),
        }
    }

    fn parse_response(&self, raw_body: &str) -> GenerateResult<String> {
        let response: GeminiResponse = serde_json::from_str(raw_body)
            .map_err(|e| GenerateError::InvalidResponse(format!("malformed Gemini envelope: {e}")))?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                GenerateError::InvalidResponse("Gemini response carried no candidate text".to_string())
            })
    }

    fn is_configured(&self, settings: &ProviderSettings) -> bool {
        !settings.api_key.is_empty()
    }
}
