//! Provider adapter contract and error types.

use reqwest::header::HeaderMap;
use reqwest::Method;
use thiserror::Error;

use super::Provider;
use crate::config::ProviderSettings;

/// Errors that can occur while generating text through a provider.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The active provider needs an API key and none is configured.
    #[error("API key required for {0}")]
    Configuration(Provider),

    /// The backend was reachable but responded with a failure status.
    #[error("provider returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body, read as text.
        body: String,
    },

    /// The backend could not be reached at all.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend responded with success but the envelope carried no
    /// extractable text.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// A fully built HTTP request for one provider backend.
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// Absolute request URL, including any query-string auth.
    pub url: String,
    /// HTTP method; POST for every current backend.
    pub method: Method,
    /// Request headers, including any header-based auth.
    pub headers: HeaderMap,
    /// JSON request body.
    pub body: serde_json::Value,
}

/// Per-provider strategy: how to build a request for and read a response
/// from one backend family.
///
/// Adapters are stateless; credentials, model and endpoint arrive through
/// the [`ProviderSettings`] slice on every call.
pub trait ProviderAdapter: Send + Sync {
    /// Builds the HTTP request that asks the backend to complete `prompt`
    /// under `system_prompt`.
    fn build_request(
        &self,
        prompt: &str,
        system_prompt: &str,
        settings: &ProviderSettings,
    ) -> ProviderRequest;

    /// Extracts the generated text from a success response body.
    fn parse_response(&self, raw_body: &str) -> GenerateResult<String>;

    /// Whether the settings slice is usable for this provider.
    fn is_configured(&self, settings: &ProviderSettings) -> bool;
}
