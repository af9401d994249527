//! AI backend adapters.
//!
//! Four structurally different HTTP APIs are normalized behind the
//! [`ProviderAdapter`] contract: request construction, response parsing and
//! a configured-check per backend. The [`Provider`] enum is the closed set
//! of supported backends; adding one is a one-variant addition with
//! compiler-checked exhaustiveness at every dispatch site.

mod claude;
mod gemini;
mod ollama;
mod openai;
mod traits;

pub use claude::ClaudeAdapter;
pub use gemini::GeminiAdapter;
pub use ollama::OllamaAdapter;
pub use openai::OpenAiAdapter;
pub use traits::{GenerateError, GenerateResult, ProviderAdapter, ProviderRequest};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the supported AI backend families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Google Gemini; API key in the URL query string.
    Gemini,
    /// OpenAI chat completions; bearer-token auth.
    OpenAi,
    /// Anthropic Claude; custom key header plus a protocol version header.
    Claude,
    /// Self-hosted Ollama server; usable without any API key.
    Ollama,
}

impl Provider {
    /// All supported providers, in settings-display order.
    pub const ALL: [Provider; 4] = [
        Provider::Gemini,
        Provider::OpenAi,
        Provider::Claude,
        Provider::Ollama,
    ];

    /// Stable lowercase name used in settings files and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
            Provider::Claude => "claude",
            Provider::Ollama => "ollama",
        }
    }

    /// Model used when the settings bag leaves the model blank.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-1.5-flash",
            Provider::OpenAi => "gpt-4o",
            Provider::Claude => "claude-3-5-sonnet-20240620",
            Provider::Ollama => "llama3",
        }
    }

    /// Endpoint used when the settings bag leaves the endpoint blank.
    ///
    /// What the endpoint means is adapter-specific: a base URL for Gemini
    /// and Ollama, the full completion URL for OpenAI and Claude.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Provider::OpenAi => "https://api.openai.com/v1/chat/completions",
            Provider::Claude => "https://api.anthropic.com/v1/messages",
            Provider::Ollama => "http://localhost:11434",
        }
    }

    /// Whether this provider is unusable without an API key.
    ///
    /// A self-hosted Ollama endpoint is considered configured as-is; the
    /// other three refuse to generate until a key is present.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Provider::Ollama)
    }

    /// The request/response strategy for this provider.
    pub fn adapter(&self) -> &'static dyn ProviderAdapter {
        match self {
            Provider::Gemini => &GeminiAdapter,
            Provider::OpenAi => &OpenAiAdapter,
            Provider::Claude => &ClaudeAdapter,
            Provider::Ollama => &OllamaAdapter,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized provider name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            "claude" => Ok(Provider::Claude),
            "ollama" => Ok(Provider::Ollama),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}
