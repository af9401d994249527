//! Text generation service over the active provider adapter.

use async_trait::async_trait;
use tracing::debug;

use crate::config::{AiSettings, ProviderSettings};
use crate::providers::ai::{GenerateError, GenerateResult, Provider};

/// Backend-agnostic text generation seam.
///
/// [`GenerationService`] is the production implementor; tests substitute
/// call-counting fakes or mocks behind the same trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generates text for `prompt` under `system_prompt`.
    async fn generate(&self, prompt: &str, system_prompt: &str) -> GenerateResult<String>;
}

/// Dispatches generation requests to the active provider.
///
/// This is an explicitly constructed value, not a process-wide singleton:
/// the host UI builds one, reconfigures it on settings changes, and
/// threads it into the services that generate. Reconfiguration is a pure
/// state update and takes effect on the next generate call; Rust's borrow
/// rules guarantee an in-flight call never observes a half-applied
/// configuration.
pub struct GenerationService {
    provider: Provider,
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl GenerationService {
    /// Creates a service for `provider` with its settings slice.
    pub fn new(provider: Provider, settings: ProviderSettings) -> Self {
        Self {
            provider,
            settings,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a service from the settings bag's active selection.
    pub fn from_settings(settings: &AiSettings) -> Self {
        Self::new(settings.active, settings.provider(settings.active).clone())
    }

    /// Swaps the active provider, re-reading only that provider's slice of
    /// the settings bag. Idempotent and infallible.
    pub fn configure(&mut self, provider: Provider, settings: &AiSettings) {
        self.provider = provider;
        self.settings = settings.provider(provider).clone();
    }

    /// The currently active provider.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Whether the active provider can be called at all.
    pub fn is_configured(&self) -> bool {
        self.provider.adapter().is_configured(&self.settings)
    }

    async fn dispatch(&self, prompt: &str, system_prompt: &str) -> GenerateResult<String> {
        let adapter = self.provider.adapter();
        if self.provider.requires_api_key() && !adapter.is_configured(&self.settings) {
            return Err(GenerateError::Configuration(self.provider));
        }

        debug!(
            provider = %self.provider,
            model = %self.settings.model_or(self.provider),
            "dispatching generation request"
        );

        let request = adapter.build_request(prompt, system_prompt, &self.settings);
        let response = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        adapter.parse_response(&raw)
    }
}

#[async_trait]
impl Generator for GenerationService {
    /// Fails fast with [`GenerateError::Configuration`] before any network
    /// I/O when the active provider requires an API key and none is set.
    /// Adapter errors are propagated unchanged; retries, if wanted, belong
    /// to the caller.
    async fn generate(&self, prompt: &str, system_prompt: &str) -> GenerateResult<String> {
        self.dispatch(prompt, system_prompt).await
    }
}
