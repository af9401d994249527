//! Settings types for providers and assistant behavior.

use serde::{Deserialize, Serialize};

use crate::domain::TaskListId;
use crate::providers::ai::Provider;

/// Top-level persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// AI provider configuration and assistant preferences.
    pub ai: AiSettings,
    /// Privacy gates.
    pub privacy: PrivacySettings,
}

/// AI provider configuration: one settings slice per provider plus the
/// active selection.
///
/// Switching the active provider only changes which slice is read; the
/// other slices keep their values so switching back is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSettings {
    /// Provider that `generate` calls are routed to.
    pub active: Provider,
    /// Gemini connection settings.
    pub gemini: ProviderSettings,
    /// OpenAI connection settings.
    pub openai: ProviderSettings,
    /// Claude connection settings.
    pub claude: ProviderSettings,
    /// Ollama connection settings.
    pub ollama: ProviderSettings,
    /// Keywords the model is asked to call out in summaries; blank disables
    /// the callout clause.
    pub keywords: String,
    /// Preselected task list for message-to-task conversion.
    pub default_task_list: Option<TaskListId>,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            active: Provider::Gemini,
            gemini: ProviderSettings::default(),
            openai: ProviderSettings::default(),
            claude: ProviderSettings::default(),
            ollama: ProviderSettings::default(),
            keywords: String::new(),
            default_task_list: None,
        }
    }
}

impl AiSettings {
    /// The settings slice for `provider`.
    pub fn provider(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::Gemini => &self.gemini,
            Provider::OpenAi => &self.openai,
            Provider::Claude => &self.claude,
            Provider::Ollama => &self.ollama,
        }
    }

    /// Mutable access to the settings slice for `provider`.
    pub fn provider_mut(&mut self, provider: Provider) -> &mut ProviderSettings {
        match provider {
            Provider::Gemini => &mut self.gemini,
            Provider::OpenAi => &mut self.openai,
            Provider::Claude => &mut self.claude,
            Provider::Ollama => &mut self.ollama,
        }
    }
}

/// Connection settings for a single provider.
///
/// Blank fields fall back to the provider's defaults at request-build
/// time, so an empty bag is meaningful for keyless providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API key; may stay empty for providers that do not require one.
    pub api_key: String,
    /// Model identifier; blank selects the provider default.
    pub model: String,
    /// Endpoint URL; blank selects the provider default. Interpretation
    /// (base URL vs full URL) is adapter-specific.
    pub endpoint: String,
}

impl ProviderSettings {
    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The configured model, or `provider`'s default when blank.
    pub fn model_or(&self, provider: Provider) -> &str {
        if self.model.trim().is_empty() {
            provider.default_model()
        } else {
            &self.model
        }
    }

    /// The configured endpoint, or `provider`'s default when blank.
    pub fn endpoint_or(&self, provider: Provider) -> &str {
        if self.endpoint.trim().is_empty() {
            provider.default_endpoint()
        } else {
            &self.endpoint
        }
    }
}

/// Privacy gates for features that send message content off the machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    /// Whether the user has consented to sending message content to the
    /// configured AI backends. The host UI gates assistant actions on this.
    pub consent_given: bool,
}
