//! Advisory provider selection.

use crate::config::{ProviderKind, ProviderSettings};
use crate::error::{CliError, Result};
use pawspace_domain::AdvisoryProvider;
use pawspace_llm::{LlmError, MockProvider, OllamaProvider, OpenAiProvider};

/// Provider chosen from the command line and configuration
pub enum Advisor {
    /// Fixed response given with `--advice`
    Fixed(MockProvider),
    /// Local Ollama server
    Ollama(OllamaProvider),
    /// OpenAI-compatible API
    OpenAi(OpenAiProvider),
}

/// Command-line overrides for provider selection
#[derive(Debug, Default, Clone)]
pub struct ProviderOverrides {
    /// `--provider`
    pub kind: Option<ProviderKind>,
    /// `--advice`
    pub advice: Option<String>,
    /// `--openai-api-key` / `PAWSPACE_OPENAI_API_KEY`
    pub openai_api_key: Option<String>,
    /// `--ollama-endpoint` / `PAWSPACE_OLLAMA_ENDPOINT`
    pub ollama_endpoint: Option<String>,
}

impl Advisor {
    /// Build the provider, letting command-line values win over the file.
    pub fn from_settings(settings: &ProviderSettings, overrides: ProviderOverrides) -> Result<Self> {
        if let Some(advice) = overrides.advice {
            return Ok(Advisor::Fixed(MockProvider::new(advice)));
        }

        match overrides.kind.unwrap_or(settings.kind) {
            ProviderKind::Ollama => {
                let endpoint = overrides
                    .ollama_endpoint
                    .unwrap_or_else(|| settings.ollama_endpoint.clone());
                Ok(Advisor::Ollama(
                    OllamaProvider::new(endpoint, settings.ollama_model.clone())
                        .with_max_retries(settings.max_retries),
                ))
            }
            ProviderKind::OpenAi => {
                let key = overrides
                    .openai_api_key
                    .filter(|k| !k.trim().is_empty())
                    .ok_or(CliError::MissingApiKey)?;
                Ok(Advisor::OpenAi(
                    OpenAiProvider::new(key)
                        .with_base_url(settings.openai_base_url.clone())
                        .with_model(settings.openai_model.clone())
                        .with_max_retries(settings.max_retries),
                ))
            }
        }
    }
}

impl AdvisoryProvider for Advisor {
    type Error = LlmError;

    async fn advise(&self, prompt: &str) -> std::result::Result<String, Self::Error> {
        match self {
            Advisor::Fixed(p) => p.advise(prompt).await,
            Advisor::Ollama(p) => p.advise(prompt).await,
            Advisor::OpenAi(p) => p.advise(prompt).await,
        }
    }

    fn model_name(&self) -> &str {
        match self {
            Advisor::Fixed(p) => p.model_name(),
            Advisor::Ollama(p) => p.model_name(),
            Advisor::OpenAi(p) => p.model_name(),
        }
    }
}
