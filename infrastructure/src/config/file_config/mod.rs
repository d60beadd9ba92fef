//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types once validated.

mod generation;
mod output;
mod provider;
mod repl;
mod server;

pub use generation::{FileFallbackConfig, FileGenerationConfig};
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;
pub use server::FileServerConfig;

use crate::providers::ProviderSettings;
use qa_application::ExecutionParams;
use qa_domain::{Credential, Model, ProviderKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("unknown provider '{0}' (expected deepseek, groq, openai or huggingface)")]
    UnknownProvider(String),

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f64),

    #[error("max_tokens cannot be 0")]
    InvalidMaxTokens,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Upstream provider settings
    pub provider: FileProviderConfig,
    /// Sampling parameters
    pub generation: FileGenerationConfig,
    /// Candidate fallback settings
    pub fallback: FileFallbackConfig,
    /// HTTP front end settings
    pub server: FileServerConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.provider_kind()?;

        if self.provider.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.provider.models.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if let Some(temperature) = self.generation.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ConfigValidationError::InvalidTemperature(temperature));
            }
        }
        if self.generation.max_tokens == Some(0) {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }
        Ok(())
    }

    pub fn provider_kind(&self) -> Result<ProviderKind, ConfigValidationError> {
        self.provider
            .kind
            .parse()
            .map_err(|_| ConfigValidationError::UnknownProvider(self.provider.kind.clone()))
    }

    /// Transport settings for the configured provider
    pub fn provider_settings(&self) -> Result<ProviderSettings, ConfigValidationError> {
        let kind = self.provider_kind()?;
        let mut settings = ProviderSettings::for_kind(kind)
            .with_strip_echoed_prompt(self.provider.strip_echoed_prompt);

        if let Some(url) = &self.provider.base_url {
            settings = settings.with_base_url(url.trim_end_matches('/'));
        }
        if let Some(secs) = self.provider.timeout_seconds {
            settings = settings.with_timeout(Duration::from_secs(secs));
        }
        if let Some(prompt) = &self.provider.system_prompt {
            settings = settings.with_system_prompt(prompt.clone());
        }
        Ok(settings)
    }

    /// Candidate models, generation parameters and fallback policy
    pub fn execution_params(&self) -> Result<ExecutionParams, ConfigValidationError> {
        let kind = self.provider_kind()?;
        let mut params = ExecutionParams::for_provider(kind);

        if !self.provider.models.is_empty() {
            let models = self.provider.models.iter().map(|m| Model::from(m.trim()));
            params = params.with_models(models.collect());
        }

        let mut generation = params.generation;
        if let Some(temperature) = self.generation.temperature {
            generation = generation.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.generation.max_tokens {
            generation = generation.with_max_tokens(max_tokens);
        }
        params = params.with_generation(generation);

        if let Some(secs) = self.fallback.max_loading_wait_seconds {
            params = params.with_max_loading_wait(Duration::from_secs(secs));
        }
        Ok(params)
    }

    /// Name of the environment variable that holds the API key
    pub fn api_key_env(&self) -> String {
        match &self.provider.api_key_env {
            Some(name) => name.clone(),
            None => self
                .provider_kind()
                .unwrap_or_default()
                .default_api_key_env()
                .to_string(),
        }
    }

    /// Resolve the configured credential from the process environment.
    pub fn resolve_credential(&self) -> Option<Credential> {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the configured credential using `lookup` for variables.
    ///
    /// A direct `api_key` wins over the environment variable.
    pub fn resolve_credential_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<Credential> {
        let from_env = lookup(&self.api_key_env());
        Credential::first_present([self.provider.api_key.as_deref(), from_env.as_deref()]).ok()
    }
}
