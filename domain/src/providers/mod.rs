//! Provider kinds and their built-in defaults (provider-neutral, serde-free).
//!
//! A provider is the hosted service a question is sent to. Each kind speaks
//! one [`Protocol`] and comes with default endpoints, models and policy so
//! that zero-config runs work once a credential is present.

use crate::core::error::DomainError;
use crate::core::model::Model;
use crate::inference::fallback::FallbackPolicy;
use crate::inference::params::GenerationParams;
use std::time::Duration;

/// Wire protocol spoken by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// OpenAI-compatible `/chat/completions`
    ChatCompletions,
    /// Hugging Face Inference API text generation (`/models/{id}`)
    TextGeneration,
}

/// Supported upstream providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    #[default]
    DeepSeek,
    Groq,
    OpenAi,
    HuggingFace,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::DeepSeek => "deepseek",
            ProviderKind::Groq => "groq",
            ProviderKind::OpenAi => "openai",
            ProviderKind::HuggingFace => "huggingface",
        }
    }

    /// Human-readable vendor name for banners
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::DeepSeek => "DeepSeek",
            ProviderKind::Groq => "Groq",
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::HuggingFace => "Hugging Face",
        }
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            ProviderKind::HuggingFace => Protocol::TextGeneration,
            _ => Protocol::ChatCompletions,
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::DeepSeek => "https://api.deepseek.com",
            ProviderKind::Groq => "https://api.groq.com/openai/v1",
            ProviderKind::OpenAi => "https://api.openai.com/v1",
            ProviderKind::HuggingFace => "https://api-inference.huggingface.co",
        }
    }

    /// Environment variable the credential is read from by default
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::DeepSeek => "DEEPSEEK_API_KEY",
            ProviderKind::Groq => "GROQ_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::HuggingFace => "HF_API_TOKEN",
        }
    }

    /// Default candidate list, in fallback order
    pub fn default_models(&self) -> Vec<Model> {
        match self {
            ProviderKind::DeepSeek => vec![Model::DeepSeekChat],
            ProviderKind::Groq => vec![Model::Llama3_8b],
            ProviderKind::OpenAi => vec![Model::Gpt4oMini],
            ProviderKind::HuggingFace => Model::hugging_face_candidates(),
        }
    }

    pub fn default_params(&self) -> GenerationParams {
        match self.protocol() {
            Protocol::ChatCompletions => GenerationParams::chat_completion(),
            Protocol::TextGeneration => GenerationParams::text_generation(),
        }
    }

    pub fn default_policy(&self) -> FallbackPolicy {
        match self.protocol() {
            Protocol::ChatCompletions => FallbackPolicy::single_shot(),
            Protocol::TextGeneration => FallbackPolicy::fallback(),
        }
    }

    /// Per-request HTTP timeout
    pub fn default_timeout(&self) -> Duration {
        match self.protocol() {
            Protocol::ChatCompletions => Duration::from_secs(60),
            Protocol::TextGeneration => Duration::from_secs(30),
        }
    }

    pub fn all() -> [ProviderKind; 4] {
        [
            ProviderKind::DeepSeek,
            ProviderKind::Groq,
            ProviderKind::OpenAi,
            ProviderKind::HuggingFace,
        ]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deepseek" => Ok(ProviderKind::DeepSeek),
            "groq" => Ok(ProviderKind::Groq),
            "openai" => Ok(ProviderKind::OpenAi),
            "huggingface" | "hf" | "hugging_face" => Ok(ProviderKind::HuggingFace),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}
