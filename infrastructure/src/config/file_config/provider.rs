//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Raw provider configuration from TOML
///
/// Every field except `kind` is optional: unset values fall back to the
/// defaults of the selected provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Provider name: "deepseek", "groq", "openai" or "huggingface"
    pub kind: String,
    /// Override for the provider's API base URL
    pub base_url: Option<String>,
    /// Ordered candidate models (a single entry for chat-completion providers)
    pub models: Vec<String>,
    /// Environment variable holding the API key
    pub api_key_env: Option<String>,
    /// Direct API key (prefer the environment variable)
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// System prompt for chat-completion providers
    pub system_prompt: Option<String>,
    /// Strip the question when a text-generation model echoes it back
    pub strip_echoed_prompt: bool,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            kind: "deepseek".to_string(),
            base_url: None,
            models: Vec::new(),
            api_key_env: None,
            api_key: None,
            timeout_seconds: None,
            system_prompt: None,
            strip_echoed_prompt: true,
        }
    }
}
