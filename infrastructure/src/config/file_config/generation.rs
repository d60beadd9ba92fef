//! Generation and fallback configuration from TOML
//! (`[generation]` and `[fallback]` sections)

use serde::{Deserialize, Serialize};

/// Raw generation parameters from TOML
///
/// Unset values keep the selected provider's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: Option<f64>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

/// Raw fallback configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFallbackConfig {
    /// Upper bound on the wait for a loading model, in seconds
    pub max_loading_wait_seconds: Option<u64>,
}
