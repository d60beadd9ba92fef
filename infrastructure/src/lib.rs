//! Infrastructure layer for llm-qa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP gateway with its per-provider
//! strategies, and configuration file loading.

pub mod config;
pub mod gateway;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFallbackConfig, FileGenerationConfig,
    FileOutputConfig, FileProviderConfig, FileReplConfig, FileServerConfig,
};
pub use gateway::{HttpLlmGateway, ProviderSetupError};
pub use providers::{
    ChatCompletionsStrategy, DEFAULT_SYSTEM_PROMPT, HuggingFaceStrategy, ProviderSettings,
    ProviderStrategy,
};
