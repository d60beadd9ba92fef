//! Application layer for llm-qa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    llm_gateway::{GatewayError, GenerationRequest, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::answer_question::{AnswerQuestionInput, AnswerQuestionUseCase};
pub use use_cases::run_ask::{AskOutcome, RunAskError, RunAskInput, RunAskUseCase};
