//! Execution parameters: answer loop control.
//!
//! [`ExecutionParams`] groups the static parameters that control how
//! [`AnswerQuestionUseCase`](crate::use_cases::answer_question::AnswerQuestionUseCase)
//! walks its candidate list. These are fixed at startup, not per question.

use qa_domain::{FallbackPolicy, GenerationParams, Model, ProviderKind};
use std::time::Duration;

/// Answer loop control parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionParams {
    /// Candidate models, tried in order.
    pub models: Vec<Model>,
    /// Sampling parameters sent with each request.
    pub generation: GenerationParams,
    /// Retry and exhaustion behaviour.
    pub policy: FallbackPolicy,
}

impl ExecutionParams {
    /// Built-in defaults for a provider
    pub fn for_provider(kind: ProviderKind) -> Self {
        Self {
            models: kind.default_models(),
            generation: kind.default_params(),
            policy: kind.default_policy(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_models(mut self, models: Vec<Model>) -> Self {
        self.models = models;
        self
    }

    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_loading_wait(mut self, wait: Duration) -> Self {
        self.policy = self.policy.with_max_loading_wait(wait);
        self
    }
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self::for_provider(ProviderKind::default())
    }
}
