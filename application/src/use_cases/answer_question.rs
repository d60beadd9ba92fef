//! Answer Question use case.
//!
//! Drives a [`FallbackRun`] against an [`LlmGateway`]: each step either
//! calls a candidate model (after an optional loading wait) or finishes
//! with an [`Answer`]. Every failure path ends in a textual answer; nothing
//! is returned as an error.

use crate::config::ExecutionParams;
use crate::ports::llm_gateway::{GenerationRequest, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use qa_domain::util::preview;
use qa_domain::{
    Answer, AttemptOutcome, Credential, FallbackRun, FallbackState, ProviderReply, Question, Step,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the [`AnswerQuestionUseCase`]
#[derive(Debug, Clone)]
pub struct AnswerQuestionInput {
    /// The question, sent upstream verbatim.
    pub question: Question,
    pub credential: Credential,
    /// Candidates, sampling and fallback policy.
    pub execution: ExecutionParams,
}

impl AnswerQuestionInput {
    pub fn new(question: Question, credential: Credential, execution: ExecutionParams) -> Self {
        Self {
            question,
            credential,
            execution,
        }
    }
}

/// Use case for answering one question with provider fallback
pub struct AnswerQuestionUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl Clone for AnswerQuestionUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl AnswerQuestionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Answer without progress reporting
    pub async fn execute(&self, input: AnswerQuestionInput) -> Answer {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Answer, reporting each attempt to `progress`
    pub async fn execute_with_progress(
        &self,
        input: AnswerQuestionInput,
        progress: &dyn ProgressNotifier,
    ) -> Answer {
        let AnswerQuestionInput {
            question,
            credential,
            execution,
        } = input;
        let models = &execution.models;

        info!(
            "Answering via {} ({} candidate(s)): {}",
            self.gateway.provider(),
            models.len(),
            preview(question.content(), 80)
        );

        let mut run = FallbackRun::new(models.len(), execution.policy);
        let mut step = run.current_step();

        loop {
            let (candidate, delay) = match step {
                Step::Finished(answer) => {
                    if answer.is_error() {
                        warn!("No answer produced: {}", answer);
                    } else {
                        debug!("Answer produced ({} bytes)", answer.to_string().len());
                    }
                    progress.on_complete(!answer.is_error());
                    return answer;
                }
                Step::Attempt { candidate, delay } => (candidate, delay),
            };
            let model = &models[candidate];

            if !delay.is_zero() {
                info!("Model {} is loading, retrying in {:?}", model, delay);
                progress.on_loading_wait(model, delay);
                tokio::time::sleep(delay).await;
            }

            progress.on_attempt_start(model, candidate, models.len());
            debug!("Attempt {}/{}: {}", candidate + 1, models.len(), model);

            let request = GenerationRequest {
                model,
                question: &question,
                credential: &credential,
                params: execution.generation,
            };
            let outcome = match self.gateway.generate(&request).await {
                Ok(reply) => AttemptOutcome::Reply(reply),
                Err(e) => {
                    debug!("Model {} failed (transient: {}): {}", model, e.is_transient(), e);
                    e.into_outcome()
                }
            };

            let reason = failure_reason(&outcome);
            step = run.advance(outcome);

            if let Some(reason) = reason {
                if run.state() != &FallbackState::Retrying(candidate) {
                    warn!("Skipping model {}: {}", model, reason);
                    progress.on_attempt_failed(model, &reason);
                }
            }
        }
    }
}

fn failure_reason(outcome: &AttemptOutcome) -> Option<String> {
    match outcome {
        AttemptOutcome::Reply(ProviderReply::ProviderError(message)) => Some(message.clone()),
        AttemptOutcome::Reply(_) => None,
        AttemptOutcome::Loading { .. } => Some("model is loading".to_string()),
        AttemptOutcome::Gone => Some("model is no longer available".to_string()),
        AttemptOutcome::Failed(description) => Some(description.clone()),
    }
}
