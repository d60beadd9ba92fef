//! Run Ask use case.
//!
//! The contract every front end goes through: validate the question and
//! credential, normalize the question for display, then answer it with
//! [`AnswerQuestionUseCase`].
//!
//! Validation failures are the only errors this returns, and both are
//! raised before any network call. Upstream failures are folded into the
//! returned [`Answer`].

use crate::config::ExecutionParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::answer_question::{AnswerQuestionInput, AnswerQuestionUseCase};
use qa_domain::{Answer, Credential, NormalizedQuestion, Question, normalize};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur before an Ask reaches the provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunAskError {
    #[error("Please enter a valid question.")]
    EmptyQuestion,

    #[error("API key is required. Please set {env_var} or provide it with the request.")]
    MissingCredential { env_var: String },
}

/// Input for the [`RunAskUseCase`].
#[derive(Debug, Clone, Default)]
pub struct RunAskInput {
    /// The user's question, as typed.
    pub question: String,
    /// Per-request credential; falls back to the use case default.
    pub credential: Option<String>,
}

impl RunAskInput {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            credential: None,
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }
}

/// Result of a successful Ask: the question in both forms plus the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskOutcome {
    pub original: Question,
    pub normalized: NormalizedQuestion,
    pub answer: Answer,
}

/// Use case for running an Ask interaction.
pub struct RunAskUseCase {
    answer: AnswerQuestionUseCase,
    execution: ExecutionParams,
    default_credential: Option<Credential>,
    credential_env: String,
}

impl Clone for RunAskUseCase {
    fn clone(&self) -> Self {
        Self {
            answer: self.answer.clone(),
            execution: self.execution.clone(),
            default_credential: self.default_credential.clone(),
            credential_env: self.credential_env.clone(),
        }
    }
}

impl RunAskUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, execution: ExecutionParams) -> Self {
        let credential_env = gateway.provider().default_api_key_env().to_string();
        Self {
            answer: AnswerQuestionUseCase::new(gateway),
            execution,
            default_credential: None,
            credential_env,
        }
    }

    /// Credential used when a request does not bring its own.
    pub fn with_default_credential(mut self, credential: Option<Credential>) -> Self {
        self.default_credential = credential;
        self
    }

    /// Environment variable named in the missing-credential message.
    pub fn with_credential_env(mut self, env_var: impl Into<String>) -> Self {
        self.credential_env = env_var.into();
        self
    }

    pub fn execution(&self) -> &ExecutionParams {
        &self.execution
    }

    pub fn has_default_credential(&self) -> bool {
        self.default_credential.is_some()
    }

    /// Execute without progress reporting.
    pub async fn execute(&self, input: RunAskInput) -> Result<AskOutcome, RunAskError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the Ask interaction with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: RunAskInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<AskOutcome, RunAskError> {
        let question = Question::try_new(input.question).map_err(|_| RunAskError::EmptyQuestion)?;
        let credential = self.resolve_credential(input.credential.as_deref())?;

        let normalized = normalize(question.content());
        debug!("Normalized question into {} tokens", normalized.len());

        let answer = self
            .answer
            .execute_with_progress(
                AnswerQuestionInput::new(question.clone(), credential, self.execution.clone()),
                progress,
            )
            .await;

        Ok(AskOutcome {
            original: question,
            normalized,
            answer,
        })
    }

    fn resolve_credential(&self, supplied: Option<&str>) -> Result<Credential, RunAskError> {
        let default = self.default_credential.as_ref().map(Credential::expose);
        Credential::first_present([supplied, default]).map_err(|_| RunAskError::MissingCredential {
            env_var: self.credential_env.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{GatewayError, GenerationRequest};
    use async_trait::async_trait;
    use qa_domain::{ProviderKind, ProviderReply};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        reply: ProviderReply,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl MockGateway {
        fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: ProviderReply::Success(text.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        fn provider(&self) -> ProviderKind {
            ProviderKind::Groq
        }

        async fn generate(
            &self,
            request: &GenerationRequest<'_>,
        ) -> Result<ProviderReply, GatewayError> {
            self.seen.lock().unwrap().push((
                request.question.content().to_string(),
                request.credential.expose().to_string(),
            ));
            Ok(self.reply.clone())
        }
    }

    fn use_case(gateway: Arc<MockGateway>) -> RunAskUseCase {
        RunAskUseCase::new(gateway, ExecutionParams::for_provider(ProviderKind::Groq))
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_ask_returns_original_normalized_and_answer() {
        let gateway = MockGateway::answering("Ownership and borrowing.");
        let use_case = use_case(gateway.clone());

        let outcome = use_case
            .execute(RunAskInput::new("What makes Rust SAFE?").with_credential("gsk_1"))
            .await
            .unwrap();

        assert_eq!(outcome.original.content(), "What makes Rust SAFE?");
        assert_eq!(outcome.normalized.text, "what makes rust safe");
        assert_eq!(outcome.normalized.tokens.len(), 4);
        assert_eq!(outcome.answer, Answer::Text("Ownership and borrowing.".to_string()));
    }

    #[tokio::test]
    async fn test_original_question_is_sent_upstream() {
        let gateway = MockGateway::answering("ok");
        let use_case = use_case(gateway.clone());

        use_case
            .execute(RunAskInput::new("Hello, World!!").with_credential("gsk_1"))
            .await
            .unwrap();

        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen[0].0, "Hello, World!!");
    }

    #[tokio::test]
    async fn test_empty_question_rejected_before_gateway() {
        let gateway = MockGateway::answering("unused");
        let use_case = use_case(gateway.clone());

        let result = use_case
            .execute(RunAskInput::new("   ").with_credential("gsk_1"))
            .await;

        assert_eq!(result.unwrap_err(), RunAskError::EmptyQuestion);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_rejected_before_gateway() {
        let gateway = MockGateway::answering("unused");
        let use_case = use_case(gateway.clone());

        let result = use_case.execute(RunAskInput::new("What is Rust?")).await;

        let err = result.unwrap_err();
        assert!(matches!(err, RunAskError::MissingCredential { .. }));
        assert!(err.to_string().contains("GROQ_API_KEY"));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_request_credential_overrides_default() {
        let gateway = MockGateway::answering("ok");
        let use_case = use_case(gateway.clone())
            .with_default_credential(Some(Credential::try_new("server-key").unwrap()));

        use_case
            .execute(RunAskInput::new("Q?").with_credential("client-key"))
            .await
            .unwrap();
        use_case
            .execute(RunAskInput::new("Q?").with_credential("  "))
            .await
            .unwrap();

        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen[0].1, "client-key");
        assert_eq!(seen[1].1, "server-key");
    }

    #[tokio::test]
    async fn test_outcome_serializes_answer_as_text() {
        let gateway = MockGateway::answering("42");
        let use_case = use_case(gateway);

        let outcome = use_case
            .execute(RunAskInput::new("Meaning of life?").with_credential("k"))
            .await
            .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["answer"], "42");
        assert_eq!(json["normalized"]["text"], "meaning of life");
    }
}
