//! LLM Gateway port
//!
//! Defines the interface for sending one question to one upstream model.

use async_trait::async_trait;
use qa_domain::{AttemptOutcome, Credential, GenerationParams, Model, ProviderKind, ProviderReply, Question};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a single gateway attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Model is loading")]
    ModelLoading { estimated_wait: Option<Duration> },

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl GatewayError {
    /// Whether a later attempt against the same model might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::ConnectionError(_)
            | GatewayError::Timeout
            | GatewayError::ModelLoading { .. } => true,
            GatewayError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Translate into the state machine's vocabulary
    pub fn into_outcome(self) -> AttemptOutcome {
        match self {
            GatewayError::ModelLoading { estimated_wait } => {
                AttemptOutcome::Loading { estimated_wait }
            }
            GatewayError::ModelNotAvailable(_) => AttemptOutcome::Gone,
            other => AttemptOutcome::Failed(other.to_string()),
        }
    }
}

/// One request to one model
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub model: &'a Model,
    pub question: &'a Question,
    pub credential: &'a Credential,
    pub params: GenerationParams,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a provider.
/// Implementations (adapters) live in the infrastructure layer and own the
/// provider-specific request building and response decoding.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// The provider this gateway talks to
    fn provider(&self) -> ProviderKind;

    /// Send one request and decode the reply.
    ///
    /// Transport faults and non-success statuses come back as `Err`;
    /// a decodable body, even one carrying a provider error, is `Ok`.
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<ProviderReply, GatewayError>;
}
