//! Request and response bodies for the HTTP front end

use qa_application::AskOutcome;
use serde::{Deserialize, Serialize};

/// Body of `POST /ask`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AskRequest {
    pub question: String,
    /// Overrides the server's configured key when non-blank
    pub api_key: Option<String>,
}

/// Successful `POST /ask` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskResponse {
    pub original_question: String,
    pub processed_question: String,
    pub tokens: Vec<String>,
    pub answer: String,
}

impl From<&AskOutcome> for AskResponse {
    fn from(outcome: &AskOutcome) -> Self {
        Self {
            original_question: outcome.original.content().to_string(),
            processed_question: outcome.normalized.text.clone(),
            tokens: outcome.normalized.tokens.clone(),
            answer: outcome.answer.to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
