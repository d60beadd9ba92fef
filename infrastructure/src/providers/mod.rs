//! Provider strategies
//!
//! Each upstream API speaks its own request and response dialect. A
//! [`ProviderStrategy`] owns that dialect: it knows the endpoint, builds the
//! JSON body, and decodes the raw response into a [`ProviderReply`] or a
//! [`GatewayError`]. The HTTP transport itself lives in
//! [`HttpLlmGateway`](crate::gateway::HttpLlmGateway) and is shared by all
//! strategies.

pub mod chat_completions;
pub mod hugging_face;

pub use chat_completions::{ChatCompletionsStrategy, DEFAULT_SYSTEM_PROMPT};
pub use hugging_face::HuggingFaceStrategy;

use qa_application::{GatewayError, GenerationRequest};
use qa_domain::{Model, Protocol, ProviderKind, ProviderReply, Question};
use std::time::Duration;

/// Request building and response decoding for one provider dialect
pub trait ProviderStrategy: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Full URL to POST to for `model`
    fn endpoint(&self, model: &Model) -> String;

    /// JSON body for one request
    fn build_body(&self, request: &GenerationRequest<'_>) -> serde_json::Value;

    /// Decode a response.
    ///
    /// Non-success statuses and unparseable bodies are `Err`; a parseable
    /// body is always `Ok`, including one that carries a provider error.
    fn decode(
        &self,
        status: u16,
        body: &str,
        question: &Question,
    ) -> Result<ProviderReply, GatewayError>;
}

/// Resolved transport settings for one provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// System message for chat-completion providers
    pub system_prompt: String,
    /// Strip an echoed question from text-generation output
    pub strip_echoed_prompt: bool,
}

impl ProviderSettings {
    pub fn for_kind(kind: ProviderKind) -> Self {
        Self {
            kind,
            base_url: kind.default_base_url().to_string(),
            timeout: kind.default_timeout(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            strip_echoed_prompt: true,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_strip_echoed_prompt(mut self, strip: bool) -> Self {
        self.strip_echoed_prompt = strip;
        self
    }

    /// Build the strategy matching this provider's protocol
    pub fn strategy(&self) -> Box<dyn ProviderStrategy> {
        match self.kind.protocol() {
            Protocol::ChatCompletions => Box::new(ChatCompletionsStrategy::new(
                self.kind,
                &self.base_url,
                &self.system_prompt,
            )),
            Protocol::TextGeneration => Box::new(
                HuggingFaceStrategy::new(&self.base_url)
                    .with_strip_echoed_prompt(self.strip_echoed_prompt),
            ),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`; anything else is returned trimmed and shortened.
pub(crate) fn error_message(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let from_json = parsed.as_ref().and_then(|value| {
        let error = value.get("error").unwrap_or(value);
        error
            .as_str()
            .or_else(|| error.get("message").and_then(|m| m.as_str()))
            .map(str::to_string)
    });
    from_json.unwrap_or_else(|| qa_domain::util::preview(body.trim(), 200))
}
