//! OpenAI-compatible chat completions (DeepSeek, Groq, OpenAI)
//!
//! One system message plus the question as the user message; the answer is
//! `choices[0].message.content`.

use super::{ProviderStrategy, error_message};
use qa_application::{GatewayError, GenerationRequest};
use qa_domain::{Model, ProviderKind, ProviderReply, Question};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that provides clear and accurate answers to questions.";

pub struct ChatCompletionsStrategy {
    kind: ProviderKind,
    endpoint: String,
    system_prompt: String,
}

impl ChatCompletionsStrategy {
    pub fn new(kind: ProviderKind, base_url: &str, system_prompt: &str) -> Self {
        Self {
            kind,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            system_prompt: system_prompt.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl ProviderStrategy for ChatCompletionsStrategy {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn endpoint(&self, _model: &Model) -> String {
        self.endpoint.clone()
    }

    fn build_body(&self, request: &GenerationRequest<'_>) -> serde_json::Value {
        let body = ChatRequest {
            model: request.model.as_str(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: request.question.content(),
                },
            ],
            temperature: request.params.temperature,
            max_tokens: request.params.max_tokens,
        };
        serde_json::json!(body)
    }

    fn decode(
        &self,
        status: u16,
        body: &str,
        _question: &Question,
    ) -> Result<ProviderReply, GatewayError> {
        if !(200..300).contains(&status) {
            return Err(GatewayError::HttpStatus {
                status,
                message: error_message(body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(body)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Ok(ProviderReply::ProviderError(error_message(&error.to_string())));
        }

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(ProviderReply::Success)
            .ok_or_else(|| {
                GatewayError::MalformedResponse("missing choices[0].message.content".to_string())
            })
    }
}
