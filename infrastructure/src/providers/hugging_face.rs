//! Hugging Face Inference API (text generation)
//!
//! Text-generation models often echo the prompt before the continuation, so
//! the decoder strips a leading copy of the question. Status codes carry the
//! fallback signals: 503 means the model is still loading, 410 means it has
//! been withdrawn.

use super::{ProviderStrategy, error_message};
use qa_application::{GatewayError, GenerationRequest};
use qa_domain::{Model, ProviderKind, ProviderReply, Question};
use serde_json::{Value, json};
use std::time::Duration;

pub struct HuggingFaceStrategy {
    base_url: String,
    strip_echoed_prompt: bool,
}

impl HuggingFaceStrategy {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            strip_echoed_prompt: true,
        }
    }

    pub fn with_strip_echoed_prompt(mut self, strip: bool) -> Self {
        self.strip_echoed_prompt = strip;
        self
    }

    fn decode_array(&self, items: &[Value], raw: &Value, question: &Question) -> ProviderReply {
        let generated = items
            .first()
            .and_then(|item| item.get("generated_text"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        let text = match generated.strip_prefix(question.content()) {
            Some(rest) if self.strip_echoed_prompt => rest.trim(),
            _ => generated,
        };

        if text.is_empty() {
            ProviderReply::Success(raw.to_string())
        } else {
            ProviderReply::Success(text.to_string())
        }
    }
}

fn loading_wait(body: &str) -> Option<Duration> {
    let value: Value = serde_json::from_str(body).ok()?;
    let secs = value.get("estimated_time")?.as_f64()?;
    Duration::try_from_secs_f64(secs).ok()
}

impl ProviderStrategy for HuggingFaceStrategy {
    fn kind(&self) -> ProviderKind {
        ProviderKind::HuggingFace
    }

    fn endpoint(&self, model: &Model) -> String {
        format!("{}/models/{}", self.base_url, model.as_str())
    }

    fn build_body(&self, request: &GenerationRequest<'_>) -> Value {
        json!({
            "inputs": request.question.content(),
            "parameters": {
                "max_new_tokens": request.params.max_tokens,
                "temperature": request.params.temperature,
                "do_sample": request.params.do_sample,
            },
            "options": {
                "wait_for_model": true,
            },
        })
    }

    fn decode(
        &self,
        status: u16,
        body: &str,
        question: &Question,
    ) -> Result<ProviderReply, GatewayError> {
        match status {
            200..=299 => {}
            503 => {
                return Err(GatewayError::ModelLoading {
                    estimated_wait: loading_wait(body),
                });
            }
            410 => return Err(GatewayError::ModelNotAvailable(error_message(body))),
            _ => {
                return Err(GatewayError::HttpStatus {
                    status,
                    message: error_message(body),
                });
            }
        }

        let value: Value = serde_json::from_str(body)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        let reply = match &value {
            Value::Array(items) => self.decode_array(items, &value, question),
            Value::Object(map) => match map.get("error") {
                Some(Value::String(message)) => ProviderReply::ProviderError(message.clone()),
                Some(other) => ProviderReply::ProviderError(other.to_string()),
                None => match map.get("generated_text") {
                    Some(Value::String(text)) => ProviderReply::Success(text.clone()),
                    _ => ProviderReply::Success(value.to_string()),
                },
            },
            other => ProviderReply::UnknownShape(other.to_string()),
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qa_domain::{Credential, GenerationParams};

    fn strategy() -> HuggingFaceStrategy {
        HuggingFaceStrategy::new("https://api-inference.huggingface.co")
    }

    fn question(text: &str) -> Question {
        Question::try_new(text).unwrap()
    }

    #[test]
    fn test_body_shape() {
        let q = question("Why is the sky blue?");
        let credential = Credential::try_new("hf_test").unwrap();
        let request = GenerationRequest {
            model: &Model::Mistral7bInstruct,
            question: &q,
            credential: &credential,
            params: GenerationParams::text_generation(),
        };

        let body = strategy().build_body(&request);

        assert_eq!(body["inputs"], "Why is the sky blue?");
        assert_eq!(body["parameters"]["max_new_tokens"], 200);
        assert_eq!(body["parameters"]["do_sample"], true);
        assert_eq!(body["options"]["wait_for_model"], true);
    }

    #[test]
    fn test_wire_temperature_is_exact() {
        let q = question("Q");
        let credential = Credential::try_new("hf_test").unwrap();
        let request = GenerationRequest {
            model: &Model::FlanT5Large,
            question: &q,
            credential: &credential,
            params: GenerationParams::text_generation(),
        };

        let wire = serde_json::to_string(&strategy().build_body(&request)).unwrap();

        assert!(wire.contains(r#""temperature":0.7"#), "{wire}");
        assert!(wire.contains(r#""max_new_tokens":200"#), "{wire}");
    }

    #[test]
    fn test_echoed_question_is_stripped() {
        let q = question("Why is the sky blue?");
        let body = r#"[{"generated_text":"Why is the sky blue? because..."}]"#;

        let reply = strategy().decode(200, body, &q).unwrap();

        assert_eq!(reply, ProviderReply::Success("because...".to_string()));
    }

    #[test]
    fn test_echo_stripping_can_be_disabled() {
        let q = question("Why?");
        let body = r#"[{"generated_text":"Why? Rayleigh scattering."}]"#;

        let reply = strategy()
            .with_strip_echoed_prompt(false)
            .decode(200, body, &q)
            .unwrap();

        assert_eq!(
            reply,
            ProviderReply::Success("Why? Rayleigh scattering.".to_string())
        );
    }

    #[test]
    fn test_pure_echo_falls_back_to_raw_rendering() {
        let q = question("Hello");
        let body = r#"[{"generated_text":"Hello"}]"#;

        let reply = strategy().decode(200, body, &q).unwrap();

        assert_eq!(
            reply,
            ProviderReply::Success(r#"[{"generated_text":"Hello"}]"#.to_string())
        );
    }

    #[test]
    fn test_empty_array_renders_raw() {
        let reply = strategy().decode(200, "[]", &question("Hi")).unwrap();
        assert_eq!(reply, ProviderReply::Success("[]".to_string()));
    }

    #[test]
    fn test_object_shapes() {
        let q = question("Hi");

        let reply = strategy()
            .decode(200, r#"{"error":"Model too busy"}"#, &q)
            .unwrap();
        assert_eq!(reply, ProviderReply::ProviderError("Model too busy".to_string()));

        let reply = strategy()
            .decode(200, r#"{"generated_text":"Hello there"}"#, &q)
            .unwrap();
        assert_eq!(reply, ProviderReply::Success("Hello there".to_string()));

        let reply = strategy()
            .decode(200, r#"{"summary_text":"short"}"#, &q)
            .unwrap();
        assert_eq!(
            reply,
            ProviderReply::Success(r#"{"summary_text":"short"}"#.to_string())
        );
    }

    #[test]
    fn test_scalar_is_unknown_shape() {
        let reply = strategy().decode(200, "\"just text\"", &question("Hi")).unwrap();
        assert_eq!(reply, ProviderReply::UnknownShape("\"just text\"".to_string()));
    }

    #[test]
    fn test_loading_status() {
        let body = r#"{"error":"Model is currently loading","estimated_time":42.5}"#;
        let err = strategy().decode(503, body, &question("Hi")).unwrap_err();
        assert_eq!(
            err,
            GatewayError::ModelLoading {
                estimated_wait: Some(Duration::from_millis(42_500))
            }
        );

        let err = strategy().decode(503, "busy", &question("Hi")).unwrap_err();
        assert_eq!(err, GatewayError::ModelLoading { estimated_wait: None });
    }

    #[test]
    fn test_gone_and_other_statuses() {
        let err = strategy()
            .decode(410, r#"{"error":"Model gpt2 is no longer available"}"#, &question("Hi"))
            .unwrap_err();
        assert!(matches!(err, GatewayError::ModelNotAvailable(_)));

        let err = strategy()
            .decode(401, r#"{"error":"Invalid credentials"}"#, &question("Hi"))
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 401: Invalid credentials");
    }

    #[test]
    fn test_undecodable_body() {
        let err = strategy().decode(200, "not json", &question("Hi")).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }
}
