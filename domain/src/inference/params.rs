//! Generation parameters

use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every request (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    /// `max_tokens` for chat completions, `max_new_tokens` for text generation
    pub max_tokens: u32,
    /// Enable sampling (text-generation endpoints only)
    pub do_sample: bool,
}

impl GenerationParams {
    /// Parameters used for chat-completion providers
    pub fn chat_completion() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1024,
            do_sample: true,
        }
    }

    /// Parameters used for the text-generation fallback provider
    pub fn text_generation() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 200,
            do_sample: true,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::chat_completion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let chat = GenerationParams::chat_completion();
        assert_eq!(chat.max_tokens, 1024);
        assert!((chat.temperature - 0.7).abs() < f64::EPSILON);

        let generation = GenerationParams::text_generation();
        assert_eq!(generation.max_tokens, 200);
        assert!(generation.do_sample);
    }

    #[test]
    fn test_builders() {
        let p = GenerationParams::default()
            .with_temperature(0.2)
            .with_max_tokens(64);
        assert_eq!(p.max_tokens, 64);
        assert!((p.temperature - 0.2).abs() < f64::EPSILON);
    }
}
