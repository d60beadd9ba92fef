//! Answer value object

use serde::{Serialize, Serializer};

/// Description used when every candidate model failed.
///
/// Rendered through [`Answer::Error`], so the user sees it prefixed with `Error: `.
pub const EXHAUSTED_MESSAGE: &str = "Unable to get response from any available models. Please check your API token or try again later.";

/// The single textual result of answering a question (Value Object)
///
/// Upstream failures never escape as errors; they become [`Answer::Error`],
/// which displays as `Error: <description>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Error(String),
}

impl Answer {
    /// The answer returned once all candidates are exhausted
    pub fn exhausted() -> Self {
        Answer::Error(EXHAUSTED_MESSAGE.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Answer::Error(_))
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Text(text) => f.write_str(text),
            Answer::Error(description) => write!(f, "Error: {}", description),
        }
    }
}

impl Serialize for Answer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_renders_sentinel() {
        assert_eq!(
            Answer::exhausted().to_string(),
            "Error: Unable to get response from any available models. Please check your API token or try again later."
        );
    }

    #[test]
    fn test_text_renders_verbatim() {
        let answer = Answer::Text("Rust is a systems language.".to_string());
        assert_eq!(answer.to_string(), "Rust is a systems language.");
        assert!(!answer.is_error());
    }

    #[test]
    fn test_serializes_as_rendered_string() {
        let json = serde_json::to_string(&Answer::Error("timeout".to_string())).unwrap();
        assert_eq!(json, "\"Error: timeout\"");
    }
}
