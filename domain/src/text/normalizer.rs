//! Question normalizer
//!
//! Lowercases, strips ASCII punctuation, and collapses whitespace. The
//! result is informational: front ends show it next to the original
//! question, but the original is what gets transmitted.

use serde::{Deserialize, Serialize};

/// A question in normalized form, together with its tokens (Value Object)
///
/// `tokens` is always `text.split_whitespace()`; no token is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedQuestion {
    /// Lowercase text, punctuation removed, single spaces, trimmed
    pub text: String,
    /// Whitespace-delimited pieces of `text`
    pub tokens: Vec<String>,
}

impl NormalizedQuestion {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Normalize a question for display.
///
/// Total and deterministic: every input produces a value.
pub fn normalize(question: &str) -> NormalizedQuestion {
    let stripped: String = question
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let tokens: Vec<String> = stripped
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    let text = tokens.join(" ");

    NormalizedQuestion { text, tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let n = normalize("Hello, World!!");
        assert_eq!(n.text, "hello world");
        assert_eq!(n.tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_collapses_whitespace() {
        let n = normalize("  multiple   spaces  ");
        assert_eq!(n.text, "multiple spaces");
        assert_eq!(n.tokens, vec!["multiple", "spaces"]);
    }

    #[test]
    fn test_tabs_and_newlines_are_whitespace() {
        let n = normalize("What\tis\n\nRust?");
        assert_eq!(n.text, "what is rust");
        assert_eq!(n.len(), 3);
    }

    #[test]
    fn test_ascii_separator_controls_split_tokens() {
        let n = normalize("one\u{1c}two\u{1d}three\u{1e}four\u{1f}five");
        assert_eq!(n.text, "one two three four five");
        assert_eq!(n.len(), 5);
        assert_eq!(normalize(&n.text), n);
    }

    #[test]
    fn test_punctuation_inside_words_is_removed() {
        let n = normalize("Don't use C++ (or e-mail)");
        assert_eq!(n.text, "dont use c or email");
    }

    #[test]
    fn test_punctuation_only_input_is_empty() {
        let n = normalize("?!... ,,, ");
        assert!(n.is_empty());
        assert_eq!(n.text, "");
    }

    #[test]
    fn test_non_ascii_punctuation_is_kept() {
        let n = normalize("¿Qué tal?");
        assert_eq!(n.text, "¿qué tal");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Hello, World!!",
            "  multiple   spaces  ",
            "What's the BEST way -- to learn Rust?",
            "ÀÉÎ ÕÜ\u{00A0}mixed\u{2003}spaces",
            "",
            "!!!",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once.text);
            assert_eq!(once, twice, "normalize not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_tokens_never_empty() {
        let n = normalize(" a  ,  b ; c ");
        assert!(n.tokens.iter().all(|t| !t.is_empty()));
        assert_eq!(n.tokens, vec!["a", "b", "c"]);
    }
}
