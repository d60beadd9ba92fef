//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for answered questions
///
/// This is a domain concept representing how an answer report should be
/// rendered by the front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report: original, processed question, tokens, answer (default)
    #[default]
    Text,
    /// JSON object with the same fields the web endpoint returns
    Json,
}
