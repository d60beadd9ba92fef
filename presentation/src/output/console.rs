//! Console output formatter for answers

use crate::web::AskResponse;
use colored::Colorize;
use qa_application::AskOutcome;
use qa_domain::OutputFormat;

const WIDTH: usize = 60;

/// Formats Ask outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format in the requested format
    pub fn render(outcome: &AskOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(outcome),
            OutputFormat::Json => Self::format_json(outcome),
        }
    }

    /// Format the full report: question, normalized form, tokens and answer
    pub fn format(outcome: &AskOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Original Question:".cyan().bold(),
            outcome.original
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Processed Question:".cyan().bold(),
            outcome.normalized.text
        ));
        output.push_str(&format!(
            "{} {:?}\n",
            "Tokens:".cyan().bold(),
            outcome.normalized.tokens
        ));

        output.push_str(&Self::header("ANSWER:"));
        output.push('\n');

        let answer = outcome.answer.to_string();
        if outcome.answer.is_error() {
            output.push_str(&answer.red().to_string());
        } else {
            output.push_str(&answer);
        }
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON, using the same shape as the HTTP endpoint
    pub fn format_json(outcome: &AskOutcome) -> String {
        serde_json::to_string_pretty(&AskResponse::from(outcome))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Horizontal rule used between sections
    pub fn rule() -> String {
        "-".repeat(WIDTH)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("\n{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(WIDTH).cyan())
    }
}
