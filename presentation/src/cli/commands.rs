//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON object with question, tokens and answer
    Json,
}

impl From<OutputFormat> for qa_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => qa_domain::OutputFormat::Text,
            OutputFormat::Json => qa_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for llm-qa
#[derive(Parser, Debug)]
#[command(name = "llm-qa")]
#[command(author, version, about = "Ask a hosted LLM a question, from the terminal or over HTTP")]
#[command(long_about = r#"
llm-qa forwards a question to a hosted LLM API and prints the answer next to a
normalized (lowercased, punctuation-free) form of the question.

Providers: deepseek (default), groq, openai, huggingface. Hugging Face tries an
ordered list of models and falls back to the next one when a model is loading
or unavailable.

Configuration files are loaded from (in priority order):
1. --config <path>                  Explicit config file
2. LLM_QA_* environment variables   e.g. LLM_QA_PROVIDER__KIND=groq
3. ./llm-qa.toml                    Project-level config
4. ~/.config/llm-qa/config.toml     Global config

Example:
  llm-qa "What is the capital of France?"
  llm-qa -p huggingface -m google/flan-t5-large "Why is the sky blue?"
  llm-qa --chat
  llm-qa --serve --bind 127.0.0.1:8080
"#)]
pub struct Cli {
    /// The question to ask (not required in chat or serve mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long, conflicts_with = "serve")]
    pub chat: bool,

    /// Serve the HTTP front end (GET / and POST /ask)
    #[arg(long)]
    pub serve: bool,

    /// Address to bind in serve mode (overrides [server].bind and PORT)
    #[arg(long, value_name = "ADDR", requires = "serve")]
    pub bind: Option<String>,

    /// Provider: deepseek, groq, openai or huggingface
    #[arg(short, long, value_name = "NAME")]
    pub provider: Option<String>,

    /// Candidate models, tried in order (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// API key (defaults to the provider's environment variable)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
