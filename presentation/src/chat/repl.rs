//! REPL (Read-Eval-Print Loop) for interactive questions

use crate::{ConsoleFormatter, ProgressReporter};
use colored::Colorize;
use qa_application::{RunAskInput, RunAskUseCase};
use qa_domain::{Credential, OutputFormat};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::{Path, PathBuf};
use tracing::debug;

const PROMPT: &str = "Enter your question: ";
const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "q"];

/// Whether `line` ends the session
pub(crate) fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_COMMANDS.iter().any(|cmd| line.eq_ignore_ascii_case(cmd))
}

/// Create the directory holding the history file.
///
/// Returns false, logging why, when it cannot be created.
pub(crate) fn ensure_history_dir(path: &Path) -> bool {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            debug!("Cannot create history directory {}: {}", parent.display(), e);
            false
        }
    }
}

/// Interactive question REPL
pub struct ChatRepl {
    use_case: RunAskUseCase,
    provider_name: String,
    credential_env: String,
    format: OutputFormat,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RunAskUseCase, provider_name: impl Into<String>) -> Self {
        Self {
            use_case,
            provider_name: provider_name.into(),
            credential_env: String::new(),
            format: OutputFormat::Text,
            show_progress: true,
            history_path: dirs::data_dir().map(|p| p.join("llm-qa").join("history.txt")),
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Environment variable named when asking for a missing key
    pub fn with_credential_env(mut self, env_var: impl Into<String>) -> Self {
        self.credential_env = env_var.into();
        self
    }

    /// Override the history file location
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_path = path;
        }
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        if !self.use_case.has_default_credential() && !self.prompt_for_credential(&mut rl)? {
            return Ok(());
        }

        if let Some(ref path) = self.history_path {
            if ensure_history_dir(path) {
                if let Err(e) = rl.load_history(path) {
                    debug!("History not loaded from {}: {}", path.display(), e);
                }
            }
        }

        println!("Type 'exit' or 'quit' to end the session.");
        println!();

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if is_exit_command(&line) {
                        println!();
                        println!("Thank you for using the Q&A system. Goodbye!");
                        break;
                    }

                    let line = line.trim();
                    if !line.is_empty() {
                        if let Err(e) = rl.add_history_entry(line) {
                            debug!("History entry not recorded: {}", e);
                        }
                    }

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            if let Err(e) = rl.save_history(path) {
                debug!("History not saved to {}: {}", path.display(), e);
            }
        }

        Ok(())
    }

    /// Ask once for a key. Returns false when the session cannot continue.
    fn prompt_for_credential(&mut self, rl: &mut DefaultEditor) -> RlResult<bool> {
        if !self.credential_env.is_empty() {
            println!("{} not found in environment variables.", self.credential_env);
        }
        let entered = match rl.readline(&format!("Please enter your {} API key: ", self.provider_name)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => String::new(),
            Err(err) => return Err(err),
        };

        match Credential::try_new(entered) {
            Ok(credential) => {
                self.use_case = self.use_case.clone().with_default_credential(Some(credential));
                Ok(true)
            }
            Err(_) => {
                println!("{}", "Error: API key is required to run this application.".red());
                Ok(false)
            }
        }
    }

    fn print_welcome(&self) {
        let line = "=".repeat(60);
        println!("{}", line);
        println!("LLM Question-and-Answering System (CLI)");
        println!("Powered by {}", self.provider_name);
        println!("{}", line);
        println!(
            "Models: {}",
            self.use_case
                .execution()
                .models
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    async fn process_question(&self, question: &str) {
        let input = RunAskInput::new(question);

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute(input).await
        };

        match result {
            Ok(outcome) => {
                println!();
                println!("{}", ConsoleFormatter::rule());
                println!("{}", ConsoleFormatter::render(&outcome, self.format));
            }
            Err(e) => {
                println!("{}", e);
                println!();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_commands_are_case_insensitive() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("QUIT"));
        assert!(is_exit_command("  q  "));
        assert!(!is_exit_command("quitting"));
        assert!(!is_exit_command(""));
        assert!(!is_exit_command("What is q?"));
    }

    #[test]
    fn test_history_dir_under_a_file_is_reported() {
        let blocker = std::env::temp_dir().join(format!("llm-qa-history-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        assert!(!ensure_history_dir(&blocker.join("sub").join("history.txt")));
        assert!(ensure_history_dir(&std::env::temp_dir().join("history.txt")));
        assert!(ensure_history_dir(Path::new("history.txt")));

        std::fs::remove_file(&blocker).unwrap();
    }
}
