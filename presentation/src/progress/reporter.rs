//! Progress reporting while a question is answered

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use qa_application::ProgressNotifier;
use qa_domain::Model;
use std::time::Duration;

/// Reports progress with a spinner that names the model being queried
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Querying LLM API");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_attempt_start(&self, model: &Model, candidate: usize, total: usize) {
        if total > 1 {
            self.spinner
                .set_message(format!("{} ({}/{})", model, candidate + 1, total));
        } else {
            self.spinner.set_message(model.to_string());
        }
    }

    fn on_attempt_failed(&self, model: &Model, reason: &str) {
        self.spinner
            .println(format!("  {} {} ({})", "x".red(), model, reason));
    }

    fn on_loading_wait(&self, model: &Model, wait: Duration) {
        self.spinner.set_message(format!(
            "{} is loading, retrying in {:.0}s",
            model,
            wait.as_secs_f64()
        ));
    }

    fn on_complete(&self, success: bool) {
        if success {
            self.spinner.finish_and_clear();
        } else {
            self.spinner
                .finish_with_message(format!("{}", "no answer".yellow()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_attempt_start(&self, model: &Model, candidate: usize, total: usize) {
        println!(
            "{} {} {}",
            "->".cyan(),
            "Querying".bold(),
            if total > 1 {
                format!("{} ({}/{})", model, candidate + 1, total)
            } else {
                model.to_string()
            }
        );
    }

    fn on_attempt_failed(&self, model: &Model, reason: &str) {
        println!("  {} {} ({})", "x".red(), model, reason);
    }

    fn on_loading_wait(&self, model: &Model, wait: Duration) {
        println!(
            "  {} {} is loading, retrying in {:.0}s",
            "~".yellow(),
            model,
            wait.as_secs_f64()
        );
    }

    fn on_complete(&self, _success: bool) {}
}
