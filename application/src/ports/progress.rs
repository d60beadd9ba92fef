//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is answered.

use qa_domain::Model;
use std::time::Duration;

/// Callback for progress updates during the fallback loop
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called before each request to a candidate
    fn on_attempt_start(&self, model: &Model, candidate: usize, total: usize);

    /// Called when a candidate is abandoned
    fn on_attempt_failed(&self, model: &Model, reason: &str);

    /// Called when the loop finishes, successfully or not
    fn on_complete(&self, success: bool);

    /// Called before sleeping for a loading model
    fn on_loading_wait(&self, _model: &Model, _wait: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_attempt_start(&self, _model: &Model, _candidate: usize, _total: usize) {}
    fn on_attempt_failed(&self, _model: &Model, _reason: &str) {}
    fn on_complete(&self, _success: bool) {}
}
