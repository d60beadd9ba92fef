//! Per-question fallback state machine
//!
//! [`FallbackRun`] decides, one attempt at a time, whether to retry the
//! current candidate, move to the next one, or finish. It performs no I/O
//! and never sleeps: the caller executes each [`Step`] and reports back an
//! [`AttemptOutcome`].
//!
//! ```text
//! Trying(i) ──success──────────────▶ Succeeded        (terminal)
//!     │  └──loading + wait (once)──▶ Retrying(i)
//!     └──gone / error / failure──▶ Trying(i+1) ─ … ─▶ Exhausted (terminal)
//! ```

use super::answer::{Answer, EXHAUSTED_MESSAGE};
use super::reply::ProviderReply;
use std::time::Duration;

/// What to report when every candidate has failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// The fixed "unable to get response from any available models" text
    Sentinel,
    /// The description of the last failure seen
    LastFailure,
}

/// How a run reacts to transient and permanent failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    /// Retry a loading model once, after its estimated wait
    pub retry_on_loading: bool,
    /// Upper bound on the wait before that retry
    pub max_loading_wait: Duration,
    pub on_exhausted: Exhaustion,
}

impl FallbackPolicy {
    /// One call, no retry, failures reported verbatim
    pub fn single_shot() -> Self {
        Self {
            retry_on_loading: false,
            max_loading_wait: Duration::ZERO,
            on_exhausted: Exhaustion::LastFailure,
        }
    }

    /// Ordered fallback with a single bounded retry for loading models
    pub fn fallback() -> Self {
        Self {
            retry_on_loading: true,
            max_loading_wait: Duration::from_secs(20),
            on_exhausted: Exhaustion::Sentinel,
        }
    }

    pub fn with_max_loading_wait(mut self, wait: Duration) -> Self {
        self.max_loading_wait = wait;
        self
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Result of one attempt against one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The provider answered with a decodable body
    Reply(ProviderReply),
    /// The model is still loading (HTTP 503)
    Loading { estimated_wait: Option<Duration> },
    /// The model is permanently unavailable (HTTP 410)
    Gone,
    /// Network fault, timeout, other HTTP status or undecodable body
    Failed(String),
}

/// Where a run currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackState {
    Trying(usize),
    Retrying(usize),
    Succeeded(String),
    Exhausted,
}

impl FallbackState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FallbackState::Succeeded(_) | FallbackState::Exhausted)
    }
}

/// What the caller should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Call candidate `candidate`, after sleeping for `delay`
    Attempt { candidate: usize, delay: Duration },
    /// The run is over
    Finished(Answer),
}

/// State machine for answering one question over an ordered candidate list
#[derive(Debug, Clone)]
pub struct FallbackRun {
    candidates: usize,
    policy: FallbackPolicy,
    state: FallbackState,
    last_failure: Option<String>,
}

impl FallbackRun {
    /// Start a run over `candidates` models. An empty list is exhausted immediately.
    pub fn new(candidates: usize, policy: FallbackPolicy) -> Self {
        let state = if candidates == 0 {
            FallbackState::Exhausted
        } else {
            FallbackState::Trying(0)
        };
        Self {
            candidates,
            policy,
            state,
            last_failure: None,
        }
    }

    pub fn state(&self) -> &FallbackState {
        &self.state
    }

    /// The step for the current state, without consuming an outcome
    pub fn current_step(&self) -> Step {
        match &self.state {
            FallbackState::Trying(i) => Step::Attempt {
                candidate: *i,
                delay: Duration::ZERO,
            },
            FallbackState::Retrying(i) => Step::Attempt {
                candidate: *i,
                delay: Duration::ZERO,
            },
            FallbackState::Succeeded(text) => Step::Finished(Answer::Text(text.clone())),
            FallbackState::Exhausted => Step::Finished(self.exhausted_answer()),
        }
    }

    /// Feed the outcome of the attempt requested by the previous step.
    pub fn advance(&mut self, outcome: AttemptOutcome) -> Step {
        let (current, retried) = match self.state {
            FallbackState::Trying(i) => (i, false),
            FallbackState::Retrying(i) => (i, true),
            FallbackState::Succeeded(_) | FallbackState::Exhausted => return self.current_step(),
        };

        match outcome {
            AttemptOutcome::Reply(reply) => match reply {
                ProviderReply::Success(text) | ProviderReply::UnknownShape(text) => {
                    self.state = FallbackState::Succeeded(text);
                    self.current_step()
                }
                ProviderReply::ProviderError(message) => self.skip(current, message),
            },
            AttemptOutcome::Loading {
                estimated_wait: Some(wait),
            } if self.policy.retry_on_loading && !retried => {
                self.state = FallbackState::Retrying(current);
                Step::Attempt {
                    candidate: current,
                    delay: wait.min(self.policy.max_loading_wait),
                }
            }
            AttemptOutcome::Loading { .. } => {
                let reason = if retried {
                    "model is still loading after retry (HTTP 503)"
                } else {
                    "model is loading (HTTP 503)"
                };
                self.skip(current, reason.to_string())
            }
            AttemptOutcome::Gone => {
                self.skip(current, "model is no longer available (HTTP 410)".to_string())
            }
            AttemptOutcome::Failed(description) => self.skip(current, description),
        }
    }

    fn skip(&mut self, current: usize, reason: String) -> Step {
        self.last_failure = Some(reason);
        let next = current + 1;
        self.state = if next < self.candidates {
            FallbackState::Trying(next)
        } else {
            FallbackState::Exhausted
        };
        self.current_step()
    }

    fn exhausted_answer(&self) -> Answer {
        match (self.policy.on_exhausted, &self.last_failure) {
            (Exhaustion::LastFailure, Some(reason)) => Answer::Error(reason.clone()),
            (Exhaustion::LastFailure, None) => Answer::Error("no candidate models configured".to_string()),
            (Exhaustion::Sentinel, _) => Answer::Error(EXHAUSTED_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(text: &str) -> AttemptOutcome {
        AttemptOutcome::Reply(ProviderReply::Success(text.to_string()))
    }

    fn attempt(candidate: usize) -> Step {
        Step::Attempt {
            candidate,
            delay: Duration::ZERO,
        }
    }

    #[test]
    fn test_starts_with_first_candidate() {
        let run = FallbackRun::new(3, FallbackPolicy::fallback());
        assert_eq!(run.state(), &FallbackState::Trying(0));
        assert_eq!(run.current_step(), attempt(0));
    }

    #[test]
    fn test_empty_candidate_list_is_exhausted() {
        let run = FallbackRun::new(0, FallbackPolicy::fallback());
        assert_eq!(run.state(), &FallbackState::Exhausted);
        assert_eq!(run.current_step(), Step::Finished(Answer::exhausted()));
    }

    #[test]
    fn test_success_on_first_candidate_finishes() {
        let mut run = FallbackRun::new(3, FallbackPolicy::fallback());
        let step = run.advance(success("42"));
        assert_eq!(step, Step::Finished(Answer::Text("42".to_string())));
        assert!(run.state().is_terminal());
    }

    #[test]
    fn test_gone_skips_to_next_candidate() {
        let mut run = FallbackRun::new(2, FallbackPolicy::fallback());
        assert_eq!(run.advance(AttemptOutcome::Gone), attempt(1));
        assert_eq!(
            run.advance(success("from second")),
            Step::Finished(Answer::Text("from second".to_string()))
        );
    }

    #[test]
    fn test_provider_error_skips_to_next_candidate() {
        let mut run = FallbackRun::new(2, FallbackPolicy::fallback());
        let step = run.advance(AttemptOutcome::Reply(ProviderReply::ProviderError(
            "Model is overloaded".to_string(),
        )));
        assert_eq!(step, attempt(1));
    }

    #[test]
    fn test_unknown_shape_is_returned_as_answer() {
        let mut run = FallbackRun::new(2, FallbackPolicy::fallback());
        let step = run.advance(AttemptOutcome::Reply(ProviderReply::UnknownShape(
            "\"plain\"".to_string(),
        )));
        assert_eq!(step, Step::Finished(Answer::Text("\"plain\"".to_string())));
    }

    #[test]
    fn test_loading_retries_exactly_once_with_capped_wait() {
        let mut run = FallbackRun::new(2, FallbackPolicy::fallback());
        let step = run.advance(AttemptOutcome::Loading {
            estimated_wait: Some(Duration::from_secs(45)),
        });
        assert_eq!(
            step,
            Step::Attempt {
                candidate: 0,
                delay: Duration::from_secs(20),
            }
        );
        assert_eq!(run.state(), &FallbackState::Retrying(0));

        // Still loading: no second retry, move on.
        let step = run.advance(AttemptOutcome::Loading {
            estimated_wait: Some(Duration::from_secs(1)),
        });
        assert_eq!(step, attempt(1));
    }

    #[test]
    fn test_short_estimated_wait_is_used_as_is() {
        let mut run = FallbackRun::new(1, FallbackPolicy::fallback());
        let step = run.advance(AttemptOutcome::Loading {
            estimated_wait: Some(Duration::from_millis(1500)),
        });
        assert_eq!(
            step,
            Step::Attempt {
                candidate: 0,
                delay: Duration::from_millis(1500),
            }
        );
    }

    #[test]
    fn test_loading_without_estimate_skips() {
        let mut run = FallbackRun::new(2, FallbackPolicy::fallback());
        let step = run.advance(AttemptOutcome::Loading {
            estimated_wait: None,
        });
        assert_eq!(step, attempt(1));
    }

    #[test]
    fn test_retry_then_failure_moves_on() {
        let mut run = FallbackRun::new(2, FallbackPolicy::fallback());
        run.advance(AttemptOutcome::Loading {
            estimated_wait: Some(Duration::from_secs(3)),
        });
        let step = run.advance(AttemptOutcome::Failed("timeout".to_string()));
        assert_eq!(step, attempt(1));
        assert_eq!(run.state(), &FallbackState::Trying(1));
    }

    #[test]
    fn test_all_failures_yield_sentinel() {
        let mut run = FallbackRun::new(3, FallbackPolicy::fallback());
        run.advance(AttemptOutcome::Failed("connection refused".to_string()));
        run.advance(AttemptOutcome::Failed("connection refused".to_string()));
        let step = run.advance(AttemptOutcome::Failed("connection refused".to_string()));
        assert_eq!(step, Step::Finished(Answer::exhausted()));
        assert_eq!(run.state(), &FallbackState::Exhausted);
    }

    #[test]
    fn test_single_shot_reports_last_failure() {
        let mut run = FallbackRun::new(1, FallbackPolicy::single_shot());
        let step = run.advance(AttemptOutcome::Failed("HTTP 401: invalid api key".to_string()));
        assert_eq!(
            step,
            Step::Finished(Answer::Error("HTTP 401: invalid api key".to_string()))
        );
    }

    #[test]
    fn test_single_shot_does_not_retry_loading() {
        let mut run = FallbackRun::new(1, FallbackPolicy::single_shot());
        let step = run.advance(AttemptOutcome::Loading {
            estimated_wait: Some(Duration::from_secs(5)),
        });
        assert!(matches!(step, Step::Finished(Answer::Error(_))));
    }

    #[test]
    fn test_advance_after_terminal_is_stable() {
        let mut run = FallbackRun::new(1, FallbackPolicy::fallback());
        run.advance(success("done"));
        let step = run.advance(AttemptOutcome::Gone);
        assert_eq!(step, Step::Finished(Answer::Text("done".to_string())));
    }
}
