//! Domain layer for llm-qa
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Normalization
//!
//! A question is echoed back in a normalized, tokenized form for display.
//! Normalization is informational only: the original text is what goes upstream.
//!
//! ## Fallback
//!
//! A question is answered by trying an ordered list of candidate models.
//! [`FallbackRun`] is the per-question state machine that decides whether to
//! retry a loading model, skip to the next candidate, or finish.

pub mod config;
pub mod core;
pub mod inference;
pub mod providers;
pub mod text;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{credential::Credential, error::DomainError, model::Model, question::Question};
pub use inference::{
    answer::{Answer, EXHAUSTED_MESSAGE},
    fallback::{AttemptOutcome, Exhaustion, FallbackPolicy, FallbackRun, FallbackState, Step},
    params::GenerationParams,
    reply::ProviderReply,
};
pub use providers::{Protocol, ProviderKind};
pub use text::normalizer::{NormalizedQuestion, normalize};
