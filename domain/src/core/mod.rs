//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: upstream model identifiers (DeepSeek, Groq, Hugging Face, ...)
//! - [`question::Question`]: a validated question to send upstream
//! - [`credential::Credential`]: an opaque API key
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod question;
