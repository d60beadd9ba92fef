//! Inference concepts: what a provider returns and how a question is answered.
//!
//! - [`params::GenerationParams`]: sampling parameters sent upstream
//! - [`reply::ProviderReply`]: tagged result of decoding a provider response
//! - [`answer::Answer`]: the single textual result handed to front ends
//! - [`fallback::FallbackRun`]: per-question retry/fallback state machine

pub mod answer;
pub mod fallback;
pub mod params;
pub mod reply;
