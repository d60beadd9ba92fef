//! Text preprocessing.
//!
//! Display-only transforms applied to a question before it is echoed back
//! to the user. Nothing here affects what is sent upstream.

pub mod normalizer;
