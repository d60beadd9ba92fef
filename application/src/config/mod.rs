//! Application-level configuration.
//!
//! - [`ExecutionParams`]: which models to try, with what sampling, under which fallback policy

pub mod execution_params;

pub use execution_params::ExecutionParams;
