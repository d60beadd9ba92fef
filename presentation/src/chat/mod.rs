//! Interactive chat module
//!
//! Provides a readline-based question loop.

mod repl;

pub use repl::ChatRepl;
