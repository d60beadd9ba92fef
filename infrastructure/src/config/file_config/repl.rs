//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while a question is in flight
    pub show_progress: bool,
    /// Path to history file; a leading `~/` refers to the home directory
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// History file location with `~` expanded
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .as_deref()
            .map(|raw| expand_home(raw, dirs::home_dir().as_deref()))
    }
}

/// Replace a leading `~` or `~/` with `home`.
///
/// Paths are returned unchanged when there is no home directory.
fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    match (raw, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (_, Some(home)) if raw.starts_with("~/") => home.join(&raw[2..]),
        _ => PathBuf::from(raw),
    }
}
