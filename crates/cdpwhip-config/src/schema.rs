//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dedup: DedupConfig,

    #[serde(default)]
    pub decoding: DecodingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Duplicate notification suppression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Number of recent identity hashes remembered.
    #[serde(default = "default_dedup_capacity")]
    pub capacity: usize,
}

fn default_dedup_capacity() -> usize {
    1024
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_dedup_capacity(),
        }
    }
}

impl DedupConfig {
    /// Window size to use; zero when disabled.
    pub fn effective_capacity(&self) -> usize {
        if self.enabled { self.capacity } else { 0 }
    }
}

/// What to do with a notification no event type is registered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownEventPolicy {
    /// Drop it with a warning.
    #[default]
    Ignore,
    /// Report it as an error.
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodingConfig {
    #[serde(default)]
    pub unknown_events: UnknownEventPolicy,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,

    /// Also write daily-rotated log files into this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
            directory: None,
        }
    }
}
