//! Log domain: access to log entries.

mod commands;
mod events;
mod types;

pub use commands::*;
pub use events::*;
pub use types::*;

/// Domain name used in command methods.
pub const DOMAIN: &str = "Log";

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
