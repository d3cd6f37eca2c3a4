//! DOMStorage domain: query and modify DOM storage.

mod commands;
mod events;
mod types;

pub use commands::*;
pub use events::*;
pub use types::*;

/// Domain name used in command methods.
pub const DOMAIN: &str = "DOMStorage";

#[cfg(test)]
#[path = "dom_storage_tests.rs"]
mod tests;
