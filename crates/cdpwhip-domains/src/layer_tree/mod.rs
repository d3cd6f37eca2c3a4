//! LayerTree domain: compositing layer inspection and snapshots.

mod commands;
mod events;
mod types;

pub use commands::*;
pub use events::*;
pub use types::*;

/// Domain name used in command methods.
pub const DOMAIN: &str = "LayerTree";

#[cfg(test)]
#[path = "layer_tree_tests.rs"]
mod tests;
