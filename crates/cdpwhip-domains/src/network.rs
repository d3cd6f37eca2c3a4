//! Network types referenced by other domains.

/// Unique request identifier.
pub type RequestId = String;
