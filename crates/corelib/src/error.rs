//! Error types for the ring library.

use thiserror::Error;

/// Result type alias for the ring library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a ring.
///
/// Redundant membership changes (adding a server twice, removing a server
/// that is not on the ring) are not errors; those calls report `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Every server needs at least one virtual node.
    #[error("virtual node count must be at least 1, got {0}")]
    InvalidVirtualNodeCount(usize),
    /// A key was resolved against a ring with no servers.
    #[error("no servers available: the ring is empty")]
    EmptyRing,
    /// Ring configuration could not be read or parsed.
    #[error("invalid ring configuration: {0}")]
    Config(String),
}
