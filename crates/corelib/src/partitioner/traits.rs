//! Core partitioner trait definitions.

use crate::token::Token;

/// A partitioner converts keys into tokens for placement on the hash ring.
///
/// Both virtual nodes and lookup keys go through the same partitioner, so an
/// implementation must be:
///
/// - **Deterministic**: a server's virtual-node positions are recomputed on
///   removal, so the same bytes must always give the same token.
/// - **Uniform**: tokens should spread evenly over the full `u32` space.
///
/// Partitioners are stateless and thread-safe, allowing concurrent
/// token generation without synchronization overhead.
pub trait Partitioner: Send + Sync + 'static {
    /// Converts a key into a token.
    fn partition(&self, key: &[u8]) -> Token;

    /// Returns the name of this partitioner.
    fn name(&self) -> &'static str;
}
