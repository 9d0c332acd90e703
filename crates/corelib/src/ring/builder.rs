//! Builder for [`HashRing`].

use std::sync::Arc;

use crate::error::Result;
use crate::node::ServerId;
use crate::partitioner::{Blake3Partitioner, Partitioner};
use crate::ring::ring::{HashRing, DEFAULT_VIRTUAL_NODES};

/// Collects ring settings and initial servers, then validates them in
/// [`build`](Self::build).
///
/// ```rust
/// use shardring::RingBuilder;
/// use shardring::partitioner::Xxh3Partitioner;
///
/// let ring = RingBuilder::new()
///     .with_vnodes(16)
///     .with_partitioner(Xxh3Partitioner)
///     .add_server("S0")
///     .add_server("S1")
///     .build()
///     .unwrap();
/// assert_eq!(ring.token_count(), 32);
/// ```
pub struct RingBuilder {
    vnodes: usize,
    partitioner: Arc<dyn Partitioner>,
    servers: Vec<ServerId>,
}

impl RingBuilder {
    /// Defaults: 3 virtual nodes per server, BLAKE3 placement, no servers.
    pub fn new() -> Self {
        Self {
            vnodes: DEFAULT_VIRTUAL_NODES,
            partitioner: Arc::new(Blake3Partitioner),
            servers: Vec::new(),
        }
    }

    pub fn with_vnodes(mut self, vnodes: usize) -> Self {
        self.vnodes = vnodes;
        self
    }

    pub fn with_partitioner(mut self, partitioner: impl Partitioner) -> Self {
        self.partitioner = Arc::new(partitioner);
        self
    }

    pub fn with_shared_partitioner(mut self, partitioner: Arc<dyn Partitioner>) -> Self {
        self.partitioner = partitioner;
        self
    }

    /// Queue a server. Servers are added in the order they were queued.
    pub fn add_server(mut self, server: impl Into<ServerId>) -> Self {
        self.servers.push(server.into());
        self
    }

    pub fn add_servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ServerId>,
    {
        self.servers.extend(servers.into_iter().map(Into::into));
        self
    }

    /// Build the ring. Fails if the virtual node count is zero.
    pub fn build(self) -> Result<HashRing> {
        HashRing::with_partitioner(self.servers, self.vnodes, self.partitioner)
    }
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self::new()
    }
}
