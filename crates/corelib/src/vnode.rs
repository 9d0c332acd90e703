//! Virtual node abstractions.
//!
//! # Virtual Nodes (VNodes) Concept
//!
//! Instead of each physical server having a single token on the ring, each
//! server has `V` tokens (virtual nodes). This provides:
//!
//! 1. **Better Load Distribution**: More tokens = smoother distribution of keys
//! 2. **Gradual Rebalancing**: When servers join/leave, only the keys owned by
//!    their virtual nodes move
//!
//! # Performance Characteristics
//!
//! - **Memory**: O(v) where v = number of vnodes per server
//! - **Lookup**: O(log n) where n = total vnodes
//! - **Membership change**: O(v log n)
//!
//! More vnodes = better distribution but more memory and slightly slower
//! membership changes. The ring default is 3.

use crate::node::ServerId;
use crate::partitioner::Partitioner;
use crate::token::Token;

/// A virtual node on the hash ring.
///
/// Identified by `(server, replica)` and placed at
/// `partition("{server}-{replica}")`. Placement depends on nothing else, so
/// the ring can recompute a server's tokens when the server is removed.
///
/// # Example
///
/// ```rust
/// use shardring::partitioner::Blake3Partitioner;
/// use shardring::{ServerId, VirtualNode};
///
/// let vnode = VirtualNode::from_index(&ServerId::new("S0"), 0, &Blake3Partitioner);
/// assert_eq!(vnode.replica(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VirtualNode {
    /// Token position on the ring.
    pub token: Token,

    /// The physical server that owns this virtual node.
    pub server: ServerId,

    /// Replica index in `0..V`.
    pub replica: usize,
}

impl VirtualNode {
    #[inline]
    pub fn new(token: Token, server: ServerId, replica: usize) -> Self {
        Self {
            token,
            server,
            replica,
        }
    }

    /// Create a virtual node from a server and replica index.
    ///
    /// # Algorithm
    ///
    /// 1. Format string: "server-replica"
    /// 2. Hash the string with the ring's partitioner
    /// 3. Create VirtualNode with the resulting token
    pub fn from_index(server: &ServerId, replica: usize, partitioner: &dyn Partitioner) -> Self {
        let vnode_key = Self::key(server, replica);
        let token = partitioner.partition(vnode_key.as_bytes());
        Self::new(token, server.clone(), replica)
    }

    /// The string hashed to place replica `replica` of `server`.
    pub fn key(server: &ServerId, replica: usize) -> String {
        format!("{server}-{replica}")
    }

    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    #[inline]
    pub fn server(&self) -> &ServerId {
        &self.server
    }

    #[inline]
    pub fn replica(&self) -> usize {
        self.replica
    }

    /// Clockwise distance from this virtual node to another.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> u32 {
        self.token.distance_to(&other.token)
    }
}

impl PartialOrd for VirtualNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by ring position first.
impl Ord for VirtualNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.token
            .cmp(&other.token)
            .then_with(|| self.server.cmp(&other.server))
            .then_with(|| self.replica.cmp(&other.replica))
    }
}

impl std::fmt::Display for VirtualNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VNode(token={}, server={}#{})", self.token, self.server, self.replica)
    }
}
