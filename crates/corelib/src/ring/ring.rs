//! Hash ring data structure.
//!
//! Holds a `BTreeMap<Token, ServerId>` plus the membership set behind one
//! lock, and resolves keys with a clockwise range lookup.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use metrics::{counter, gauge};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::node::ServerId;
use crate::partitioner::{Blake3Partitioner, Partitioner};
use crate::token::Token;
use crate::topology::Ownership;
use crate::vnode::VirtualNode;

/// Virtual nodes per server when none is configured.
pub const DEFAULT_VIRTUAL_NODES: usize = 3;

/// Index and membership. Always read and written together.
#[derive(Debug, Default)]
struct RingState {
    /// Ring position -> owning server. Sorted by construction.
    tokens: BTreeMap<Token, ServerId>,
    /// Physical servers currently on the ring.
    servers: BTreeSet<ServerId>,
}

/// A consistent hash ring with a fixed number of virtual nodes per server.
///
/// All methods take `&self`; the ring can be shared across threads behind
/// an `Arc`. Membership changes hold the write lock for the whole update, so
/// a concurrent [`resolve`](Self::resolve) sees either the old ring or the
/// new one, never a partial update.
///
/// # Hash collisions
///
/// Two virtual nodes can land on the same token. The later insertion takes
/// the token, which leaves the earlier server with fewer than `V` virtual
/// nodes. Removal only deletes tokens the removed server still owns.
///
/// # Example
///
/// ```rust
/// use shardring::HashRing;
///
/// let ring = HashRing::new(["S0", "S1", "S2"], 3).unwrap();
/// let owner = ring.resolve("UserA").unwrap();
/// assert!(ring.contains(&owner));
/// ```
pub struct HashRing {
    state: RwLock<RingState>,
    vnodes: usize,
    partitioner: Arc<dyn Partitioner>,
}

impl HashRing {
    /// Build a ring with the default partitioner and add `servers` in order.
    ///
    /// Fails with [`Error::InvalidVirtualNodeCount`] when `vnodes` is zero.
    pub fn new<I, S>(servers: I, vnodes: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<ServerId>,
    {
        Self::with_partitioner(servers, vnodes, Arc::new(Blake3Partitioner))
    }

    /// Build a ring that places servers and keys with `partitioner`.
    pub fn with_partitioner<I, S>(
        servers: I,
        vnodes: usize,
        partitioner: Arc<dyn Partitioner>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<ServerId>,
    {
        if vnodes == 0 {
            return Err(Error::InvalidVirtualNodeCount(vnodes));
        }

        let ring = Self {
            state: RwLock::new(RingState::default()),
            vnodes,
            partitioner,
        };
        for server in servers {
            ring.add_server(server);
        }
        Ok(ring)
    }

    /// Add a server and its virtual nodes.
    ///
    /// Returns `false` without touching the ring if the server is already a
    /// member, so repeated calls never inflate its share of the key space.
    pub fn add_server(&self, server: impl Into<ServerId>) -> bool {
        let server = server.into();
        let mut state = self.state.write();

        if state.servers.contains(&server) {
            trace!(%server, "server already on ring");
            return false;
        }

        for replica in 0..self.vnodes {
            let vnode = VirtualNode::from_index(&server, replica, self.partitioner.as_ref());
            if let Some(previous) = state.tokens.insert(vnode.token, server.clone()) {
                debug!(token = %vnode.token, %previous, %server, "virtual node collision");
            }
        }
        state.servers.insert(server.clone());

        let tokens = state.tokens.len();
        drop(state);

        counter!("shardring_servers_added_total").increment(1);
        gauge!("shardring_tokens").set(tokens as f64);
        debug!(%server, vnodes = self.vnodes, tokens, "added server to ring");
        true
    }

    /// Remove a server and its virtual nodes.
    ///
    /// Returns `false` if the server was not a member. Keys it owned move to
    /// the next server clockwise; no other key changes owner.
    pub fn remove_server(&self, server: impl AsRef<str>) -> bool {
        let mut state = self.state.write();

        let Some(removed) = state.servers.take(server.as_ref()) else {
            trace!(server = server.as_ref(), "server not on ring");
            return false;
        };

        for replica in 0..self.vnodes {
            let vnode = VirtualNode::from_index(&removed, replica, self.partitioner.as_ref());
            // Skip tokens another server took over through a collision.
            if state.tokens.get(&vnode.token) == Some(&removed) {
                state.tokens.remove(&vnode.token);
            }
        }

        let tokens = state.tokens.len();
        drop(state);

        counter!("shardring_servers_removed_total").increment(1);
        gauge!("shardring_tokens").set(tokens as f64);
        debug!(server = %removed, tokens, "removed server from ring");
        true
    }

    /// Find the server responsible for `key`.
    ///
    /// Hashes the key and walks clockwise to the first token at or after it,
    /// wrapping to the smallest token past the end of the ring.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRing`] if no servers are on the ring.
    pub fn resolve(&self, key: impl AsRef<[u8]>) -> Result<ServerId> {
        self.resolve_token(self.token_for(key))
    }

    /// Find the server owning ring position `token`.
    pub fn resolve_token(&self, token: Token) -> Result<ServerId> {
        let state = self.state.read();
        state
            .tokens
            .range(token..)
            .next()
            .or_else(|| state.tokens.iter().next())
            .map(|(_, server)| server.clone())
            .ok_or(Error::EmptyRing)
    }

    /// Ring position of `key` under this ring's partitioner.
    pub fn token_for(&self, key: impl AsRef<[u8]>) -> Token {
        self.partitioner.partition(key.as_ref())
    }

    pub fn contains(&self, server: impl AsRef<str>) -> bool {
        self.state.read().servers.contains(server.as_ref())
    }

    /// Members in ascending order.
    pub fn servers(&self) -> Vec<ServerId> {
        self.state.read().servers.iter().cloned().collect()
    }

    pub fn server_count(&self) -> usize {
        self.state.read().servers.len()
    }

    /// Number of occupied ring positions.
    pub fn token_count(&self) -> usize {
        self.state.read().tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().servers.is_empty()
    }

    /// All `(token, server)` pairs in ring order.
    pub fn tokens(&self) -> Vec<(Token, ServerId)> {
        self.state
            .read()
            .tokens
            .iter()
            .map(|(token, server)| (*token, server.clone()))
            .collect()
    }

    pub fn virtual_node_count(&self) -> usize {
        self.vnodes
    }

    pub fn partitioner_name(&self) -> &'static str {
        self.partitioner.name()
    }

    /// Fraction of the key space each server currently owns.
    pub fn ownership(&self) -> Ownership {
        Ownership::from_tokens(&self.state.read().tokens)
    }
}

impl fmt::Debug for HashRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("HashRing")
            .field("servers", &state.servers)
            .field("tokens", &state.tokens.len())
            .field("vnodes", &self.vnodes)
            .field("partitioner", &self.partitioner.name())
            .finish()
    }
}
