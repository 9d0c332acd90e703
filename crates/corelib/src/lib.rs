//! Consistent hash ring with virtual nodes.
//!
//! This crate maps keys to a changing set of servers so that:
//! - the mapping is deterministic while membership is unchanged
//! - adding or removing a server only moves the keys owned by that
//!   server's virtual nodes
//!
//! Modules:
//! - Token type and pluggable partitioners (hash functions)
//! - Server identity and virtual nodes
//! - The ring itself, its builder and configuration
//! - Ownership analysis

pub mod config;
pub mod error;
pub mod node;
pub mod partitioner;
pub mod ring;
pub mod token;
pub mod topology;
pub mod vnode;

pub use config::RingConfig;
pub use error::{Error, Result};
pub use node::ServerId;
pub use partitioner::{Partitioner, PartitionerKind};
pub use ring::{HashRing, RingBuilder, DEFAULT_VIRTUAL_NODES};
pub use token::Token;
pub use topology::Ownership;
pub use vnode::VirtualNode;
