//! Consistent hash ring implementation.
//!
//! The ring manages token positions and provides efficient lookup
//! operations for finding servers responsible for keys.

pub mod builder;
#[allow(clippy::module_inception)]
pub mod ring;

pub use builder::RingBuilder;
pub use ring::{HashRing, DEFAULT_VIRTUAL_NODES};
