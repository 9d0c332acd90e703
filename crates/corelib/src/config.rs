//! Ring configuration.
//!
//! ```json
//! {
//!   "servers": ["S0", "S1", "S2"],
//!   "virtual_node_count": 3,
//!   "partitioner": "blake3"
//! }
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::node::ServerId;
use crate::partitioner::PartitionerKind;
use crate::ring::{HashRing, DEFAULT_VIRTUAL_NODES};

/// Settings needed to construct a [`HashRing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Initial members, added in order.
    pub servers: Vec<ServerId>,
    /// Virtual nodes per server. Must be at least 1.
    pub virtual_node_count: usize,
    pub partitioner: PartitionerKind,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            virtual_node_count: DEFAULT_VIRTUAL_NODES,
            partitioner: PartitionerKind::default(),
        }
    }
}

impl RingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Validate the settings and construct the ring.
    pub fn build_ring(&self) -> Result<HashRing> {
        HashRing::with_partitioner(
            self.servers.iter(),
            self.virtual_node_count,
            self.partitioner.build(),
        )
    }
}
