//! Partitioner abstraction for consistent hashing.
//!
//! Partitioners are responsible for converting keys into tokens
//! that can be placed on the hash ring. The ring takes any
//! [`Partitioner`]; [`PartitionerKind`] names the built-in ones so they can
//! be chosen from configuration.

pub mod blake3;
pub mod sip;
pub mod traits;
pub mod xxh3;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use self::blake3::Blake3Partitioner;
pub use sip::SipPartitioner;
pub use traits::Partitioner;
pub use xxh3::Xxh3Partitioner;

/// Built-in partitioners, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionerKind {
    #[default]
    Blake3,
    Xxh3,
    Sip,
}

impl PartitionerKind {
    /// Instantiate the partitioner this kind names.
    pub fn build(self) -> Arc<dyn Partitioner> {
        match self {
            PartitionerKind::Blake3 => Arc::new(Blake3Partitioner),
            PartitionerKind::Xxh3 => Arc::new(Xxh3Partitioner),
            PartitionerKind::Sip => Arc::new(SipPartitioner),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PartitionerKind::Blake3 => "blake3",
            PartitionerKind::Xxh3 => "xxh3",
            PartitionerKind::Sip => "sip",
        }
    }
}

impl fmt::Display for PartitionerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blake3" => Ok(PartitionerKind::Blake3),
            "xxh3" => Ok(PartitionerKind::Xxh3),
            "sip" => Ok(PartitionerKind::Sip),
            other => Err(Error::Config(format!("unknown partitioner `{other}`"))),
        }
    }
}
