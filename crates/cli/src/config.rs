//! Command-line configuration.
//!
//! Ring settings come from an optional JSON file (`--config`); flags given on
//! the command line override the file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shardring::{HashRing, PartitionerKind, RingConfig, ServerId};
use tracing::{info, Level};

use crate::commands::Command;

/// Servers used when neither the config file nor `--servers` names any.
pub const DEFAULT_SERVERS: [&str; 5] = ["S0", "S1", "S2", "S3", "S4"];

#[derive(Debug, Parser)]
#[command(name = "shardring", version, about = "Consistent hash ring explorer")]
pub struct CliConfig {
    /// JSON ring configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Comma-separated initial servers.
    #[arg(short, long, value_delimiter = ',', global = true)]
    pub servers: Vec<String>,

    /// Virtual nodes per server.
    #[arg(long, global = true)]
    pub vnodes: Option<usize>,

    /// Hash used to place servers and keys (blake3, xxh3, sip).
    #[arg(long, global = true)]
    pub partitioner: Option<PartitionerKind>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn run(&self) -> anyhow::Result<()> {
        init_tracing(self.verbose);

        let ring_config = self.ring_config()?;
        let ring = ring_config.build_ring().context("building ring")?;
        info!(
            servers = ring.server_count(),
            vnodes = ring.virtual_node_count(),
            partitioner = ring.partitioner_name(),
            "ring ready"
        );

        let result = self.command.execute(&ring)?;
        print!("{result}");
        Ok(())
    }

    /// Merge the config file (if any), flags and defaults.
    pub fn ring_config(&self) -> anyhow::Result<RingConfig> {
        let mut config = match &self.config {
            Some(path) => RingConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RingConfig::default(),
        };

        if !self.servers.is_empty() {
            config.servers = self.servers.iter().map(ServerId::from).collect();
        }
        if config.servers.is_empty() {
            config.servers = DEFAULT_SERVERS.into_iter().map(ServerId::from).collect();
        }
        if let Some(vnodes) = self.vnodes {
            config.virtual_node_count = vnodes;
        }
        if let Some(partitioner) = self.partitioner {
            config.partitioner = partitioner;
        }
        Ok(config)
    }

    /// Convenience for tests and embedding.
    pub fn build_ring(&self) -> anyhow::Result<HashRing> {
        Ok(self.ring_config()?.build_ring()?)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["shardring", "ownership"]);
        let config = cli.ring_config().unwrap();
        assert_eq!(config.servers.len(), 5);
        assert_eq!(config.virtual_node_count, 3);
        assert_eq!(config.partitioner, PartitionerKind::Blake3);
    }

    #[test]
    fn test_flags_override() {
        let cli = CliConfig::parse_from([
            "shardring",
            "--servers",
            "a,b",
            "--vnodes",
            "16",
            "--partitioner",
            "xxh3",
            "resolve",
            "k1",
        ]);
        let ring = cli.build_ring().unwrap();
        assert_eq!(ring.servers(), vec![ServerId::new("a"), ServerId::new("b")]);
        assert_eq!(ring.token_count(), 32);
        assert_eq!(ring.partitioner_name(), "Xxh3Partitioner");
    }

    #[test]
    fn test_zero_vnodes_is_an_error() {
        let cli = CliConfig::parse_from(["shardring", "--vnodes", "0", "ownership"]);
        assert!(cli.build_ring().is_err());
    }

    #[test]
    fn test_unknown_partitioner_rejected() {
        let parsed = CliConfig::try_parse_from(["shardring", "--partitioner", "md4", "ownership"]);
        assert!(parsed.is_err());
    }
}
