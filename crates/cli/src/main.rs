//! CLI entry point for shardring.

use clap::Parser;
use shardring_cli::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    config.run()
}
