//! CLI tool for exercising a consistent hash ring.
//!
//! Provides commands for:
//! - Resolving keys to servers
//! - Replaying a membership change and showing which keys move
//! - Inspecting how much of the ring each server owns

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
