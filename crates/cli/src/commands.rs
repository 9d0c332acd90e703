//! CLI subcommands.

use std::fmt;

use clap::Subcommand;
use shardring::{HashRing, ServerId};

/// Subcommands run against a freshly built ring.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the server each key resolves to.
    Resolve {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Resolve keys, add a server, resolve again, remove a server, resolve
    /// again.
    Demo {
        /// Keys to track across the membership changes.
        #[arg(long, value_delimiter = ',', default_value = "UserA,UserB")]
        keys: Vec<String>,
        /// Server to add.
        #[arg(long, default_value = "S5")]
        add: String,
        /// Server to remove.
        #[arg(long, default_value = "S2")]
        remove: String,
    },
    /// Print each server's share of the key space.
    Ownership,
}

/// Output of a command, one line per entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub lines: Vec<String>,
}

impl CommandResult {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl Command {
    pub fn execute(&self, ring: &HashRing) -> anyhow::Result<CommandResult> {
        let mut out = CommandResult::default();
        match self {
            Command::Resolve { keys } => {
                resolve_keys(ring, keys, &mut out)?;
            }
            Command::Demo { keys, add, remove } => {
                resolve_keys(ring, keys, &mut out)?;

                if ring.add_server(add.as_str()) {
                    out.push(format!("After adding {add}:"));
                } else {
                    out.push(format!("{add} already on ring:"));
                }
                resolve_keys(ring, keys, &mut out)?;

                if ring.remove_server(remove) {
                    out.push(format!("After removing {remove}:"));
                } else {
                    out.push(format!("{remove} not on ring:"));
                }
                resolve_keys(ring, keys, &mut out)?;
            }
            Command::Ownership => {
                for (server, share) in ring.ownership().iter() {
                    out.push(format!("{server}: {:.2}%", share * 100.0));
                }
            }
        }
        Ok(out)
    }
}

fn resolve_keys(ring: &HashRing, keys: &[String], out: &mut CommandResult) -> anyhow::Result<()> {
    for key in keys {
        let server: ServerId = ring.resolve(key)?;
        out.push(format!("{key} -> {server}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> HashRing {
        HashRing::new(["S0", "S1", "S2", "S3", "S4"], 3).unwrap()
    }

    #[test]
    fn test_resolve_output() {
        let ring = ring();
        let result = Command::Resolve {
            keys: vec!["UserA".into()],
        }
        .execute(&ring)
        .unwrap();
        let expected = format!("UserA -> {}", ring.resolve("UserA").unwrap());
        assert_eq!(result.lines, vec![expected]);
    }

    #[test]
    fn test_demo_applies_membership_changes() {
        let ring = ring();
        let result = Command::Demo {
            keys: vec!["UserA".into(), "UserB".into()],
            add: "S5".into(),
            remove: "S2".into(),
        }
        .execute(&ring)
        .unwrap();

        assert_eq!(result.lines.len(), 8);
        assert_eq!(result.lines[2], "After adding S5:");
        assert_eq!(result.lines[5], "After removing S2:");
        assert!(ring.contains("S5"));
        assert!(!ring.contains("S2"));
    }

    #[test]
    fn test_resolve_on_empty_ring_fails() {
        let ring = HashRing::new(Vec::<ServerId>::new(), 3).unwrap();
        let err = Command::Resolve {
            keys: vec!["k".into()],
        }
        .execute(&ring)
        .unwrap_err();
        assert!(err.to_string().contains("no servers available"));
    }

    #[test]
    fn test_ownership_lists_every_server() {
        let result = Command::Ownership.execute(&ring()).unwrap();
        assert_eq!(result.lines.len(), 5);
        assert!(result.lines[0].starts_with("S0: "));
    }
}
