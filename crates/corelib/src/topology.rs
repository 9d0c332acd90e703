//! Ring topology analysis.
//!
//! Each token owns the arc from the previous token (exclusive) to itself
//! (inclusive); the smallest token also owns the arc that wraps past
//! `Token::MAX`. Summing arcs per server gives the share of the key space
//! that resolves to it.

use std::collections::BTreeMap;

use crate::node::ServerId;
use crate::token::Token;

/// Share of the key space owned by each server, in `0.0..=1.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ownership {
    shares: BTreeMap<ServerId, f64>,
}

impl Ownership {
    pub(crate) fn from_tokens(tokens: &BTreeMap<Token, ServerId>) -> Self {
        let mut shares = BTreeMap::new();
        let Some((last, _)) = tokens.last_key_value() else {
            return Self { shares };
        };

        let mut previous: Option<Token> = None;
        for (token, server) in tokens {
            let arc = match previous {
                Some(prev) => u64::from(token.0 - prev.0),
                // Wrap arc: (last, MAX] plus [MIN, first]. A lone token owns
                // the whole ring.
                None => Token::RING_SIZE - u64::from(last.0) + u64::from(token.0),
            };
            *shares.entry(server.clone()).or_insert(0.0) += arc as f64 / Token::RING_SIZE as f64;
            previous = Some(*token);
        }

        Self { shares }
    }

    /// Share owned by `server`; zero for servers not on the ring.
    pub fn share(&self, server: impl AsRef<str>) -> f64 {
        self.shares.get(server.as_ref()).copied().unwrap_or(0.0)
    }

    /// The server with the largest share.
    pub fn max_share(&self) -> Option<(&ServerId, f64)> {
        self.shares
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(server, share)| (server, *share))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ServerId, f64)> {
        self.shares.iter().map(|(server, share)| (server, *share))
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
