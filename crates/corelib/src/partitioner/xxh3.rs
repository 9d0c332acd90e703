//! xxh3 partitioner.

use crate::partitioner::traits::Partitioner;
use crate::token::Token;
use xxhash_rust::xxh3::xxh3_64;

/// Low 32 bits of the 64-bit xxh3 hash. Much faster than a cryptographic
/// digest for hot lookup paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3Partitioner;

impl Partitioner for Xxh3Partitioner {
    fn partition(&self, key: &[u8]) -> Token {
        Token(xxh3_64(key) as u32)
    }

    fn name(&self) -> &'static str {
        "Xxh3Partitioner"
    }
}
