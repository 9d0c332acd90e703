//! SipHash partitioner.

use crate::partitioner::traits::Partitioner;
use crate::token::Token;
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// SipHash-1-3 with fixed zero keys, folded from 64 to 32 bits.
///
/// The keys must stay fixed: a randomly keyed hasher would place the same
/// virtual node at a different token in every process.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipPartitioner;

impl Partitioner for SipPartitioner {
    fn partition(&self, key: &[u8]) -> Token {
        let mut hasher = SipHasher13::new_with_keys(0, 0);
        hasher.write(key);
        let hash = hasher.finish();
        Token((hash ^ (hash >> 32)) as u32)
    }

    fn name(&self) -> &'static str {
        "SipPartitioner"
    }
}
