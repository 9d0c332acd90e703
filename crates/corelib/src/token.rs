//! Ring positions.
//!
//! The ring is the circular space of 32-bit hash outputs: `Token::MAX` is
//! followed by `Token::MIN`.

use std::fmt;

/// A position on the hash ring.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Token(pub u32);

impl Token {
    /// Start of the ring.
    pub const MIN: Token = Token(0);
    /// End of the ring; the next position clockwise is `Token::MIN`.
    pub const MAX: Token = Token(u32::MAX);

    /// Number of distinct positions on the ring.
    pub const RING_SIZE: u64 = 1 << 32;

    pub fn is_min(&self) -> bool {
        *self == Self::MIN
    }

    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }

    /// Clockwise distance from `self` to `other`, wrapping past `Token::MAX`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> u32 {
        other.0.wrapping_sub(self.0)
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
