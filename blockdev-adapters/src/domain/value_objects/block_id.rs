//! Type-safe logical block number value object.

use core::fmt;

/// A zero-based logical block number.
///
/// Keeps block numbers from being mixed up with block counts or byte
/// offsets at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u32);

impl BlockId {
    /// Create a new block number.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdev_adapters::domain::BlockId;
    ///
    /// let block = BlockId::new(7);
    /// assert_eq!(block.value(), 7);
    /// ```
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying u32 value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Block `offset` positions after this one, or `None` on overflow.
    #[inline]
    pub const fn checked_add(self, offset: u32) -> Option<Self> {
        match self.0.checked_add(offset) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// The block immediately after this one (saturating).
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({})", self.0)
    }
}

impl From<u32> for BlockId {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<BlockId> for u32 {
    fn from(block: BlockId) -> Self {
        block.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_creation() {
        let block = BlockId::new(100);
        assert_eq!(block.value(), 100);
        assert_eq!(u32::from(block), 100);
        assert_eq!(BlockId::from(3), BlockId::new(3));
    }

    #[test]
    fn test_block_id_checked_add() {
        assert_eq!(BlockId::new(10).checked_add(5), Some(BlockId::new(15)));
        assert_eq!(BlockId::new(u32::MAX).checked_add(1), None);
    }

    #[test]
    fn test_block_id_next() {
        assert_eq!(BlockId::new(0).next().value(), 1);
        assert_eq!(BlockId::new(u32::MAX).next().value(), u32::MAX); // saturating
    }

    #[test]
    fn test_block_id_display() {
        assert_eq!(format!("{}", BlockId::new(512)), "Block(512)");
    }
}
