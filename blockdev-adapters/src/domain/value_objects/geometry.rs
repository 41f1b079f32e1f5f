//! Device geometry value object.

use super::BlockId;

/// Block size used by every adapter in this crate (512 bytes).
pub const BLOCK_SIZE: usize = 512;

/// Addressable extent of a block device: block size and total block count.
///
/// Fixed once a device is initialized. The block size is always
/// [`BLOCK_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    block_size: usize,
    block_count: u32,
}

impl Geometry {
    /// Create a geometry of `block_count` blocks of [`BLOCK_SIZE`] bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdev_adapters::domain::Geometry;
    ///
    /// let geometry = Geometry::new(8);
    /// assert_eq!(geometry.block_size(), 512);
    /// assert_eq!(geometry.capacity(), 4096);
    /// ```
    pub const fn new(block_count: u32) -> Self {
        Self {
            block_size: BLOCK_SIZE,
            block_count,
        }
    }

    /// Block size in bytes.
    #[inline]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Total number of addressable blocks.
    #[inline]
    pub const fn block_count(&self) -> u32 {
        self.block_count
    }

    /// Total capacity in bytes.
    #[inline]
    pub const fn capacity(&self) -> u64 {
        self.block_count as u64 * self.block_size as u64
    }

    /// Whether the run `start .. start + count` lies inside the device.
    ///
    /// Overflow of `start + count` counts as outside.
    #[inline]
    pub const fn contains(&self, start: BlockId, count: u32) -> bool {
        match start.checked_add(count) {
            Some(end) => end.value() <= self.block_count,
            None => false,
        }
    }

    /// Number of buffer bytes needed to hold `count` blocks, or `None` when
    /// that does not fit in `usize` (runs past 8 Mi blocks on 32-bit targets).
    #[inline]
    pub const fn byte_len(&self, count: u32) -> Option<usize> {
        (count as usize).checked_mul(self.block_size)
    }

    /// Split a byte offset into the block holding it and the offset within
    /// that block.
    #[inline]
    pub const fn locate(&self, offset: u64) -> (BlockId, usize) {
        let block = (offset / self.block_size as u64) as u32;
        let within = (offset % self.block_size as u64) as usize;
        (BlockId::new(block), within)
    }
}
