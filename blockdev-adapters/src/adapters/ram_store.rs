//! In-memory backing store.
//!
//! Holds `N` blocks of 512 bytes on the stack (or wherever the store
//! itself lives), 4-byte aligned. Useful as a RAM disk, and as a simulated
//! medium in tests.

use crate::domain::{BackingStore, BlockId, BLOCK_SIZE};
use aligned::{Aligned, A4};

/// Error type for RAM store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamStoreError {
    /// The block lies outside the store.
    OutOfRange(BlockId),
}

impl core::fmt::Display for RamStoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange(block) => write!(f, "{} is outside the RAM store", block),
        }
    }
}

impl core::error::Error for RamStoreError {}

/// Write bookkeeping kept across writes to a [`RamStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteTally {
    blocks_written: u64,
    quiet_writes: u64,
    last_block: Option<BlockId>,
}

impl WriteTally {
    /// Total blocks written with this tally.
    #[inline]
    pub const fn blocks_written(&self) -> u64 {
        self.blocks_written
    }

    /// How many of those writes asked to be quiet.
    #[inline]
    pub const fn quiet_writes(&self) -> u64 {
        self.quiet_writes
    }

    /// Most recently written block.
    #[inline]
    pub const fn last_block(&self) -> Option<BlockId> {
        self.last_block
    }
}

/// Backing store of `N` blocks held in memory. Starts zeroed.
///
/// # Examples
///
/// ```
/// use blockdev_adapters::{BackingStore, RamStore};
///
/// let store = RamStore::<16>::new();
/// assert_eq!(RamStore::<16>::BLOCK_COUNT, 16);
/// # let _ = store;
/// ```
pub struct RamStore<const N: usize> {
    blocks: [Aligned<A4, [u8; BLOCK_SIZE]>; N],
}

impl<const N: usize> RamStore<N> {
    /// Create a zeroed store.
    pub fn new() -> Self {
        Self {
            blocks: core::array::from_fn(|_| Aligned([0u8; BLOCK_SIZE])),
        }
    }

    /// Create a store seeded from a disk image.
    ///
    /// Bytes past the store's capacity are ignored; a short image leaves the
    /// remaining blocks zeroed.
    pub fn from_image(image: &[u8]) -> Self {
        let mut store = Self::new();
        for (block, chunk) in store.blocks.iter_mut().zip(image.chunks(BLOCK_SIZE)) {
            block[..chunk.len()].copy_from_slice(chunk);
        }
        store
    }

    /// Contents of `block`, if it exists.
    pub fn block(&self, block: BlockId) -> Option<&[u8; BLOCK_SIZE]> {
        self.blocks.get(block.value() as usize).map(|b| &**b)
    }

    /// Total capacity in bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N * BLOCK_SIZE
    }
}

impl<const N: usize> Default for RamStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BackingStore for RamStore<N> {
    type Error = RamStoreError;
    type WriteState = WriteTally;
    const BLOCK_COUNT: u32 = N as u32;

    fn read_block(&mut self, block: BlockId, dest: &mut [u8; BLOCK_SIZE]) -> Result<(), Self::Error> {
        let stored = self
            .blocks
            .get(block.value() as usize)
            .ok_or(RamStoreError::OutOfRange(block))?;
        dest.copy_from_slice(&stored[..]);
        Ok(())
    }

    fn write_block(
        &mut self,
        block: BlockId,
        src: &[u8; BLOCK_SIZE],
        quiet: bool,
        state: &mut WriteTally,
    ) -> Result<(), Self::Error> {
        let stored = self
            .blocks
            .get_mut(block.value() as usize)
            .ok_or(RamStoreError::OutOfRange(block))?;
        stored.copy_from_slice(src);

        state.blocks_written += 1;
        if quiet {
            state.quiet_writes += 1;
        }
        state.last_block = Some(block);
        Ok(())
    }
}
