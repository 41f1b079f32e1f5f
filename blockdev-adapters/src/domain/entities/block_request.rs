//! Block request entity - one read or write over a contiguous run of blocks.

use crate::domain::value_objects::BlockId;

/// A single I/O operation over `block_count` contiguous blocks starting at
/// `block_id`.
///
/// The buffer belongs to the caller and must hold at least
/// `block_count * BLOCK_SIZE` bytes. Devices borrow it only for the duration
/// of a request call.
///
/// # Type Parameters
///
/// - `B`: the buffer. Anything viewable as bytes works: `[u8; N]`,
///   `&mut [u8]`, `&[u8]`, `Vec<u8>`. Reads additionally need `AsMut<[u8]>`.
///
/// # Examples
///
/// ```
/// use blockdev_adapters::domain::{BlockId, BlockRequest};
///
/// let request = BlockRequest::new(BlockId::new(4), 2, [0u8; 1024]);
/// assert_eq!(request.block_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRequest<B> {
    block_id: BlockId,
    block_count: u32,
    buffer: B,
}

impl<B> BlockRequest<B> {
    /// Create a request for `block_count` blocks starting at `block_id`.
    pub const fn new(block_id: BlockId, block_count: u32, buffer: B) -> Self {
        Self {
            block_id,
            block_count,
            buffer,
        }
    }

    /// First block of the run.
    #[inline]
    pub const fn block_id(&self) -> BlockId {
        self.block_id
    }

    /// Number of blocks in the run.
    #[inline]
    pub const fn block_count(&self) -> u32 {
        self.block_count
    }

    /// Give the buffer back to the caller.
    pub fn into_buffer(self) -> B {
        self.buffer
    }
}

impl<B: AsRef<[u8]>> BlockRequest<B> {
    /// Read-only view of the buffer.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Borrow this request with a plain byte-slice buffer.
    ///
    /// Completion events carry this view; its buffer points at the same
    /// memory as the original request.
    pub fn as_view(&self) -> BlockRequest<&[u8]> {
        BlockRequest {
            block_id: self.block_id,
            block_count: self.block_count,
            buffer: self.buffer.as_ref(),
        }
    }

    /// Whether `view` describes this very request (same run, same buffer
    /// memory).
    pub fn is_same_request(&self, view: &BlockRequest<&[u8]>) -> bool {
        self.block_id == view.block_id
            && self.block_count == view.block_count
            && core::ptr::eq(self.buffer.as_ref(), view.buffer)
    }
}

impl<B: AsMut<[u8]>> BlockRequest<B> {
    /// Mutable view of the buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }
}
