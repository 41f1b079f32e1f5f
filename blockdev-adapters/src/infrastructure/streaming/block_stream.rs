//! Block-buffered byte stream over a block device.

use crate::{
    domain::{BlockDevice, BlockRequest, Ioctl, BLOCK_SIZE},
    infrastructure::streaming::StreamError,
};
use embedded_io_async::SeekFrom;

/// Byte stream over a [`BlockDevice`] with a one-block scratch buffer.
///
/// Every read or write touches at most one block per call, through the
/// device's `read_req`/`write_req`. Writes that cover only part of a block
/// read the block first and write it back whole. The device must be
/// initialized before the stream is used.
///
/// # Examples
///
/// ```ignore
/// use blockdev_adapters::{BlockStream, embedded_io_async::{Read, Seek, SeekFrom, Write}};
///
/// let mut stream = BlockStream::new(device);
/// stream.write_all(b"hello").await?;
/// stream.seek(SeekFrom::Start(0)).await?;
/// stream.read_exact(&mut buf).await?;
/// ```
pub struct BlockStream<D> {
    device: D,
    position: u64,
    scratch: [u8; BLOCK_SIZE],
}

impl<D: BlockDevice> BlockStream<D> {
    /// Create a stream positioned at the start of `device`.
    pub fn new(device: D) -> Self {
        Self {
            device,
            position: 0,
            scratch: [0u8; BLOCK_SIZE],
        }
    }

    /// Get the current position in the stream.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get a reference to the underlying device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Get a mutable reference to the underlying device.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Consume the stream and return the underlying device.
    pub fn into_inner(self) -> D {
        self.device
    }

    /// Get the size of the underlying device in bytes.
    pub fn size(&self) -> Result<u64, StreamError<D::Error>> {
        Ok(self.device.geometry()?.capacity())
    }

    /// Read from the block holding the current position.
    ///
    /// Returns 0 at or past the end of the device.
    pub(crate) async fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, StreamError<D::Error>> {
        if buf.is_empty() {
            return Ok(0);
        }

        let geometry = *self.device.geometry()?;
        if self.position >= geometry.capacity() {
            return Ok(0);
        }

        let (block, offset) = geometry.locate(self.position);
        let mut request = BlockRequest::new(block, 1, &mut self.scratch[..]);
        self.device.read_req(&mut request)?;

        let to_read = buf.len().min(BLOCK_SIZE - offset);
        buf[..to_read].copy_from_slice(&self.scratch[offset..offset + to_read]);
        self.position += to_read as u64;
        Ok(to_read)
    }

    /// Write into the block holding the current position.
    pub(crate) async fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, StreamError<D::Error>> {
        if buf.is_empty() {
            return Ok(0);
        }

        let geometry = *self.device.geometry()?;
        if self.position >= geometry.capacity() {
            return Err(StreamError::OutOfBounds);
        }

        let (block, offset) = geometry.locate(self.position);
        let to_write = buf.len().min(BLOCK_SIZE - offset);

        // Partial block: keep the bytes we are not overwriting
        if to_write < BLOCK_SIZE {
            let mut request = BlockRequest::new(block, 1, &mut self.scratch[..]);
            self.device.read_req(&mut request)?;
        }

        self.scratch[offset..offset + to_write].copy_from_slice(&buf[..to_write]);
        self.device
            .write_req(&BlockRequest::new(block, 1, &self.scratch[..]))?;
        self.position += to_write as u64;
        Ok(to_write)
    }

    /// Ask the device to flush its cache.
    pub(crate) async fn flush_device(&mut self) -> Result<(), StreamError<D::Error>> {
        let mut flushing = false;
        self.device.ioctl(Ioctl::CacheFlush(Some(&mut flushing)))?;
        if flushing {
            debug!("device still flushing after cache-flush request");
        }
        Ok(())
    }

    /// Move to a new position; positions past the end are allowed.
    pub(crate) async fn seek_to(&mut self, pos: SeekFrom) -> Result<u64, StreamError<D::Error>> {
        let size = self.size()?;

        let new_pos = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::Current(offset) => self.position.checked_add_signed(offset),
            SeekFrom::End(offset) => size.checked_add_signed(offset),
        }
        .ok_or(StreamError::InvalidSeek)?;

        self.position = new_pos;
        Ok(self.position)
    }
}
