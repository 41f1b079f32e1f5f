//! Implementations of embedded_io_async traits for block streams.
//!
//! These implementations bridge our stream to the embedded_io_async
//! ecosystem, which is what FAT and other filesystem crates consume.

use crate::{
    domain::BlockDevice,
    infrastructure::streaming::{BlockStream, StreamError},
};
use embedded_io_async::{ErrorType, Read, Seek, SeekFrom, Write};

impl<D: BlockDevice> ErrorType for BlockStream<D> {
    type Error = StreamError<D::Error>;
}

impl<D: BlockDevice> Read for BlockStream<D> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.read_bytes(buf).await
    }
}

impl<D: BlockDevice> Write for BlockStream<D> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.write_bytes(buf).await
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.flush_device().await
    }
}

impl<D: BlockDevice> Seek for BlockStream<D> {
    async fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        self.seek_to(pos).await
    }
}
