//! Byte streams over block devices.
//!
//! `BlockStream` turns any [`BlockDevice`](crate::domain::BlockDevice) into
//! an `embedded_io_async` Read/Write/Seek stream, going through the device's
//! block requests so events still fire for every block touched.

mod block_stream;
mod embedded_io_impl;

pub use block_stream::BlockStream;

use crate::domain::DeviceError;
use core::fmt;

/// Unified I/O error type for streaming operations.
#[derive(Debug)]
pub enum StreamError<E> {
    /// Error from the underlying block device.
    Device(DeviceError<E>),
    /// I/O operation would exceed device bounds.
    OutOfBounds,
    /// Invalid seek position.
    InvalidSeek,
}

impl<E> From<DeviceError<E>> for StreamError<E> {
    fn from(err: DeviceError<E>) -> Self {
        Self::Device(err)
    }
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(e) => write!(f, "Device error: {}", e),
            Self::OutOfBounds => write!(f, "Operation would exceed device bounds"),
            Self::InvalidSeek => write!(f, "Invalid seek position"),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for StreamError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Device(e) => Some(e),
            _ => None,
        }
    }
}

// Implement embedded_io_async::Error so our streams can be used with embedded_io_async
impl<E: core::error::Error + 'static> embedded_io_async::Error for StreamError<E> {
    fn kind(&self) -> embedded_io_async::ErrorKind {
        match self {
            Self::Device(DeviceError::InvalidArgument) => embedded_io_async::ErrorKind::InvalidInput,
            Self::Device(DeviceError::NotSupported) => embedded_io_async::ErrorKind::Unsupported,
            Self::Device(_) => embedded_io_async::ErrorKind::Other,
            Self::OutOfBounds => embedded_io_async::ErrorKind::InvalidInput,
            Self::InvalidSeek => embedded_io_async::ErrorKind::InvalidInput,
        }
    }
}
