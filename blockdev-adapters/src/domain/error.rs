//! Domain-level errors and result codes.
//!
//! `DeviceError` is what a caller gets back from a device operation;
//! `ResultCode` is its payload-free mirror, carried on events.

use crate::domain::value_objects::BlockId;
use core::fmt;

/// Outcome of an operation as reported on events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResultCode {
    /// The operation completed.
    Success,
    /// A required argument was missing or malformed.
    InvalidArgument,
    /// The request kind is not handled by this device.
    NotSupported,
    /// The device has not been initialized.
    NotInitialized,
    /// The request reaches past the end of the device.
    OutOfRange,
    /// The backing store failed.
    Io,
}

impl ResultCode {
    /// Check if this code reports success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ResultCode::Success)
    }
}

/// Errors returned by block device operations.
///
/// Generic over the backing store's error type, which only appears in
/// [`DeviceError::Io`].
#[derive(Debug)]
#[non_exhaustive]
pub enum DeviceError<E> {
    /// A required argument was missing, or a buffer was too small for the
    /// requested run of blocks.
    InvalidArgument,

    /// The control request kind is not handled by this device.
    NotSupported,

    /// The device has not been initialized (or has been uninitialized).
    NotInitialized,

    /// The requested run of blocks does not fit inside the device.
    OutOfRange {
        /// First block requested.
        start: BlockId,
        /// Number of blocks requested.
        count: u32,
        /// Total blocks on the device.
        block_count: u32,
    },

    /// The backing store failed on `block`; later blocks of the run were
    /// not attempted.
    Io {
        /// Block whose transfer failed.
        block: BlockId,
        /// Error reported by the backing store.
        source: E,
    },
}

impl<E> DeviceError<E> {
    /// The result code matching this error.
    pub const fn code(&self) -> ResultCode {
        match self {
            Self::InvalidArgument => ResultCode::InvalidArgument,
            Self::NotSupported => ResultCode::NotSupported,
            Self::NotInitialized => ResultCode::NotInitialized,
            Self::OutOfRange { .. } => ResultCode::OutOfRange,
            Self::Io { .. } => ResultCode::Io,
        }
    }
}

impl<E: fmt::Display> fmt::Display for DeviceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "Invalid argument"),
            Self::NotSupported => write!(f, "Request not supported by this device"),
            Self::NotInitialized => write!(f, "Device is not initialized"),
            Self::OutOfRange {
                start,
                count,
                block_count,
            } => write!(
                f,
                "{} blocks starting at {} exceed device of {} blocks",
                count, start, block_count
            ),
            Self::Io { block, source } => write!(f, "Storage error at {}: {}", block, source),
        }
    }
}

impl<E> core::error::Error for DeviceError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
