//! BackingStore port - Secondary (driven) port for single-block I/O.
//!
//! This port is what a device adapter needs from the medium that actually
//! holds the data. Implementations own everything medium-specific; the
//! adapter only ever asks for whole 512-byte blocks by number.

use crate::domain::value_objects::{BlockId, BLOCK_SIZE};
use core::error::Error;

/// Port for single-block storage primitives.
///
/// This is a **secondary (driven) port** in hexagonal architecture terms.
///
/// ```text
/// ┌─────────────────────┐
/// │ BlockDeviceAdapter  │
/// └──────────┬──────────┘
///            │ depends on
///            ▼
/// ┌─────────────────────┐
/// │  BackingStore Port  │  ◄── This trait
/// └──────────┬──────────┘
///            │ implemented by
///            ▼
/// ┌─────────────────────┐
/// │ RamStore, flash,    │
/// │ virtual disks, ...  │
/// └─────────────────────┘
/// ```
pub trait BackingStore {
    /// The error type for storage operations.
    type Error: Error + Send + Sync + 'static;

    /// Accumulator threaded through consecutive `write_block` calls.
    ///
    /// A device creates one with `Default` when it is initialized and hands
    /// the same instance to every write until it is uninitialized. Stores
    /// that batch or track writes keep their bookkeeping here; stores that
    /// need none use `()`.
    type WriteState: Default;

    /// Total number of blocks this store exposes.
    const BLOCK_COUNT: u32;

    /// Fill `dest` with the contents of `block`.
    ///
    /// # Errors
    ///
    /// Returns an error if the block cannot be read.
    fn read_block(&mut self, block: BlockId, dest: &mut [u8; BLOCK_SIZE]) -> Result<(), Self::Error>;

    /// Store `src` as the contents of `block`.
    ///
    /// `quiet` asks the store to suppress any side channel it reports writes
    /// on (status output, progress indication).
    ///
    /// # Errors
    ///
    /// Returns an error if the block cannot be written.
    fn write_block(
        &mut self,
        block: BlockId,
        src: &[u8; BLOCK_SIZE],
        quiet: bool,
        state: &mut Self::WriteState,
    ) -> Result<(), Self::Error>;
}
