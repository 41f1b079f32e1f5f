//! Block request translator - splits a run of blocks into single-block
//! backing store calls.
//!
//! Blocks are visited in ascending order, one at a time, each against its
//! own `BLOCK_SIZE` window of the caller's buffer. The first failure stops
//! the run.

use crate::domain::{
    error::DeviceError,
    ports::BackingStore,
    value_objects::{BlockId, BLOCK_SIZE},
};

/// Read consecutive blocks starting at `start` into `dest`.
///
/// One block is read per full `BLOCK_SIZE` chunk of `dest`; callers size
/// `dest` to exactly the run they want.
///
/// # Errors
///
/// Returns [`DeviceError::Io`] naming the first block that failed. Blocks
/// after it are not read; chunks before it already hold their data.
pub fn read_blocks<S: BackingStore>(
    store: &mut S,
    start: BlockId,
    dest: &mut [u8],
) -> Result<(), DeviceError<S::Error>> {
    debug_assert!(dest.len() % BLOCK_SIZE == 0);

    let mut block = start;
    let mut rest = dest;
    while let Some((chunk, tail)) = core::mem::take(&mut rest).split_first_chunk_mut::<BLOCK_SIZE>() {
        store
            .read_block(block, chunk)
            .map_err(|source| DeviceError::Io { block, source })?;
        block = block.next();
        rest = tail;
    }
    Ok(())
}

/// Write consecutive blocks starting at `start` from `src`.
///
/// Every call shares `state`, so the store sees one accumulator across the
/// whole run (and across runs, when the caller keeps it).
///
/// # Errors
///
/// Returns [`DeviceError::Io`] naming the first block that failed. Blocks
/// after it are not written.
pub fn write_blocks<S: BackingStore>(
    store: &mut S,
    start: BlockId,
    src: &[u8],
    quiet: bool,
    state: &mut S::WriteState,
) -> Result<(), DeviceError<S::Error>> {
    debug_assert!(src.len() % BLOCK_SIZE == 0);

    let mut block = start;
    let mut rest = src;
    while let Some((chunk, tail)) = rest.split_first_chunk::<BLOCK_SIZE>() {
        store
            .write_block(block, chunk, quiet, state)
            .map_err(|source| DeviceError::Io { block, source })?;
        block = block.next();
        rest = tail;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt;

    // Records every call in order and fails on a chosen block
    struct TraceStore {
        calls: Vec<(char, u32, u8)>,
        fail_at: Option<u32>,
    }

    #[derive(Debug)]
    struct TraceError;

    impl fmt::Display for TraceError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "trace store failure")
        }
    }

    impl core::error::Error for TraceError {}

    impl BackingStore for TraceStore {
        type Error = TraceError;
        type WriteState = Vec<u32>;
        const BLOCK_COUNT: u32 = 64;

        fn read_block(&mut self, block: BlockId, dest: &mut [u8; BLOCK_SIZE]) -> Result<(), TraceError> {
            if self.fail_at == Some(block.value()) {
                return Err(TraceError);
            }
            dest.fill(block.value() as u8);
            self.calls.push(('r', block.value(), dest[0]));
            Ok(())
        }

        fn write_block(
            &mut self,
            block: BlockId,
            src: &[u8; BLOCK_SIZE],
            _quiet: bool,
            state: &mut Vec<u32>,
        ) -> Result<(), TraceError> {
            if self.fail_at == Some(block.value()) {
                return Err(TraceError);
            }
            state.push(block.value());
            self.calls.push(('w', block.value(), src[0]));
            Ok(())
        }
    }

    fn store(fail_at: Option<u32>) -> TraceStore {
        TraceStore { calls: Vec::new(), fail_at }
    }

    #[test]
    fn test_read_visits_blocks_in_order() {
        let mut store = store(None);
        let mut buf = [0u8; 3 * BLOCK_SIZE];

        read_blocks(&mut store, BlockId::new(10), &mut buf).unwrap();

        assert_eq!(store.calls, vec![('r', 10, 10), ('r', 11, 11), ('r', 12, 12)]);
        assert_eq!(buf[0], 10);
        assert_eq!(buf[BLOCK_SIZE], 11);
        assert_eq!(buf[3 * BLOCK_SIZE - 1], 12);
    }

    #[test]
    fn test_write_uses_each_window_and_shared_state() {
        let mut store = store(None);
        let mut state = Vec::new();
        let mut buf = [0u8; 2 * BLOCK_SIZE];
        buf[..BLOCK_SIZE].fill(0xAA);
        buf[BLOCK_SIZE..].fill(0xBB);

        write_blocks(&mut store, BlockId::new(4), &buf, false, &mut state).unwrap();
        write_blocks(&mut store, BlockId::new(9), &buf[..BLOCK_SIZE], false, &mut state).unwrap();

        assert_eq!(store.calls, vec![('w', 4, 0xAA), ('w', 5, 0xBB), ('w', 9, 0xAA)]);
        assert_eq!(state, vec![4, 5, 9]);
    }

    #[test]
    fn test_failure_aborts_remaining_blocks() {
        let mut store = store(Some(6));
        let mut state = Vec::new();
        let buf = [1u8; 4 * BLOCK_SIZE];

        let err = write_blocks(&mut store, BlockId::new(5), &buf, false, &mut state).unwrap_err();

        match err {
            DeviceError::Io { block, .. } => assert_eq!(block, BlockId::new(6)),
            other => panic!("Expected Io error, got {:?}", other),
        }
        assert_eq!(state, vec![5]);
    }

    #[test]
    fn test_empty_run_makes_no_calls() {
        let mut store = store(None);
        read_blocks(&mut store, BlockId::new(0), &mut []).unwrap();
        assert!(store.calls.is_empty());
    }
}
