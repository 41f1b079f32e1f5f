//! Block device adapter - the generic `BlockDevice` implementation over any
//! `BackingStore`.
//!
//! The adapter owns the device's working state and turns each block request
//! into single-block store calls through the translator, then reports the
//! outcome to the registered event handler. Everything runs on the caller's
//! thread; the completion event is delivered before the request returns.

use crate::{
    adapters::AdapterConfig,
    domain::{
        translator, BackingStore, BlockDevice, BlockId, BlockRequest, DeviceError, DeviceState,
        Event, EventHandler, EventKind, Geometry, Ioctl, NoopHandler, ResultCode,
    },
};

/// Per-device state that exists only between `init` and `uninit`.
struct WorkingState<W, H, C> {
    geometry: Geometry,
    handler: Option<H>,
    context: C,
    write_state: W,
}

impl<W, H, C> WorkingState<W, H, C> {
    /// Deliver one event to the handler, if any.
    fn emit(&mut self, kind: EventKind, result: ResultCode, request: Option<BlockRequest<&[u8]>>)
    where
        H: EventHandler<C>,
    {
        let Self {
            handler, context, ..
        } = self;

        if let Some(handler) = handler {
            let event = match request {
                Some(request) => Event::completion(kind, result, request, context),
                None => Event::lifecycle(kind, context),
            };
            trace!("delivering {} event", kind.name());
            handler.on_event(&event);
        }
    }
}

/// Adapter exposing a [`BackingStore`] through the [`BlockDevice`] contract.
///
/// The handle is created once with its store and configuration, then moves
/// between the uninitialized and initialized states through
/// [`init`](BlockDevice::init) and [`uninit`](BlockDevice::uninit). Working
/// state (geometry, handler, context and the store's write accumulator) is
/// either entirely present or entirely absent.
///
/// # Type Parameters
///
/// - `S`: the backing store
/// - `H`: the event handler type (any `FnMut(&Event<'_, C>)` works)
/// - `C`: the context handed back on every event
///
/// # Examples
///
/// ```
/// use blockdev_adapters::{
///     AdapterConfig, BlockDevice, BlockDeviceAdapter, BlockId, BlockRequest, RamStore,
/// };
///
/// let mut device: BlockDeviceAdapter<RamStore<32>> =
///     BlockDeviceAdapter::new(RamStore::new(), AdapterConfig::ram_disk());
/// device.init(None, ()).unwrap();
///
/// let write = BlockRequest::new(BlockId::new(3), 1, [0x5Au8; 512]);
/// device.write_req(&write).unwrap();
///
/// let mut read = BlockRequest::new(BlockId::new(3), 1, [0u8; 512]);
/// device.read_req(&mut read).unwrap();
/// assert_eq!(read.buffer(), write.buffer());
/// ```
pub struct BlockDeviceAdapter<S: BackingStore, H = NoopHandler, C = ()> {
    store: S,
    config: AdapterConfig,
    work: Option<WorkingState<S::WriteState, H, C>>,
}

impl<S: BackingStore, H, C> BlockDeviceAdapter<S, H, C> {
    /// Create an uninitialized adapter bound to `store`.
    pub fn new(store: S, config: AdapterConfig) -> Self {
        Self {
            store,
            config,
            work: None,
        }
    }

    /// Get the static configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Get a reference to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a mutable reference to the backing store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the adapter and return the backing store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Context registered at `init`, while initialized.
    pub fn context(&self) -> Option<&C> {
        self.work.as_ref().map(|work| &work.context)
    }

    /// The store's write accumulator, while initialized.
    pub fn write_state(&self) -> Option<&S::WriteState> {
        self.work.as_ref().map(|work| &work.write_state)
    }

    /// Check a request against the geometry and buffer, returning the number
    /// of buffer bytes the run covers.
    fn validate(
        geometry: &Geometry,
        start: BlockId,
        count: u32,
        buffer_len: usize,
    ) -> Result<usize, DeviceError<S::Error>> {
        if !geometry.contains(start, count) {
            warn!(
                "rejecting {} blocks at block {}: device has {} blocks",
                count,
                start.value(),
                geometry.block_count()
            );
            return Err(DeviceError::OutOfRange {
                start,
                count,
                block_count: geometry.block_count(),
            });
        }

        let Some(len) = geometry.byte_len(count) else {
            warn!("rejecting {} blocks: run does not fit in memory", count);
            return Err(DeviceError::InvalidArgument);
        };
        if buffer_len < len {
            warn!("rejecting request: buffer holds {} bytes, run needs {}", buffer_len, len);
            return Err(DeviceError::InvalidArgument);
        }
        Ok(len)
    }
}

/// Result code reported on the completion event for `outcome`.
fn completion_code<E>(outcome: &Result<(), DeviceError<E>>) -> ResultCode {
    match outcome {
        Ok(()) => ResultCode::Success,
        Err(e) => e.code(),
    }
}

impl<S, H, C> BlockDevice for BlockDeviceAdapter<S, H, C>
where
    S: BackingStore,
    H: EventHandler<C>,
{
    type Error = S::Error;
    type Handler = H;
    type Context = C;

    fn init(&mut self, handler: Option<H>, context: C) -> Result<(), DeviceError<S::Error>> {
        if self.work.is_some() {
            warn!("re-initializing a block device that is already initialized");
        }

        let work = self.work.insert(WorkingState {
            geometry: Geometry::new(S::BLOCK_COUNT),
            handler,
            context,
            write_state: S::WriteState::default(),
        });
        debug!(
            "block device initialized: {} blocks of {} bytes",
            work.geometry.block_count(),
            work.geometry.block_size()
        );

        work.emit(EventKind::InitDone, ResultCode::Success, None);
        Ok(())
    }

    fn uninit(&mut self) -> Result<(), DeviceError<S::Error>> {
        if let Some(mut work) = self.work.take() {
            work.emit(EventKind::UninitDone, ResultCode::Success, None);
            debug!("block device uninitialized");
        }
        Ok(())
    }

    fn read_req<B>(&mut self, request: &mut BlockRequest<B>) -> Result<(), DeviceError<S::Error>>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        let work = self.work.as_mut().ok_or(DeviceError::NotInitialized)?;
        let (start, count) = (request.block_id(), request.block_count());
        let len = Self::validate(&work.geometry, start, count, request.buffer().len())?;

        trace!("read {} blocks at block {}", count, start.value());
        let outcome = translator::read_blocks(&mut self.store, start, &mut request.buffer_mut()[..len]);
        if let Err(DeviceError::Io { block, .. }) = &outcome {
            warn!("read failed at block {}", block.value());
        }

        work.emit(EventKind::ReadDone, completion_code(&outcome), Some(request.as_view()));
        outcome
    }

    fn write_req<B>(&mut self, request: &BlockRequest<B>) -> Result<(), DeviceError<S::Error>>
    where
        B: AsRef<[u8]>,
    {
        let quiet = self.config.quiet_writes();
        let work = self.work.as_mut().ok_or(DeviceError::NotInitialized)?;
        let (start, count) = (request.block_id(), request.block_count());
        let len = Self::validate(&work.geometry, start, count, request.buffer().len())?;

        trace!("write {} blocks at block {}", count, start.value());
        let outcome = translator::write_blocks(
            &mut self.store,
            start,
            &request.buffer()[..len],
            quiet,
            &mut work.write_state,
        );
        if let Err(DeviceError::Io { block, .. }) = &outcome {
            warn!("write failed at block {}", block.value());
        }

        work.emit(EventKind::WriteDone, completion_code(&outcome), Some(request.as_view()));
        outcome
    }

    fn ioctl<'d>(&'d self, request: Ioctl<'_, 'd>) -> Result<(), DeviceError<S::Error>> {
        trace!("ioctl {}", request.name());
        match request {
            // No write-back cache: a flush is always already complete
            Ioctl::CacheFlush(flushing) => {
                if let Some(flushing) = flushing {
                    *flushing = false;
                }
                Ok(())
            }
            Ioctl::InfoStrings(Some(slot)) => {
                *slot = Some(self.config.info());
                Ok(())
            }
            Ioctl::InfoStrings(None) => Err(DeviceError::InvalidArgument),
            Ioctl::Custom(code) => {
                debug!("unsupported control request {}", code);
                Err(DeviceError::NotSupported)
            }
        }
    }

    fn geometry(&self) -> Result<&Geometry, DeviceError<S::Error>> {
        self.work
            .as_ref()
            .map(|work| &work.geometry)
            .ok_or(DeviceError::NotInitialized)
    }

    fn state(&self) -> DeviceState {
        match self.work {
            Some(_) => DeviceState::Initialized,
            None => DeviceState::Uninitialized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{RamStore, RamStoreError};
    use crate::domain::BLOCK_SIZE;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = RefCell<Vec<(EventKind, ResultCode, Option<(u32, u32)>)>>;
    type Recorder = fn(&Event<'_, Log>);
    type Device = BlockDeviceAdapter<RamStore<16>, Recorder, Log>;

    fn record(event: &Event<'_, Log>) {
        let request = event
            .request()
            .map(|r| (r.block_id().value(), r.block_count()));
        event
            .context()
            .borrow_mut()
            .push((event.kind(), event.result(), request));
    }

    fn device() -> Device {
        BlockDeviceAdapter::new(RamStore::new(), AdapterConfig::default())
    }

    fn events(device: &Device) -> Vec<(EventKind, ResultCode, Option<(u32, u32)>)> {
        device.context().map(|log| log.borrow().clone()).unwrap_or_default()
    }

    #[test]
    fn test_init_populates_state_and_notifies() {
        let mut device = device();
        assert_eq!(device.state(), DeviceState::Uninitialized);

        device.init(Some(record as Recorder), RefCell::new(Vec::new())).unwrap();

        assert_eq!(device.state(), DeviceState::Initialized);
        assert_eq!(device.geometry().unwrap(), &Geometry::new(16));
        assert_eq!(events(&device), vec![(EventKind::InitDone, ResultCode::Success, None)]);
    }

    #[test]
    fn test_uninit_notifies_then_clears() {
        type Shared = Rc<RefCell<Vec<EventKind>>>;

        fn kinds(event: &Event<'_, Shared>) {
            event.context().borrow_mut().push(event.kind());
        }

        let seen: Shared = Rc::new(RefCell::new(Vec::new()));
        let mut device: BlockDeviceAdapter<RamStore<4>, fn(&Event<'_, Shared>), Shared> =
            BlockDeviceAdapter::new(RamStore::new(), AdapterConfig::default());

        device.init(Some(kinds as fn(&Event<'_, Shared>)), seen.clone()).unwrap();
        device.uninit().unwrap();

        assert_eq!(device.state(), DeviceState::Uninitialized);
        assert!(device.context().is_none());
        assert!(device.write_state().is_none());
        assert!(matches!(device.geometry(), Err(DeviceError::NotInitialized)));
        assert_eq!(*seen.borrow(), vec![EventKind::InitDone, EventKind::UninitDone]);
        // The adapter dropped its clone of the context
        assert_eq!(Rc::strong_count(&seen), 1);
    }

    #[test]
    fn test_uninit_when_uninitialized_is_noop() {
        let mut device = device();
        device.uninit().unwrap();
        device.uninit().unwrap();
        assert_eq!(device.state(), DeviceState::Uninitialized);
    }

    #[test]
    fn test_requests_rejected_when_uninitialized() {
        let mut device = device();
        let mut read = BlockRequest::new(BlockId::new(0), 1, [0u8; BLOCK_SIZE]);

        assert!(matches!(device.read_req(&mut read), Err(DeviceError::NotInitialized)));
        assert!(matches!(
            device.write_req(&BlockRequest::new(BlockId::new(0), 1, [0u8; BLOCK_SIZE])),
            Err(DeviceError::NotInitialized)
        ));
    }

    #[test]
    fn test_request_events_carry_request() {
        let mut device = device();
        device.init(Some(record as Recorder), RefCell::new(Vec::new())).unwrap();

        let write = BlockRequest::new(BlockId::new(2), 2, [9u8; 2 * BLOCK_SIZE]);
        device.write_req(&write).unwrap();
        let mut read = BlockRequest::new(BlockId::new(2), 2, [0u8; 2 * BLOCK_SIZE]);
        device.read_req(&mut read).unwrap();

        assert_eq!(read.buffer(), write.buffer());
        assert_eq!(
            events(&device)[1..],
            [
                (EventKind::WriteDone, ResultCode::Success, Some((2, 2))),
                (EventKind::ReadDone, ResultCode::Success, Some((2, 2))),
            ]
        );
    }

    #[test]
    fn test_out_of_range_rejected_without_event() {
        let mut device = device();
        device.init(Some(record as Recorder), RefCell::new(Vec::new())).unwrap();

        let write = BlockRequest::new(BlockId::new(15), 2, [1u8; 2 * BLOCK_SIZE]);
        let err = device.write_req(&write).unwrap_err();

        assert!(matches!(
            err,
            DeviceError::OutOfRange { count: 2, block_count: 16, .. }
        ));
        assert_eq!(device.write_state().map(|t| t.blocks_written()), Some(0));
        assert_eq!(events(&device).len(), 1);
    }

    #[test]
    fn test_short_buffer_is_invalid_argument() {
        let mut device = device();
        device.init(None, RefCell::new(Vec::new())).unwrap();

        let mut read = BlockRequest::new(BlockId::new(0), 2, [0u8; BLOCK_SIZE]);
        assert!(matches!(device.read_req(&mut read), Err(DeviceError::InvalidArgument)));
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn test_run_too_large_for_memory_is_invalid_argument() {
        // Large enough that a run of 2^23 + 1 blocks is in range
        struct HugeStore;

        impl BackingStore for HugeStore {
            type Error = RamStoreError;
            type WriteState = ();
            const BLOCK_COUNT: u32 = u32::MAX;

            fn read_block(&mut self, _: BlockId, _: &mut [u8; BLOCK_SIZE]) -> Result<(), RamStoreError> {
                panic!("store must not be reached");
            }

            fn write_block(
                &mut self,
                _: BlockId,
                _: &[u8; BLOCK_SIZE],
                _: bool,
                _: &mut (),
            ) -> Result<(), RamStoreError> {
                panic!("store must not be reached");
            }
        }

        let mut device: BlockDeviceAdapter<HugeStore, Recorder, Log> =
            BlockDeviceAdapter::new(HugeStore, AdapterConfig::default());
        device.init(Some(record as Recorder), RefCell::new(Vec::new())).unwrap();

        let count = (1 << 23) + 1;
        let write = BlockRequest::new(BlockId::new(0), count, [0u8; BLOCK_SIZE]);
        assert!(matches!(device.write_req(&write), Err(DeviceError::InvalidArgument)));

        let mut read = BlockRequest::new(BlockId::new(0), count, [0u8; BLOCK_SIZE]);
        assert!(matches!(device.read_req(&mut read), Err(DeviceError::InvalidArgument)));

        let log = device.context().map(|log| log.borrow().len());
        assert_eq!(log, Some(1));
    }

    #[test]
    fn test_zero_count_request_notifies() {
        let mut device = device();
        device.init(Some(record as Recorder), RefCell::new(Vec::new())).unwrap();

        let mut read = BlockRequest::new(BlockId::new(16), 0, [0u8; 0]);
        device.read_req(&mut read).unwrap();

        assert_eq!(
            events(&device).last(),
            Some(&(EventKind::ReadDone, ResultCode::Success, Some((16, 0))))
        );
    }

    #[test]
    fn test_write_state_reset_by_reinit() {
        let mut device = device();
        device.init(None, RefCell::new(Vec::new())).unwrap();

        device
            .write_req(&BlockRequest::new(BlockId::new(0), 3, [0u8; 3 * BLOCK_SIZE]))
            .unwrap();
        assert_eq!(device.write_state().map(|t| t.blocks_written()), Some(3));

        device.uninit().unwrap();
        device.init(None, RefCell::new(Vec::new())).unwrap();
        assert_eq!(device.write_state().map(|t| t.blocks_written()), Some(0));
    }

    #[test]
    fn test_quiet_writes_reach_store() {
        let mut device: BlockDeviceAdapter<RamStore<4>> = BlockDeviceAdapter::new(
            RamStore::new(),
            AdapterConfig::default().with_quiet_writes(true),
        );
        device.init(None, ()).unwrap();

        device
            .write_req(&BlockRequest::new(BlockId::new(1), 2, [0u8; 2 * BLOCK_SIZE]))
            .unwrap();

        assert_eq!(device.write_state().map(|t| t.quiet_writes()), Some(2));
    }

    #[test]
    fn test_ioctl_cache_flush() {
        let device = device();
        let mut flushing = true;

        device.ioctl(Ioctl::CacheFlush(Some(&mut flushing))).unwrap();
        assert!(!flushing);
        device.ioctl(Ioctl::CacheFlush(None)).unwrap();
    }

    #[test]
    fn test_ioctl_info_strings() {
        let device = device();
        let mut first = None;
        let mut second = None;

        device.ioctl(Ioctl::InfoStrings(Some(&mut first))).unwrap();
        device.ioctl(Ioctl::InfoStrings(Some(&mut second))).unwrap();

        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(core::ptr::eq(first, second));
        assert_eq!(first, device.config().info());
        assert!(matches!(
            device.ioctl(Ioctl::InfoStrings(None)),
            Err(DeviceError::InvalidArgument)
        ));
    }

    #[test]
    fn test_ioctl_custom_not_supported() {
        let device = device();
        let err: DeviceError<RamStoreError> = device.ioctl(Ioctl::Custom(0x42)).unwrap_err();
        assert_eq!(err.code(), ResultCode::NotSupported);
    }
}
