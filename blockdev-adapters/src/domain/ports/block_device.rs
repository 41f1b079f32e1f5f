//! BlockDevice port - Primary (driving) port exposed to disk consumers.
//!
//! Every adapter presents this same operation table, so a consumer can drive
//! any backing medium through identical calls.

use crate::domain::{
    entities::{BlockRequest, DeviceState},
    error::DeviceError,
    value_objects::{Geometry, Ioctl},
};
use core::error::Error;

/// Uniform block device contract: lifecycle, block requests, control
/// requests and geometry.
///
/// All operations are synchronous. When an event handler is registered,
/// `init`, `uninit`, `read_req` and `write_req` each deliver exactly one
/// event to it before returning.
///
/// Requests rejected before reaching the medium (`NotInitialized`,
/// `OutOfRange`, `InvalidArgument`) produce no event; only the returned
/// error reports them. Runs that fail inside the medium still deliver their
/// completion event, carrying `ResultCode::Io`.
pub trait BlockDevice {
    /// Error type of the backing medium.
    type Error: Error + Send + Sync + 'static;
    /// Event handler type accepted by `init`.
    type Handler;
    /// Context value handed back on every event.
    type Context;

    /// Bring the device up, registering an optional event handler and the
    /// context passed back on events.
    fn init(
        &mut self,
        handler: Option<Self::Handler>,
        context: Self::Context,
    ) -> Result<(), DeviceError<Self::Error>>;

    /// Tear the device down and clear its working state.
    ///
    /// Calling this on a device that is not initialized does nothing.
    fn uninit(&mut self) -> Result<(), DeviceError<Self::Error>>;

    /// Read `request.block_count()` blocks into the request buffer.
    fn read_req<B>(&mut self, request: &mut BlockRequest<B>) -> Result<(), DeviceError<Self::Error>>
    where
        B: AsRef<[u8]> + AsMut<[u8]>;

    /// Write `request.block_count()` blocks from the request buffer.
    fn write_req<B>(&mut self, request: &BlockRequest<B>) -> Result<(), DeviceError<Self::Error>>
    where
        B: AsRef<[u8]>;

    /// Issue a control request.
    fn ioctl<'d>(&'d self, request: Ioctl<'_, 'd>) -> Result<(), DeviceError<Self::Error>>;

    /// Geometry of the initialized device.
    fn geometry(&self) -> Result<&Geometry, DeviceError<Self::Error>>;

    /// Current lifecycle state.
    fn state(&self) -> DeviceState;
}
