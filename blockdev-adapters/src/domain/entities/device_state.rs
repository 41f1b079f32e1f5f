//! Lifecycle state of a block device.

/// The lifecycle state of a device handle.
///
/// Devices move between these states only through `init` and `uninit`:
/// - Uninitialized: no working state, requests are rejected
/// - Initialized: geometry, handler and context are populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceState {
    /// No working state; `init` has not been called or `uninit` has run.
    #[default]
    Uninitialized,
    /// Working state is fully populated.
    Initialized,
}

impl DeviceState {
    /// Check if the device is initialized.
    #[inline]
    pub const fn is_initialized(&self) -> bool {
        matches!(self, DeviceState::Initialized)
    }
}
