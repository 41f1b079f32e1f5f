//! Domain entities for the block device adapter.
//!
//! Entities carry identity or a lifecycle: the device's lifecycle state,
//! the block requests it serves, and the events it emits.

mod block_request;
mod device_state;
mod event;

pub use block_request::BlockRequest;
pub use device_state::DeviceState;
pub use event::{Event, EventKind};
