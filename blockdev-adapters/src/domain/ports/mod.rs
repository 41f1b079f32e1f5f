//! Ports define the interfaces between the domain and the outside world.
//!
//! In hexagonal architecture, ports are the boundaries of the application:
//! - **Primary (Driving) Ports**: What the domain exposes to the outside world
//!   (`BlockDevice`)
//! - **Secondary (Driven) Ports**: What the domain needs from the outside world
//!   (`BackingStore`, `EventHandler`)

mod backing_store;
mod block_device;
mod event_handler;

pub use backing_store::BackingStore;
pub use block_device::BlockDevice;
pub use event_handler::{EventHandler, NoopHandler};
