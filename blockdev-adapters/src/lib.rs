//! Generic block device adapter with hexagonal architecture.
//!
//! This crate exposes one uniform block device contract (init, uninit, read
//! blocks, write blocks, control requests, geometry) over any backing store
//! that can read and write single 512-byte blocks. Disk and filesystem
//! consumers drive every medium through the same calls and receive the same
//! completion events.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! ## Domain Layer (`domain`)
//! Pure logic with no infrastructure dependencies:
//! - **Entities**: `BlockRequest`, `Event`, `DeviceState`
//! - **Value Objects**: `BlockId`, `Geometry`, `InfoStrings`, `Ioctl`
//! - **Services**: the block request translator
//! - **Ports**: `BlockDevice`, `BackingStore`, `EventHandler`
//!
//! ## Adapter Layer (`adapters`)
//! - **`BlockDeviceAdapter`**: Implements `BlockDevice` over a `BackingStore`
//! - **`RamStore`**: In-memory backing store
//!
//! ## Infrastructure Layer (`infrastructure`)
//! - **`BlockStream`**: byte-level async Read/Write/Seek over any `BlockDevice`
//!
//! # Quick Start
//!
//! ```
//! use blockdev_adapters::{
//!     AdapterConfig, BlockDevice, BlockDeviceAdapter, BlockId, BlockRequest, Event,
//!     EventKind, RamStore,
//! };
//! use std::cell::Cell;
//!
//! fn on_event(event: &Event<'_, Cell<u32>>) {
//!     if event.kind() == EventKind::WriteDone {
//!         event.context().set(event.context().get() + 1);
//!     }
//! }
//!
//! let mut device: BlockDeviceAdapter<RamStore<64>, fn(&Event<'_, Cell<u32>>), Cell<u32>> =
//!     BlockDeviceAdapter::new(RamStore::new(), AdapterConfig::ram_disk());
//! device.init(Some(on_event as fn(&Event<'_, Cell<u32>>)), Cell::new(0)).unwrap();
//!
//! device.write_req(&BlockRequest::new(BlockId::new(0), 2, [0xA5u8; 1024])).unwrap();
//! assert_eq!(device.context().map(Cell::get), Some(1));
//! ```
//!
//! # Features
//!
//! - `log`: Enable logging through the `log` crate
//! - `defmt`: Enable defmt logging for embedded (not together with `log`)
//! - `std`: Enable standard library features of `embedded-io-async`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)]

#[macro_use]
mod fmt;

// Core layers
pub mod domain;
pub mod adapters;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    BackingStore, BlockDevice, BlockId, BlockRequest, DeviceError, DeviceState, Event,
    EventHandler, EventKind, Geometry, InfoStrings, Ioctl, NoopHandler, ResultCode, BLOCK_SIZE,
};

pub use adapters::{AdapterConfig, BlockDeviceAdapter, RamStore, RamStoreError, WriteTally};

// Infrastructure layer exports
pub use infrastructure::streaming::{BlockStream, StreamError};

// Re-export embedded_io_async for convenience
pub use embedded_io_async;
