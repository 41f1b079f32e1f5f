//! Adapter layer - Concrete implementations connecting domain to infrastructure.
//!
//! This layer contains the adapter implementing the domain's `BlockDevice`
//! port on top of any `BackingStore`, plus the stores shipped with the
//! crate.
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Disk / filesystem consumer  │
//!     └────────────┬─────────────────────┘
//!                  │ BlockDevice port
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │  ◄── This module
//!     │  - BlockDeviceAdapter            │
//!     │  - AdapterConfig                 │
//!     └────────────┬─────────────────────┘
//!                  │ BackingStore port
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │  RamStore, flash, virtual disks  │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Available Adapters
//!
//! - **`BlockDeviceAdapter`**: Implements `BlockDevice` over a `BackingStore`
//! - **`RamStore`**: In-memory `BackingStore` with compile-time sizing

mod block_device_adapter;
mod config;
mod ram_store;

pub use block_device_adapter::BlockDeviceAdapter;
pub use config::AdapterConfig;
pub use ram_store::{RamStore, RamStoreError, WriteTally};
