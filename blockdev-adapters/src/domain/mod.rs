//! Domain layer - Pure business logic with zero infrastructure dependencies.
//!
//! This is the core of the hexagonal architecture. The domain layer contains:
//! - **Entities**: `BlockRequest`, `Event`, `DeviceState`
//! - **Value Objects**: `BlockId`, `Geometry`, `InfoStrings`, `Ioctl`
//! - **Domain Services**: the block request translator
//! - **Ports**: `BlockDevice` (driving), `BackingStore` and `EventHandler`
//!   (driven)
//! - **Domain Errors**: `DeviceError` and its event-side `ResultCode`
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer (Core)         │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │  Entities & Value Objects  │  │
//!     │  │  - BlockRequest, Event     │  │
//!     │  │  - BlockId, Geometry       │  │
//!     │  └────────────────────────────┘  │
//!     │              ▲                   │
//!     │              │                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Domain Services         │  │
//!     │  │    - translator            │  │
//!     │  └────────────────────────────┘  │
//!     │              │                   │
//!     │              ▼                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Ports (Interfaces)      │  │
//!     │  │    - BackingStore          │  │
//!     │  │    - EventHandler          │  │
//!     │  └────────────────────────────┘  │
//!     └──────────────────────────────────┘
//!                    ▲
//!                    │ implemented by
//!                    │
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - BlockDeviceAdapter            │
//!     │  - RamStore                      │
//!     └──────────────────────────────────┘
//! ```

pub mod entities;
pub mod value_objects;
pub mod ports;
pub mod error;
pub mod translator;

// Re-export commonly used types
pub use entities::{BlockRequest, DeviceState, Event, EventKind};
pub use value_objects::{BlockId, Geometry, InfoStrings, Ioctl, BLOCK_SIZE};
pub use ports::{BackingStore, BlockDevice, EventHandler, NoopHandler};
pub use error::{DeviceError, ResultCode};
