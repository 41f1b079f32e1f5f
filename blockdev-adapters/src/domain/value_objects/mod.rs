//! Value objects for the domain layer.
//!
//! Value objects are immutable, validated data types that represent
//! concepts in the domain model. They provide type safety and encapsulate
//! validation logic.

mod block_id;
mod geometry;
mod info_strings;
mod ioctl;

pub use block_id::BlockId;
pub use geometry::{Geometry, BLOCK_SIZE};
pub use info_strings::InfoStrings;
pub use ioctl::Ioctl;
