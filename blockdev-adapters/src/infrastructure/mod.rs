//! Infrastructure layer - high-level I/O utilities built on the domain.
//!
//! This module provides a streaming wrapper around block devices, adding
//! async Read/Write/Seek capabilities for integration with filesystems and
//! other byte-oriented consumers.

pub mod streaming;
