//! Static adapter configuration.

use crate::domain::InfoStrings;

/// Configuration fixed when an adapter is constructed.
///
/// Holds the identification strings returned by the info-strings control
/// request and the `quiet` flag passed to every backing store write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    info: InfoStrings,
    quiet_writes: bool,
}

impl AdapterConfig {
    /// Create a configuration with the given identification strings and
    /// non-quiet writes.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdev_adapters::{AdapterConfig, InfoStrings};
    ///
    /// let config = AdapterConfig::new(InfoStrings::new("Acme", "Flash Disk", "1.2"))
    ///     .with_quiet_writes(true);
    /// assert!(config.quiet_writes());
    /// ```
    pub const fn new(info: InfoStrings) -> Self {
        Self {
            info,
            quiet_writes: false,
        }
    }

    /// Preset for a plain RAM disk.
    pub const fn ram_disk() -> Self {
        Self::new(InfoStrings::new("Generic", "RAM Disk", "1.0"))
    }

    /// Set whether writes ask the backing store to stay quiet.
    pub const fn with_quiet_writes(self, quiet_writes: bool) -> Self {
        Self {
            info: self.info,
            quiet_writes,
        }
    }

    /// Identification strings.
    #[inline]
    pub const fn info(&self) -> &InfoStrings {
        &self.info
    }

    /// Whether writes are issued with the `quiet` flag.
    #[inline]
    pub const fn quiet_writes(&self) -> bool {
        self.quiet_writes
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::new(InfoStrings::default())
    }
}
