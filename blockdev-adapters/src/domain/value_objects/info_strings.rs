//! Device identification strings.

use core::fmt;

/// Human-readable identification of a block device.
///
/// Lives in the static adapter configuration, so a reference handed out by
/// the info-strings control request stays valid for as long as the device
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoStrings {
    vendor: &'static str,
    product: &'static str,
    revision: &'static str,
}

impl InfoStrings {
    /// Create identification strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockdev_adapters::domain::InfoStrings;
    ///
    /// let info = InfoStrings::new("Acme", "RAM Disk", "2.1");
    /// assert_eq!(info.product(), "RAM Disk");
    /// ```
    pub const fn new(vendor: &'static str, product: &'static str, revision: &'static str) -> Self {
        Self {
            vendor,
            product,
            revision,
        }
    }

    /// Vendor label.
    #[inline]
    pub const fn vendor(&self) -> &'static str {
        self.vendor
    }

    /// Product label.
    #[inline]
    pub const fn product(&self) -> &'static str {
        self.product
    }

    /// Revision label.
    #[inline]
    pub const fn revision(&self) -> &'static str {
        self.revision
    }
}

impl Default for InfoStrings {
    fn default() -> Self {
        Self::new("Generic", "Block Device", "1.0")
    }
}

impl fmt::Display for InfoStrings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (rev {})", self.vendor, self.product, self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_strings_accessors() {
        let info = InfoStrings::new("Acme", "Disk", "0.3");
        assert_eq!(info.vendor(), "Acme");
        assert_eq!(info.product(), "Disk");
        assert_eq!(info.revision(), "0.3");
    }

    #[test]
    fn test_info_strings_display() {
        let info = InfoStrings::default();
        assert_eq!(format!("{}", info), "Generic Block Device (rev 1.0)");
    }
}
