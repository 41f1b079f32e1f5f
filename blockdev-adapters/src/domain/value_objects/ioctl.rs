//! Control requests understood by block devices.

use super::InfoStrings;

/// An out-of-band control request, carrying its optional output slot.
///
/// `'o` is the lifetime of the caller's output slot; `'d` is the lifetime of
/// the device borrow, which bounds any reference written into a slot.
#[derive(Debug)]
pub enum Ioctl<'o, 'd> {
    /// Ask whether a cache flush is still in progress.
    ///
    /// The slot may be absent when the caller only wants the flush issued.
    CacheFlush(Option<&'o mut bool>),
    /// Fetch the device identification strings. The slot is required.
    InfoStrings(Option<&'o mut Option<&'d InfoStrings>>),
    /// A request kind identified only by its raw code.
    Custom(u32),
}

impl Ioctl<'_, '_> {
    /// Short name of the request kind, for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CacheFlush(_) => "cache-flush",
            Self::InfoStrings(_) => "info-strings",
            Self::Custom(_) => "custom",
        }
    }
}
