//! EventHandler port - receives lifecycle and completion notifications.

use crate::domain::entities::Event;

/// Consumer of device events.
///
/// Handlers run inline, on the caller's thread, before the operation that
/// triggered the event returns. Any `FnMut(&Event<'_, C>)` closure or
/// function pointer is a handler.
///
/// # Examples
///
/// ```
/// use blockdev_adapters::domain::{Event, EventHandler, EventKind};
/// use std::cell::Cell;
///
/// fn count_reads(event: &Event<'_, Cell<u32>>) {
///     if event.kind() == EventKind::ReadDone {
///         event.context().set(event.context().get() + 1);
///     }
/// }
///
/// fn takes_handler<H: EventHandler<Cell<u32>>>(_handler: H) {}
/// takes_handler(count_reads as fn(&Event<'_, Cell<u32>>));
/// ```
pub trait EventHandler<C> {
    /// Handle one event.
    fn on_event(&mut self, event: &Event<'_, C>);
}

impl<C, F> EventHandler<C> for F
where
    F: FnMut(&Event<'_, C>),
{
    fn on_event(&mut self, event: &Event<'_, C>) {
        self(event)
    }
}

/// A handler that ignores every event.
///
/// Useful as the handler type of a device that is always initialized with
/// no handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl<C> EventHandler<C> for NoopHandler {
    fn on_event(&mut self, _event: &Event<'_, C>) {}
}
