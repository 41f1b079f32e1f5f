//! Lifecycle and completion events delivered to event handlers.

use super::BlockRequest;
use crate::domain::error::ResultCode;

/// What an [`Event`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// `init` finished.
    InitDone,
    /// `uninit` finished; the working state is about to be cleared.
    UninitDone,
    /// A read request finished.
    ReadDone,
    /// A write request finished.
    WriteDone,
}

impl EventKind {
    /// Short name, for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InitDone => "init-done",
            Self::UninitDone => "uninit-done",
            Self::ReadDone => "read-done",
            Self::WriteDone => "write-done",
        }
    }
}

/// A notification handed to the event handler, then discarded.
///
/// `request` is present for `ReadDone`/`WriteDone` and borrows the caller's
/// request; `context` is the value passed to `init`.
#[derive(Debug)]
pub struct Event<'a, C> {
    kind: EventKind,
    result: ResultCode,
    request: Option<BlockRequest<&'a [u8]>>,
    context: &'a C,
}

impl<'a, C> Event<'a, C> {
    /// Event for a lifecycle transition (no request attached).
    pub(crate) const fn lifecycle(kind: EventKind, context: &'a C) -> Self {
        Self {
            kind,
            result: ResultCode::Success,
            request: None,
            context,
        }
    }

    /// Event reporting completion of `request` with `result`.
    pub(crate) const fn completion(
        kind: EventKind,
        result: ResultCode,
        request: BlockRequest<&'a [u8]>,
        context: &'a C,
    ) -> Self {
        Self {
            kind,
            result,
            request: Some(request),
            context,
        }
    }

    /// Kind of event.
    #[inline]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Outcome of the operation that triggered the event.
    #[inline]
    pub const fn result(&self) -> ResultCode {
        self.result
    }

    /// The request that triggered the event, for completion events.
    #[inline]
    pub const fn request(&self) -> Option<&BlockRequest<&'a [u8]>> {
        self.request.as_ref()
    }

    /// Context registered at `init`.
    #[inline]
    pub const fn context(&self) -> &'a C {
        self.context
    }
}
