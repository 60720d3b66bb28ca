//! Boundary with the host's input source.
//!
//! An [`InputSource`] owns a registration table keyed by event kind. The
//! subscription layer only ever adds and removes the handler it created, so
//! sources must match deregistrations against handler identity
//! ([`MouseEventHandler::id`]).

use crate::event::{MouseEventKind, RawMouseEvent};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub type HandlerId = u64;

thread_local! {
    static NEXT_HANDLER_ID: Cell<HandlerId> = const { Cell::new(1) };
}

/// A cloneable listener; clones share the same identity.
#[derive(Clone)]
pub struct MouseEventHandler {
    id: HandlerId,
    callback: Rc<dyn Fn(&RawMouseEvent)>,
}

impl MouseEventHandler {
    pub fn new(callback: impl Fn(&RawMouseEvent) + 'static) -> Self {
        Self {
            id: NEXT_HANDLER_ID.with(|next| next.replace(next.get() + 1)),
            callback: Rc::new(callback),
        }
    }

    pub fn id(&self) -> HandlerId {
        self.id
    }

    pub fn handle(&self, event: &RawMouseEvent) {
        (self.callback)(event);
    }
}

impl PartialEq for MouseEventHandler {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MouseEventHandler {}

impl fmt::Debug for MouseEventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MouseEventHandler")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Unsupported { kind: MouseEventKind },
    Rejected { kind: MouseEventKind, reason: String },
}

impl SourceError {
    pub fn rejected(kind: MouseEventKind, reason: impl Into<String>) -> Self {
        SourceError::Rejected {
            kind,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> MouseEventKind {
        match self {
            SourceError::Unsupported { kind } | SourceError::Rejected { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unsupported { kind } => {
                write!(f, "input source does not deliver {kind} events")
            }
            SourceError::Rejected { kind, reason } => {
                write!(f, "input source rejected {kind} listener: {reason}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// A host-owned table of event listeners.
pub trait InputSource {
    /// Whether this environment ever delivers events of `kind`.
    fn supports(&self, _kind: MouseEventKind) -> bool {
        true
    }

    fn register(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError>;

    fn deregister(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError>;
}

impl<T: InputSource + ?Sized> InputSource for Rc<T> {
    fn supports(&self, kind: MouseEventKind) -> bool {
        (**self).supports(kind)
    }

    fn register(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        (**self).register(kind, handler)
    }

    fn deregister(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        (**self).deregister(kind, handler)
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn supports(&self, kind: MouseEventKind) -> bool {
        (**self).supports(kind)
    }

    fn register(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        (**self).register(kind, handler)
    }

    fn deregister(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        (**self).deregister(kind, handler)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
