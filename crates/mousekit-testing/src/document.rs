use mousekit_core::{
    HandlerId, InputSource, ListenerRegistry, MouseEventHandler, MouseEventKind, RawMouseEvent,
    SourceError,
};
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::rc::Rc;

/// One change to the document's listener table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationChange {
    Added(MouseEventKind, HandlerId),
    Removed(MouseEventKind, HandlerId),
}

impl RegistrationChange {
    pub fn kind(&self) -> MouseEventKind {
        match self {
            RegistrationChange::Added(kind, _) | RegistrationChange::Removed(kind, _) => *kind,
        }
    }
}

#[derive(Default)]
struct DocumentInner {
    listeners: ListenerRegistry,
    log: RefCell<Vec<RegistrationChange>>,
    unsupported: RefCell<FxHashSet<MouseEventKind>>,
    rejected: RefCell<FxHashSet<MouseEventKind>>,
    stuck: RefCell<FxHashSet<MouseEventKind>>,
}

/// In-memory input source shared by every clone.
#[derive(Clone, Default)]
pub struct FakeDocument {
    inner: Rc<DocumentInner>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose environment never delivers wheel events.
    pub fn without_wheel() -> Self {
        let document = Self::new();
        document
            .inner
            .unsupported
            .borrow_mut()
            .insert(MouseEventKind::Wheel);
        document
    }

    /// Makes every later registration for `kind` fail.
    pub fn reject(&self, kind: MouseEventKind) {
        self.inner.rejected.borrow_mut().insert(kind);
    }

    /// Makes every later removal for `kind` fail, leaving the listener in place.
    pub fn fail_removal(&self, kind: MouseEventKind) {
        self.inner.stuck.borrow_mut().insert(kind);
    }

    /// Undoes [`fail_removal`](Self::fail_removal).
    pub fn allow_removal(&self, kind: MouseEventKind) {
        self.inner.stuck.borrow_mut().remove(&kind);
    }

    /// Delivers `event` synchronously; returns how many listeners ran.
    pub fn dispatch(&self, event: &RawMouseEvent) -> usize {
        self.inner.listeners.dispatch(event)
    }

    pub fn listener_count(&self, kind: MouseEventKind) -> usize {
        self.inner.listeners.len(kind)
    }

    pub fn total_listeners(&self) -> usize {
        self.inner.listeners.total()
    }

    pub fn has_listener(&self, kind: MouseEventKind, handler: &MouseEventHandler) -> bool {
        self.inner.listeners.contains(kind, handler)
    }

    pub fn registration_log(&self) -> Vec<RegistrationChange> {
        self.inner.log.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.inner.log.borrow_mut().clear();
    }
}

impl InputSource for FakeDocument {
    fn supports(&self, kind: MouseEventKind) -> bool {
        !self.inner.unsupported.borrow().contains(&kind)
    }

    fn register(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        if !self.supports(kind) {
            return Err(SourceError::Unsupported { kind });
        }
        if self.inner.rejected.borrow().contains(&kind) {
            return Err(SourceError::rejected(kind, "registration blocked by test"));
        }
        if self.inner.listeners.add(kind, handler) {
            log::trace!("fake document: added {kind} listener {}", handler.id());
            self.inner
                .log
                .borrow_mut()
                .push(RegistrationChange::Added(kind, handler.id()));
        }
        Ok(())
    }

    fn deregister(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        if self.inner.stuck.borrow().contains(&kind) {
            return Err(SourceError::rejected(kind, "removal blocked by test"));
        }
        if self.inner.listeners.remove(kind, handler) {
            log::trace!("fake document: removed {kind} listener {}", handler.id());
            self.inner
                .log
                .borrow_mut()
                .push(RegistrationChange::Removed(kind, handler.id()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
