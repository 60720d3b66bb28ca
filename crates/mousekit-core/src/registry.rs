//! Per-kind listener table for in-process input sources.
//!
//! Sources that deliver events themselves (desktop windows, test documents)
//! keep their listeners here. Registration follows DOM listener semantics:
//! adding a handler that is already registered for a kind does nothing, and
//! removal matches by handler identity.

use crate::collections::map::HashMap;
use crate::event::{MouseEventKind, RawMouseEvent};
use crate::source::MouseEventHandler;
use smallvec::SmallVec;
use std::cell::RefCell;

type Bucket = SmallVec<[MouseEventHandler; 2]>;

#[derive(Default)]
pub struct ListenerRegistry {
    entries: RefCell<HashMap<MouseEventKind, Bucket>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if `handler` was already registered for `kind`.
    pub fn add(&self, kind: MouseEventKind, handler: &MouseEventHandler) -> bool {
        let mut entries = self.entries.borrow_mut();
        let bucket = entries.entry(kind).or_default();
        if bucket.contains(handler) {
            return false;
        }
        bucket.push(handler.clone());
        true
    }

    /// Returns `false` if `handler` was not registered for `kind`.
    pub fn remove(&self, kind: MouseEventKind, handler: &MouseEventHandler) -> bool {
        let mut entries = self.entries.borrow_mut();
        let Some(bucket) = entries.get_mut(&kind) else {
            return false;
        };
        let Some(index) = bucket.iter().position(|entry| entry == handler) else {
            return false;
        };
        bucket.remove(index);
        if bucket.is_empty() {
            entries.remove(&kind);
        }
        true
    }

    pub fn contains(&self, kind: MouseEventKind, handler: &MouseEventHandler) -> bool {
        self.entries
            .borrow()
            .get(&kind)
            .is_some_and(|bucket| bucket.contains(handler))
    }

    /// Delivers `event` to every handler registered for its kind, in
    /// registration order, and returns how many were invoked.
    ///
    /// The handler list is captured before the first call, so handlers may
    /// add or remove registrations while the event is being delivered.
    pub fn dispatch(&self, event: &RawMouseEvent) -> usize {
        let handlers: Bucket = match self.entries.borrow().get(&event.kind) {
            Some(bucket) => bucket.clone(),
            None => return 0,
        };
        for handler in &handlers {
            handler.handle(event);
        }
        handlers.len()
    }

    pub fn len(&self, kind: MouseEventKind) -> usize {
        self.entries.borrow().get(&kind).map_or(0, |bucket| bucket.len())
    }

    pub fn total(&self) -> usize {
        self.entries.borrow().values().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
