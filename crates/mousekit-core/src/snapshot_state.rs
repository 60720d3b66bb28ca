use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct ObserverEntry<T> {
    id: u64,
    cancelled: Cell<bool>,
    callback: Box<dyn Fn(&T)>,
}

struct SnapshotCell<T> {
    value: Rc<T>,
    version: u64,
    next_observer: u64,
    observers: Vec<Rc<ObserverEntry<T>>>,
}

/// Single-threaded observable value holder.
///
/// Every [`set`](Self::set) replaces the value wholesale and notifies the
/// observers registered at that moment, in registration order. Clones share
/// the same cell.
///
/// No borrow is held while observers run: an observer may read the state,
/// replace it, or drop its own registration.
pub struct SnapshotState<T> {
    inner: Rc<RefCell<SnapshotCell<T>>>,
}

impl<T> Clone for SnapshotState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> SnapshotState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SnapshotCell {
                value: Rc::new(value),
                version: 0,
                next_observer: 0,
                observers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        T::clone(self.current().as_ref())
    }

    /// Run `f` with a reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.current().as_ref())
    }

    /// Number of replacements since creation.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn set(&self, value: T) {
        let value = Rc::new(value);
        let observers = {
            let mut cell = self.inner.borrow_mut();
            cell.value = Rc::clone(&value);
            cell.version += 1;
            cell.observers.retain(|entry| !entry.cancelled.get());
            cell.observers.clone()
        };
        for entry in observers {
            // Registrations dropped by an earlier observer in this round no longer fire.
            if !entry.cancelled.get() {
                (entry.callback)(value.as_ref());
            }
        }
    }

    /// Registers `observer`; it stays active until the returned registration
    /// is cancelled or dropped.
    pub fn observe(&self, observer: impl Fn(&T) + 'static) -> ObserverRegistration {
        let entry = {
            let mut cell = self.inner.borrow_mut();
            let entry = Rc::new(ObserverEntry {
                id: cell.next_observer,
                cancelled: Cell::new(false),
                callback: Box::new(observer),
            });
            cell.next_observer += 1;
            cell.observers.push(Rc::clone(&entry));
            entry
        };

        let weak: Weak<RefCell<SnapshotCell<T>>> = Rc::downgrade(&self.inner);
        ObserverRegistration {
            remove: Some(Box::new(move || {
                entry.cancelled.set(true);
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                // A busy cell prunes cancelled entries on its next `set`.
                if let Ok(mut cell) = inner.try_borrow_mut() {
                    cell.observers.retain(|other| other.id != entry.id);
                };
            })),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner
            .borrow()
            .observers
            .iter()
            .filter(|entry| !entry.cancelled.get())
            .count()
    }

    fn current(&self) -> Rc<T> {
        Rc::clone(&self.inner.borrow().value)
    }
}

#[must_use = "dropping the registration removes the observer"]
pub struct ObserverRegistration {
    remove: Option<Box<dyn FnOnce()>>,
}

impl ObserverRegistration {
    pub fn cancel(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for ObserverRegistration {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

#[cfg(test)]
#[path = "tests/snapshot_state_tests.rs"]
mod tests;
