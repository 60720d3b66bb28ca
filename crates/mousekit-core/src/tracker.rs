use crate::config::{MouseEvents, PartialMouseEvents};
use crate::event::MouseEventKind;
use crate::normalize::normalize;
use crate::snapshot_state::SnapshotState;
use crate::source::{InputSource, MouseEventHandler};
use crate::state::MouseState;
use crate::subscription::{MouseSubscription, SubscriptionPhase};

/// Per-consumer pointer tracking.
///
/// The host calls [`render`](Self::render) once per render pass with the
/// consumer's current options and shows the returned snapshot. Every event
/// delivered by the source replaces the snapshot, and observers registered
/// on [`state`](Self::state) are told about each replacement.
pub struct MouseTracker<S: InputSource> {
    state: SnapshotState<Option<MouseState>>,
    subscription: MouseSubscription<S>,
}

impl<S: InputSource> MouseTracker<S> {
    pub fn new(source: Option<S>) -> Self {
        let state = SnapshotState::new(None);
        let handler = {
            let state = state.clone();
            MouseEventHandler::new(move |event| {
                let snapshot = normalize(event);
                log::trace!("{} -> {:?}", event.kind, snapshot);
                state.set(Some(snapshot));
            })
        };
        Self {
            state,
            subscription: MouseSubscription::new(source, handler),
        }
    }

    /// Applies `options` and returns the latest snapshot.
    ///
    /// `None` observes every kind; a partial configuration observes only the
    /// kinds it enables.
    pub fn render(&mut self, options: Option<PartialMouseEvents>) -> Option<MouseState> {
        self.subscription.reconfigure(MouseEvents::resolve(options));
        self.snapshot()
    }

    pub fn snapshot(&self) -> Option<MouseState> {
        self.state.get()
    }

    /// Observable handle on the snapshot.
    pub fn state(&self) -> SnapshotState<Option<MouseState>> {
        self.state.clone()
    }

    pub fn phase(&self) -> SubscriptionPhase {
        self.subscription.phase()
    }

    pub fn registered_kinds(&self) -> &[MouseEventKind] {
        self.subscription.registered_kinds()
    }

    /// Tears down every registration. The last snapshot stays readable.
    pub fn dispose(&mut self) {
        self.subscription.stop();
    }
}
