//! Pointer state tracking for mousekit.
//!
//! Raw pointer events from a host input source are normalized into a
//! [`MouseState`] snapshot, and a [`MouseSubscription`] keeps the source's
//! listener registrations in step with the consumer's [`MouseEvents`]
//! configuration. [`MouseTracker`] ties both together for one consumer.

mod collections;
pub mod config;
pub mod event;
pub mod geometry;
pub mod normalize;
pub mod registry;
pub mod snapshot_state;
pub mod source;
pub mod state;
pub mod subscription;
pub mod tracker;

pub use config::{ActiveKinds, MouseEvents, PartialMouseEvents};
pub use event::{
    MouseEventKind, ParseMouseEventKindError, RawMouseEvent, DOM_DELTA_LINE, DOM_DELTA_PAGE,
    DOM_DELTA_PIXEL,
};
pub use geometry::Coordinate2D;
pub use normalize::{direction, normalize, normalize_wheel};
pub use registry::ListenerRegistry;
pub use snapshot_state::{ObserverRegistration, SnapshotState};
pub use source::{HandlerId, InputSource, MouseEventHandler, SourceError};
pub use state::{MouseButtons, MouseModifierKeys, MousePosition, MouseState, MouseWheel};
pub use subscription::{MouseSubscription, SubscriptionPhase};
pub use tracker::MouseTracker;

pub mod prelude {
    pub use crate::config::{MouseEvents, PartialMouseEvents};
    pub use crate::event::{MouseEventKind, RawMouseEvent};
    pub use crate::geometry::Coordinate2D;
    pub use crate::source::{InputSource, MouseEventHandler};
    pub use crate::state::{MouseButtons, MouseModifierKeys, MousePosition, MouseState, MouseWheel};
    pub use crate::tracker::MouseTracker;
}
