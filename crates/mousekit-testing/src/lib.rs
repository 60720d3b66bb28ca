//! Testing utilities for mousekit
//!
//! [`FakeDocument`] stands in for the host document: it keeps a listener
//! table, records every registration change and delivers events built with
//! [`MouseEventBuilder`] synchronously.

pub mod document;
pub mod event_builder;

pub use document::{FakeDocument, RegistrationChange};
pub use event_builder::MouseEventBuilder;

pub mod prelude {
    pub use crate::document::{FakeDocument, RegistrationChange};
    pub use crate::event_builder::MouseEventBuilder;
}
