//! Browser input source.
//!
//! [`DocumentSource`] registers listeners directly on the page's `document`.
//! Each registration wraps the core handler in a JS closure that stays alive
//! until the matching deregistration removes it again.

use mousekit_core::{
    Coordinate2D, HandlerId, InputSource, MouseEventHandler, MouseEventKind, RawMouseEvent,
    SourceError,
};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, WheelEvent};

type ListenerClosure = Closure<dyn FnMut(MouseEvent)>;

struct Listener {
    kind: MouseEventKind,
    handler: HandlerId,
    closure: ListenerClosure,
}

pub struct DocumentSource {
    document: Document,
    listeners: RefCell<Vec<Listener>>,
}

impl DocumentSource {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// The current page's document, if there is one.
    ///
    /// Workers and other contexts without a `window` yield `None`; trackers
    /// built on that stay at "no snapshot yet".
    pub fn ambient() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(document))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl InputSource for DocumentSource {
    fn register(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        let already_registered = self
            .listeners
            .borrow()
            .iter()
            .any(|listener| listener.kind == kind && listener.handler == handler.id());
        if already_registered {
            return Ok(());
        }

        let callback = handler.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            callback.handle(&raw_event(kind, &event));
        }) as Box<dyn FnMut(_)>);
        self.document
            .add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
            .map_err(|err| SourceError::rejected(kind, format!("{err:?}")))?;
        log::debug!("document listener added: {} {:?}", kind, handler);

        self.listeners.borrow_mut().push(Listener {
            kind,
            handler: handler.id(),
            closure,
        });
        Ok(())
    }

    fn deregister(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        let listener = {
            let mut listeners = self.listeners.borrow_mut();
            let Some(index) = listeners
                .iter()
                .position(|listener| listener.kind == kind && listener.handler == handler.id())
            else {
                return Ok(());
            };
            listeners.remove(index)
        };
        self.document
            .remove_event_listener_with_callback(
                kind.as_str(),
                listener.closure.as_ref().unchecked_ref(),
            )
            .map_err(|err| SourceError::rejected(kind, format!("{err:?}")))
    }
}

impl Drop for DocumentSource {
    fn drop(&mut self) {
        for listener in self.listeners.get_mut().drain(..) {
            if let Err(err) = self.document.remove_event_listener_with_callback(
                listener.kind.as_str(),
                listener.closure.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to remove {} listener: {:?}", listener.kind, err);
            }
        }
    }
}

/// Reads a DOM mouse event into the core's raw representation.
///
/// Wheel fields are only read for wheel-kind events whose object really is a
/// `WheelEvent`.
pub fn raw_event(kind: MouseEventKind, event: &MouseEvent) -> RawMouseEvent {
    let mut raw = RawMouseEvent {
        client: Coordinate2D::new(event.client_x() as f64, event.client_y() as f64),
        page: Coordinate2D::new(event.page_x() as f64, event.page_y() as f64),
        screen: Coordinate2D::new(event.screen_x() as f64, event.screen_y() as f64),
        movement: Coordinate2D::new(event.movement_x() as f64, event.movement_y() as f64),
        buttons: event.buttons(),
        alt_key: event.alt_key(),
        ctrl_key: event.ctrl_key(),
        meta_key: event.meta_key(),
        shift_key: event.shift_key(),
        ..RawMouseEvent::new(kind)
    };

    if kind == MouseEventKind::Wheel {
        if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
            raw.delta_x = Some(wheel.delta_x());
            raw.delta_y = Some(wheel.delta_y());
            raw.delta_z = Some(wheel.delta_z());
            raw.delta_mode = Some(wheel.delta_mode());
        }
    }
    raw
}
