use mousekit_core::{
    Coordinate2D, InputSource, ListenerRegistry, MouseEventHandler, MouseEventKind,
    RawMouseEvent, SourceError, DOM_DELTA_LINE, DOM_DELTA_PIXEL,
};
use std::cell::Cell;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::ModifiersState;

/// Input source fed by the window events of a single winit window.
///
/// Positions arrive in physical pixels and are reported in logical pixels.
/// A window has no scrolled page, so page coordinates equal client
/// coordinates; screen coordinates add the client area's origin, converted
/// with the scale factor in effect when the event fires.
pub struct DesktopWinitSource {
    scale_factor: Cell<f64>,
    origin: Cell<PhysicalPosition<i32>>,
    cursor: Cell<Option<PhysicalPosition<f64>>>,
    buttons: Cell<u16>,
    modifiers: Cell<ModifiersState>,
    listeners: ListenerRegistry,
}

impl DesktopWinitSource {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor: Cell::new(scale_factor),
            origin: Cell::new(PhysicalPosition::new(0, 0)),
            cursor: Cell::new(None),
            buttons: Cell::new(0),
            modifiers: Cell::new(ModifiersState::empty()),
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor.get()
    }

    pub fn set_scale_factor(&self, factor: f64) {
        self.scale_factor.set(factor);
    }

    /// Records where the window's client area starts on screen.
    ///
    /// winit's `Moved` event reports the outer position, which includes the
    /// decorations, so hosts pass `Window::inner_position` here instead.
    pub fn set_window_origin(&self, origin: PhysicalPosition<i32>) {
        self.origin.set(origin);
    }

    /// Current DOM-style button mask.
    pub fn buttons(&self) -> u16 {
        self.buttons.get()
    }

    pub fn listener_count(&self, kind: MouseEventKind) -> usize {
        self.listeners.len(kind)
    }

    /// Feeds one window event through the source and returns how many
    /// handlers it reached. Events that do not produce a mouse event return
    /// zero.
    pub fn handle_window_event(&self, event: &WindowEvent) -> usize {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => self.mouse_wheel(*delta),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers_changed(modifiers.state());
                0
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                0
            }
            _ => 0,
        }
    }

    pub fn cursor_moved(&self, position: PhysicalPosition<f64>) -> usize {
        let movement = match self.cursor.replace(Some(position)) {
            Some(previous) => self.logical(position) - self.logical(previous),
            None => Coordinate2D::ZERO,
        };
        let mut event = self.event(MouseEventKind::MouseMove);
        event.movement = movement;
        self.listeners.dispatch(&event)
    }

    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> usize {
        let Some(bit) = button_bit(button) else {
            log::trace!("ignoring {:?} button", button);
            return 0;
        };
        let (kind, mask) = match state {
            ElementState::Pressed => (MouseEventKind::MouseDown, self.buttons.get() | bit),
            ElementState::Released => (MouseEventKind::MouseUp, self.buttons.get() & !bit),
        };
        self.buttons.set(mask);
        self.listeners.dispatch(&self.event(kind))
    }

    pub fn mouse_wheel(&self, delta: MouseScrollDelta) -> usize {
        // winit reports positive y when scrolling up; the DOM uses positive deltaY for down.
        let (x, y, mode) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (-(x as f64), -(y as f64), DOM_DELTA_LINE),
            MouseScrollDelta::PixelDelta(position) => {
                let logical = self.logical(position);
                (-logical.x, -logical.y, DOM_DELTA_PIXEL)
            }
        };
        let mut event = self.event(MouseEventKind::Wheel);
        event.delta_x = Some(x);
        event.delta_y = Some(y);
        event.delta_z = Some(0.0);
        event.delta_mode = Some(mode);
        self.listeners.dispatch(&event)
    }

    pub fn modifiers_changed(&self, modifiers: ModifiersState) {
        self.modifiers.set(modifiers);
    }

    fn logical(&self, position: PhysicalPosition<f64>) -> Coordinate2D {
        let scale = self.scale_factor.get();
        Coordinate2D::new(position.x / scale, position.y / scale)
    }

    fn event(&self, kind: MouseEventKind) -> RawMouseEvent {
        let client = self
            .cursor
            .get()
            .map_or(Coordinate2D::ZERO, |cursor| self.logical(cursor));
        let modifiers = self.modifiers.get();
        let origin = self.origin.get();
        let origin = self.logical(PhysicalPosition::new(origin.x as f64, origin.y as f64));
        RawMouseEvent {
            client,
            page: client,
            screen: origin + client,
            buttons: self.buttons.get(),
            alt_key: modifiers.alt_key(),
            ctrl_key: modifiers.control_key(),
            meta_key: modifiers.super_key(),
            shift_key: modifiers.shift_key(),
            ..RawMouseEvent::new(kind)
        }
    }
}

impl Default for DesktopWinitSource {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl InputSource for DesktopWinitSource {
    fn register(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        if self.listeners.add(kind, handler) {
            log::debug!("window listener added: {} {:?}", kind, handler);
        }
        Ok(())
    }

    fn deregister(
        &self,
        kind: MouseEventKind,
        handler: &MouseEventHandler,
    ) -> Result<(), SourceError> {
        if self.listeners.remove(kind, handler) {
            log::debug!("window listener removed: {} {:?}", kind, handler);
        }
        Ok(())
    }
}

fn button_bit(button: MouseButton) -> Option<u16> {
    match button {
        MouseButton::Left => Some(1),
        MouseButton::Right => Some(2),
        MouseButton::Middle => Some(4),
        MouseButton::Back => Some(8),
        MouseButton::Forward => Some(16),
        MouseButton::Other(_) => None,
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
