use mousekit_core::{Coordinate2D, MouseEventKind, RawMouseEvent, DOM_DELTA_PIXEL};

/// Fluent builder for [`RawMouseEvent`]s.
///
/// ```
/// use mousekit_testing::MouseEventBuilder;
///
/// let event = MouseEventBuilder::press()
///     .client(111.0, 222.0)
///     .buttons(3)
///     .alt_key(true)
///     .build();
/// assert_eq!(event.buttons, 3);
/// ```
#[derive(Clone, Debug)]
pub struct MouseEventBuilder {
    event: RawMouseEvent,
}

impl MouseEventBuilder {
    pub fn new(kind: MouseEventKind) -> Self {
        Self {
            event: RawMouseEvent::new(kind),
        }
    }

    pub fn press() -> Self {
        Self::new(MouseEventKind::MouseDown)
    }

    pub fn release() -> Self {
        Self::new(MouseEventKind::MouseUp)
    }

    pub fn moved() -> Self {
        Self::new(MouseEventKind::MouseMove)
    }

    /// A wheel event with zero deltas in pixel mode, like a browser reports
    /// for a wheel event with no motion.
    pub fn wheel() -> Self {
        Self::new(MouseEventKind::Wheel).delta(0.0, 0.0, 0.0)
    }

    pub fn client(mut self, x: f64, y: f64) -> Self {
        self.event.client = Coordinate2D::new(x, y);
        self
    }

    pub fn page(mut self, x: f64, y: f64) -> Self {
        self.event.page = Coordinate2D::new(x, y);
        self
    }

    pub fn screen(mut self, x: f64, y: f64) -> Self {
        self.event.screen = Coordinate2D::new(x, y);
        self
    }

    /// Sets client, page and screen coordinates to the same point.
    pub fn at(self, x: f64, y: f64) -> Self {
        self.client(x, y).page(x, y).screen(x, y)
    }

    pub fn movement(mut self, x: f64, y: f64) -> Self {
        self.event.movement = Coordinate2D::new(x, y);
        self
    }

    pub fn buttons(mut self, mask: u16) -> Self {
        self.event.buttons = mask;
        self
    }

    pub fn alt_key(mut self, pressed: bool) -> Self {
        self.event.alt_key = pressed;
        self
    }

    pub fn ctrl_key(mut self, pressed: bool) -> Self {
        self.event.ctrl_key = pressed;
        self
    }

    pub fn meta_key(mut self, pressed: bool) -> Self {
        self.event.meta_key = pressed;
        self
    }

    pub fn shift_key(mut self, pressed: bool) -> Self {
        self.event.shift_key = pressed;
        self
    }

    pub fn delta(self, x: f64, y: f64, z: f64) -> Self {
        self.delta_x(Some(x))
            .delta_y(Some(y))
            .delta_z(Some(z))
            .delta_mode(Some(DOM_DELTA_PIXEL))
    }

    pub fn delta_x(mut self, value: Option<f64>) -> Self {
        self.event.delta_x = value;
        self
    }

    pub fn delta_y(mut self, value: Option<f64>) -> Self {
        self.event.delta_y = value;
        self
    }

    pub fn delta_z(mut self, value: Option<f64>) -> Self {
        self.event.delta_z = value;
        self
    }

    pub fn delta_mode(mut self, mode: Option<u32>) -> Self {
        self.event.delta_mode = mode;
        self
    }

    pub fn build(self) -> RawMouseEvent {
        self.event
    }
}
