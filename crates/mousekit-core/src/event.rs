//! Raw pointer events as delivered by the host.
//!
//! A [`RawMouseEvent`] mirrors the loosely typed event objects that input
//! sources hand to their listeners: every kind carries coordinates, the
//! button mask and modifier flags, while only wheel events carry deltas.
//! Sources fill the wheel fields with `None` when the platform does not
//! report them.

use crate::geometry::Coordinate2D;
use std::fmt;
use std::str::FromStr;

/// Wheel deltas are expressed in pixels.
pub const DOM_DELTA_PIXEL: u32 = 0;
/// Wheel deltas are expressed in lines.
pub const DOM_DELTA_LINE: u32 = 1;
/// Wheel deltas are expressed in pages.
pub const DOM_DELTA_PAGE: u32 = 2;

/// The closed set of input-event categories a subscription can observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// A button was pressed.
    MouseDown,
    /// A button was released.
    MouseUp,
    /// The pointer moved.
    MouseMove,
    /// The wheel (or trackpad scroll) moved.
    Wheel,
}

impl MouseEventKind {
    /// Every kind, in the order subscriptions register them.
    pub const ALL: [MouseEventKind; 4] = [
        MouseEventKind::MouseDown,
        MouseEventKind::MouseUp,
        MouseEventKind::MouseMove,
        MouseEventKind::Wheel,
    ];

    /// The DOM event type name for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            MouseEventKind::MouseDown => "mousedown",
            MouseEventKind::MouseUp => "mouseup",
            MouseEventKind::MouseMove => "mousemove",
            MouseEventKind::Wheel => "wheel",
        }
    }
}

impl fmt::Display for MouseEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMouseEventKindError {
    name: String,
}

impl ParseMouseEventKindError {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseMouseEventKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mouse event kind '{}'; expected one of mousedown, mouseup, mousemove, wheel",
            self.name
        )
    }
}

impl std::error::Error for ParseMouseEventKindError {}

impl FromStr for MouseEventKind {
    type Err = ParseMouseEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        MouseEventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseMouseEventKindError {
                name: name.to_string(),
            })
    }
}

/// One event as reported by an input source.
#[derive(Clone, Debug, PartialEq)]
pub struct RawMouseEvent {
    pub kind: MouseEventKind,
    /// Viewport coordinates.
    pub client: Coordinate2D,
    /// Document coordinates.
    pub page: Coordinate2D,
    /// Screen coordinates.
    pub screen: Coordinate2D,
    /// Delta since the previous native move event.
    pub movement: Coordinate2D,
    /// Bit 0 = left, bit 1 = right, bit 2 = middle; higher bits are side buttons.
    pub buttons: u16,
    pub alt_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    pub delta_x: Option<f64>,
    pub delta_y: Option<f64>,
    pub delta_z: Option<f64>,
    pub delta_mode: Option<u32>,
}

impl RawMouseEvent {
    /// An event of `kind` at the origin with nothing pressed and no wheel data.
    pub fn new(kind: MouseEventKind) -> Self {
        Self {
            kind,
            client: Coordinate2D::ZERO,
            page: Coordinate2D::ZERO,
            screen: Coordinate2D::ZERO,
            movement: Coordinate2D::ZERO,
            buttons: 0,
            alt_key: false,
            ctrl_key: false,
            meta_key: false,
            shift_key: false,
            delta_x: None,
            delta_y: None,
            delta_z: None,
            delta_mode: None,
        }
    }
}
