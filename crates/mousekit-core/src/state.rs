//! The pointer snapshot exposed to consumers.
//!
//! A [`MouseState`] is rebuilt from scratch for every observed event and
//! replaces the previous one wholesale. Consumers hold an
//! `Option<MouseState>`: `None` means no event has been observed yet, which
//! is distinct from a snapshot whose fields are all zero or false.

use crate::geometry::Coordinate2D;

/// Pointer location in the three reference frames the host reports.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MousePosition {
    /// Relative to the viewport.
    pub client: Coordinate2D,
    /// Relative to the document.
    pub page: Coordinate2D,
    /// Relative to the screen.
    pub screen: Coordinate2D,
}

/// Pressed state of the three modelled buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl MouseButtons {
    pub const NONE: MouseButtons = MouseButtons {
        left: false,
        right: false,
        middle: false,
    };

    /// Decodes a host button mask.
    ///
    /// Only masks 0 through 7 are decoded; anything larger (side buttons
    /// held) reports none of the three buttons.
    pub fn from_mask(mask: u16) -> Self {
        if mask > 7 {
            return Self::NONE;
        }
        Self {
            left: mask & 0b001 != 0,
            right: mask & 0b010 != 0,
            middle: mask & 0b100 != 0,
        }
    }
}

/// Modifier keys held when the event fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseModifierKeys {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

/// Wheel data of the triggering event.
///
/// Each field is `None` when the event did not carry it. Directions are
/// derived from the sign of their delta and are `None` exactly when the delta
/// is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseWheel {
    pub delta_x: Option<f64>,
    /// `delta_x < 0`.
    pub left: Option<bool>,
    /// `delta_x > 0`.
    pub right: Option<bool>,
    pub delta_y: Option<f64>,
    /// `delta_y < 0`.
    pub up: Option<bool>,
    /// `delta_y > 0`.
    pub down: Option<bool>,
    pub delta_z: Option<f64>,
    /// `delta_z < 0`.
    pub out: Option<bool>,
    /// `delta_z > 0`.
    pub r#in: Option<bool>,
    pub delta_mode: Option<u32>,
}

impl MouseWheel {
    pub const ABSENT: MouseWheel = MouseWheel {
        delta_x: None,
        left: None,
        right: None,
        delta_y: None,
        up: None,
        down: None,
        delta_z: None,
        out: None,
        r#in: None,
        delta_mode: None,
    };

    /// Returns true if any wheel field was reported.
    pub fn is_present(&self) -> bool {
        *self != Self::ABSENT
    }
}

/// Snapshot of the most recent pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseState {
    pub position: MousePosition,
    pub movement: Coordinate2D,
    pub buttons: MouseButtons,
    pub keyboard: MouseModifierKeys,
    pub wheel: MouseWheel,
}
