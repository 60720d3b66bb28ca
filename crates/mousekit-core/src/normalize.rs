use crate::event::{MouseEventKind, RawMouseEvent};
use crate::state::{MouseButtons, MouseModifierKeys, MousePosition, MouseState, MouseWheel};

/// Builds the snapshot for one raw event.
///
/// Coordinates, movement and modifier flags are copied verbatim. Wheel data
/// is read only from wheel events; every other kind yields
/// [`MouseWheel::ABSENT`].
pub fn normalize(event: &RawMouseEvent) -> MouseState {
    MouseState {
        position: MousePosition {
            client: event.client,
            page: event.page,
            screen: event.screen,
        },
        movement: event.movement,
        buttons: MouseButtons::from_mask(event.buttons),
        keyboard: MouseModifierKeys {
            alt: event.alt_key,
            ctrl: event.ctrl_key,
            meta: event.meta_key,
            shift: event.shift_key,
        },
        wheel: normalize_wheel(event),
    }
}

pub fn normalize_wheel(event: &RawMouseEvent) -> MouseWheel {
    if event.kind != MouseEventKind::Wheel {
        return MouseWheel::ABSENT;
    }

    let (left, right) = direction(event.delta_x);
    let (up, down) = direction(event.delta_y);
    let (out, r#in) = direction(event.delta_z);

    MouseWheel {
        delta_x: event.delta_x,
        left,
        right,
        delta_y: event.delta_y,
        up,
        down,
        delta_z: event.delta_z,
        out,
        r#in,
        delta_mode: event.delta_mode,
    }
}

/// Splits a delta into its `(negative, positive)` direction flags.
///
/// Zero (and NaN) sets both flags false; a missing delta leaves both missing.
pub fn direction(delta: Option<f64>) -> (Option<bool>, Option<bool>) {
    match delta {
        Some(value) => (Some(value < 0.0), Some(value > 0.0)),
        None => (None, None),
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
