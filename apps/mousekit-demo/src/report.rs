use mousekit_core::{Coordinate2D, MouseState};

pub const INITIALIZING: &str = "Initializing...";

/// Text lines shown for the current snapshot.
pub fn report_lines(state: Option<&MouseState>) -> Vec<String> {
    let Some(state) = state else {
        return vec![INITIALIZING.to_string()];
    };
    let wheel = &state.wheel;
    vec![
        line("Mouse position in viewport", coordinates(state.position.client)),
        line("Mouse position on page", coordinates(state.position.page)),
        line("Mouse position on screen", coordinates(state.position.screen)),
        line("Mouse movement", coordinates(state.movement)),
        line("Left button was pressed", state.buttons.left),
        line("Right button was pressed", state.buttons.right),
        line("Middle button was pressed", state.buttons.middle),
        line("Alt key was pressed", state.keyboard.alt),
        line("Ctrl key was pressed", state.keyboard.ctrl),
        line("Meta key was pressed", state.keyboard.meta),
        line("Shift key was pressed", state.keyboard.shift),
        line("Wheel delta X", optional(wheel.delta_x.map(number))),
        line("Wheel moved left", optional(wheel.left)),
        line("Wheel moved right", optional(wheel.right)),
        line("Wheel delta Y", optional(wheel.delta_y.map(number))),
        line("Wheel moved up", optional(wheel.up)),
        line("Wheel moved down", optional(wheel.down)),
        line("Wheel delta Z", optional(wheel.delta_z.map(number))),
        line("Wheel moved out", optional(wheel.out)),
        line("Wheel moved in", optional(wheel.r#in)),
    ]
}

fn line(label: &str, value: impl ToString) -> String {
    format!("{label}: {}", value.to_string())
}

fn coordinates(point: Coordinate2D) -> String {
    format!("({}, {})", number(point.x), number(point.y))
}

fn optional(value: Option<impl ToString>) -> String {
    value.map_or_else(|| "undefined".to_string(), |value| value.to_string())
}

/// Formats like a browser prints numbers: no trailing `.0`, and no `-0`.
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
