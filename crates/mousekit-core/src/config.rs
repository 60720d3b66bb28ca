//! Which event kinds a consumer wants to observe.

use crate::event::MouseEventKind;
use smallvec::SmallVec;

/// Kinds enabled by a configuration, in [`MouseEventKind::ALL`] order.
pub type ActiveKinds = SmallVec<[MouseEventKind; 4]>;

/// Fully resolved event-kind configuration.
///
/// The default observes every kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MouseEvents {
    pub mousedown: bool,
    pub mouseup: bool,
    pub mousemove: bool,
    pub wheel: bool,
}

impl MouseEvents {
    pub const ALL: MouseEvents = MouseEvents {
        mousedown: true,
        mouseup: true,
        mousemove: true,
        wheel: true,
    };

    pub const NONE: MouseEvents = MouseEvents {
        mousedown: false,
        mouseup: false,
        mousemove: false,
        wheel: false,
    };

    /// Enables exactly the listed kinds.
    pub fn only(kinds: &[MouseEventKind]) -> Self {
        kinds
            .iter()
            .fold(Self::NONE, |config, kind| config.with(*kind, true))
    }

    /// Resolves an optional, possibly partial configuration.
    ///
    /// No configuration at all observes every kind; a partial one observes
    /// only the kinds it explicitly enables.
    pub fn resolve(options: Option<PartialMouseEvents>) -> Self {
        options.map(Self::from).unwrap_or_default()
    }

    pub fn is_enabled(&self, kind: MouseEventKind) -> bool {
        match kind {
            MouseEventKind::MouseDown => self.mousedown,
            MouseEventKind::MouseUp => self.mouseup,
            MouseEventKind::MouseMove => self.mousemove,
            MouseEventKind::Wheel => self.wheel,
        }
    }

    pub fn set(&mut self, kind: MouseEventKind, enabled: bool) {
        let slot = match kind {
            MouseEventKind::MouseDown => &mut self.mousedown,
            MouseEventKind::MouseUp => &mut self.mouseup,
            MouseEventKind::MouseMove => &mut self.mousemove,
            MouseEventKind::Wheel => &mut self.wheel,
        };
        *slot = enabled;
    }

    pub fn with(mut self, kind: MouseEventKind, enabled: bool) -> Self {
        self.set(kind, enabled);
        self
    }

    pub fn active_kinds(&self) -> ActiveKinds {
        MouseEventKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }
}

impl Default for MouseEvents {
    fn default() -> Self {
        Self::ALL
    }
}

/// Configuration as supplied by a caller, with any kind left out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartialMouseEvents {
    pub mousedown: Option<bool>,
    pub mouseup: Option<bool>,
    pub mousemove: Option<bool>,
    pub wheel: Option<bool>,
}

impl PartialMouseEvents {
    pub fn with(mut self, kind: MouseEventKind, enabled: bool) -> Self {
        let slot = match kind {
            MouseEventKind::MouseDown => &mut self.mousedown,
            MouseEventKind::MouseUp => &mut self.mouseup,
            MouseEventKind::MouseMove => &mut self.mousemove,
            MouseEventKind::Wheel => &mut self.wheel,
        };
        *slot = Some(enabled);
        self
    }
}

impl From<PartialMouseEvents> for MouseEvents {
    fn from(partial: PartialMouseEvents) -> Self {
        MouseEvents {
            mousedown: partial.mousedown.unwrap_or(false),
            mouseup: partial.mouseup.unwrap_or(false),
            mousemove: partial.mousemove.unwrap_or(false),
            wheel: partial.wheel.unwrap_or(false),
        }
    }
}

impl From<MouseEvents> for PartialMouseEvents {
    fn from(config: MouseEvents) -> Self {
        PartialMouseEvents {
            mousedown: Some(config.mousedown),
            mouseup: Some(config.mouseup),
            mousemove: Some(config.mousemove),
            wheel: Some(config.wheel),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
