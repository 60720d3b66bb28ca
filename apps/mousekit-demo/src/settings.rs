use mousekit_core::{MouseEventKind, ParseMouseEventKindError, PartialMouseEvents};

/// Comma separated list of event kinds the demo observes. Unset means all.
pub const EVENTS_VAR: &str = "MOUSEKIT_EVENTS";

pub fn events_from_env() -> Result<Option<PartialMouseEvents>, ParseMouseEventKindError> {
    match std::env::var(EVENTS_VAR) {
        Ok(value) => parse_events(&value).map(Some),
        Err(_) => Ok(None),
    }
}

/// Kinds that are not listed stay unobserved. Empty entries are skipped.
pub fn parse_events(value: &str) -> Result<PartialMouseEvents, ParseMouseEventKindError> {
    let mut events = PartialMouseEvents::default();
    for name in value.split(',').filter(|name| !name.trim().is_empty()) {
        let kind: MouseEventKind = name.parse()?;
        events = events.with(kind, true);
    }
    Ok(events)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
