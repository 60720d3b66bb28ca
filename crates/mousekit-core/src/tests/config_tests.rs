use super::*;

#[test]
fn missing_configuration_observes_every_kind() {
    let config = MouseEvents::resolve(None);
    assert_eq!(config, MouseEvents::ALL);
    assert_eq!(config.active_kinds().as_slice(), &MouseEventKind::ALL);
}

#[test]
fn partial_configuration_treats_omitted_kinds_as_disabled() {
    let partial = PartialMouseEvents {
        mousemove: Some(true),
        ..PartialMouseEvents::default()
    };

    let config = MouseEvents::resolve(Some(partial));

    assert_eq!(config, MouseEvents::only(&[MouseEventKind::MouseMove]));
    assert_eq!(config.active_kinds().as_slice(), &[MouseEventKind::MouseMove]);
}

#[test]
fn empty_partial_configuration_observes_nothing() {
    let config = MouseEvents::resolve(Some(PartialMouseEvents::default()));
    assert_eq!(config, MouseEvents::NONE);
    assert!(config.active_kinds().is_empty());
}

#[test]
fn active_kinds_keep_registration_order() {
    let config = MouseEvents::only(&[MouseEventKind::Wheel, MouseEventKind::MouseDown]);
    assert_eq!(
        config.active_kinds().as_slice(),
        &[MouseEventKind::MouseDown, MouseEventKind::Wheel]
    );
}

#[test]
fn set_and_with_toggle_single_kinds() {
    let mut config = MouseEvents::NONE.with(MouseEventKind::MouseUp, true);
    assert!(config.is_enabled(MouseEventKind::MouseUp));
    assert!(!config.is_enabled(MouseEventKind::MouseDown));

    config.set(MouseEventKind::MouseUp, false);
    assert_eq!(config, MouseEvents::NONE);
}

#[test]
fn partial_builder_round_trips_through_resolution() {
    let partial = PartialMouseEvents::default()
        .with(MouseEventKind::MouseDown, true)
        .with(MouseEventKind::Wheel, false);

    assert_eq!(partial.wheel, Some(false));
    assert_eq!(partial.mouseup, None);
    assert_eq!(
        MouseEvents::from(partial),
        MouseEvents::only(&[MouseEventKind::MouseDown])
    );
    assert_eq!(
        PartialMouseEvents::from(MouseEvents::ALL),
        PartialMouseEvents {
            mousedown: Some(true),
            mouseup: Some(true),
            mousemove: Some(true),
            wheel: Some(true),
        }
    );
}

#[test]
fn kind_names_parse_case_insensitively() {
    assert_eq!("mousedown".parse::<MouseEventKind>(), Ok(MouseEventKind::MouseDown));
    assert_eq!(" Wheel ".parse::<MouseEventKind>(), Ok(MouseEventKind::Wheel));
    assert_eq!(MouseEventKind::MouseMove.to_string(), "mousemove");

    let err = "click".parse::<MouseEventKind>().unwrap_err();
    assert_eq!(err.name(), "click");
    assert!(err.to_string().contains("unknown mouse event kind 'click'"));
}
