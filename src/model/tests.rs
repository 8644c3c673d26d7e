use super::*;

#[test]
fn transport_commands_parse_from_host_action_names() {
    for cmd in TransportCommand::ALL {
        assert_eq!(cmd.action_name().parse::<TransportCommand>(), Ok(cmd));
    }
    assert_eq!("prev-song".parse(), Ok(TransportCommand::Prev));
    assert_eq!("next-song".parse(), Ok(TransportCommand::Next));
}

#[test]
fn unknown_action_names_do_not_parse() {
    for name in ["", "seek", "PLAY", "previous", "quit", "toggle_play"] {
        assert_eq!(
            name.parse::<TransportCommand>(),
            Err(UnknownCommand(name.to_string())),
            "{name:?} should not parse"
        );
    }
}

#[test]
fn host_action_carries_param_and_detects_quit() {
    let action = HostAction::new("play").with_param("ignored");
    assert_eq!(action.param.as_deref(), Some("ignored"));
    assert_eq!(action.command(), Ok(TransportCommand::Play));
    assert!(!action.is_quit());

    let quit = HostAction::new(QUIT_ACTION);
    assert!(quit.is_quit());
    assert!(quit.command().is_err());

    let from_cmd: HostAction = TransportCommand::TogglePlay.into();
    assert_eq!(from_cmd.name, "toggle-play");
    assert_eq!(from_cmd.param, None);
}

#[test]
fn capability_set_helpers() {
    assert!(CapabilitySet::uniform(true).all());
    assert!(CapabilitySet::uniform(false).none());
    assert_eq!(CapabilitySet::default(), CapabilitySet::uniform(false));

    let partial = CapabilitySet {
        can_play: true,
        ..CapabilitySet::default()
    };
    assert!(!partial.all());
    assert!(!partial.none());
}

#[test]
fn playback_status_defaults_to_unknown() {
    assert_eq!(PlaybackStatus::default(), PlaybackStatus::Unknown);
    assert!(!TrackSnapshot::default().has_title());
}
