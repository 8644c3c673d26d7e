//! Host actions and the transport commands they name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Action name the host shell sends when it wants the bridge to exit.
pub const QUIT_ACTION: &str = "quit";

/// An abstract playback-control request from the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransportCommand {
    TogglePlay,
    Play,
    Pause,
    Stop,
    Prev,
    Next,
}

impl TransportCommand {
    pub const ALL: [TransportCommand; 6] = [
        TransportCommand::TogglePlay,
        TransportCommand::Play,
        TransportCommand::Pause,
        TransportCommand::Stop,
        TransportCommand::Prev,
        TransportCommand::Next,
    ];

    /// The action name used on the host side.
    pub fn action_name(self) -> &'static str {
        match self {
            TransportCommand::TogglePlay => "toggle-play",
            TransportCommand::Play => "play",
            TransportCommand::Pause => "pause",
            TransportCommand::Stop => "stop",
            TransportCommand::Prev => "prev-song",
            TransportCommand::Next => "next-song",
        }
    }
}

impl fmt::Display for TransportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transport command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for TransportCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportCommand::ALL
            .into_iter()
            .find(|c| c.action_name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// One action event delivered by the host: a name plus an opaque parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAction {
    pub name: String,
    /// Carried through for logging; no transport command uses it.
    pub param: Option<String>,
}

impl HostAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    pub fn is_quit(&self) -> bool {
        self.name == QUIT_ACTION
    }

    /// Parse the action name as a transport command.
    pub fn command(&self) -> Result<TransportCommand, UnknownCommand> {
        self.name.parse()
    }
}

impl From<TransportCommand> for HostAction {
    fn from(cmd: TransportCommand) -> Self {
        HostAction::new(cmd.action_name())
    }
}
