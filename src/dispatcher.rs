//! Maps host transport commands onto clicks on the page's buttons.

use thiserror::Error;
use tracing::debug;

use crate::model::{HostAction, TransportCommand};
use crate::page::{ActionPort, Control, PageError};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no `#{}` button on the page for {command}", .control.element_id())]
    MissingControl {
        command: TransportCommand,
        control: Control,
    },
    #[error("{command}: {source}")]
    Page {
        command: TransportCommand,
        #[source]
        source: PageError,
    },
}

/// The page has a single play/pause toggle, so play, pause and toggle all
/// land on the same button.
pub fn control_for(command: TransportCommand) -> Control {
    match command {
        TransportCommand::TogglePlay | TransportCommand::Play | TransportCommand::Pause => {
            Control::Play
        }
        TransportCommand::Stop => Control::Stop,
        TransportCommand::Prev => Control::Previous,
        TransportCommand::Next => Control::Next,
    }
}

pub struct Dispatcher<A> {
    actions: A,
}

impl<A: ActionPort> Dispatcher<A> {
    pub fn new(actions: A) -> Self {
        Self { actions }
    }

    /// Handle one host action. Unrecognized names are ignored and return
    /// `Ok(None)`; otherwise the clicked control is returned.
    pub async fn handle(&self, action: &HostAction) -> Result<Option<Control>, DispatchError> {
        match action.command() {
            Ok(command) => self.dispatch(command).await.map(Some),
            Err(e) => {
                debug!(param = ?action.param, "ignoring host action: {e}");
                Ok(None)
            }
        }
    }

    /// Click the control for `command`, exactly once.
    pub async fn dispatch(&self, command: TransportCommand) -> Result<Control, DispatchError> {
        let control = control_for(command);
        debug!(%command, control = control.element_id(), "dispatch");
        match self.actions.click(control).await {
            Ok(()) => Ok(control),
            Err(PageError::MissingControl(control)) => {
                Err(DispatchError::MissingControl { command, control })
            }
            Err(source) => Err(DispatchError::Page { command, source }),
        }
    }
}
