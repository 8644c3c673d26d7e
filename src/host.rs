//! Interfaces onto the host media-control shell.

#[cfg(test)]
pub(crate) mod recording;

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::model::{HostAction, PlaybackStatus, TrackSnapshot};

/// Receives now-playing updates. Calls are fire-and-forget; nothing is read back.
pub trait PlayerSink {
    fn set_track(&self, track: TrackSnapshot);
    fn set_playback_state(&self, status: PlaybackStatus);
    fn set_can_pause(&self, can: bool);
    fn set_can_play(&self, can: bool);
    fn set_can_go_prev(&self, can: bool);
    fn set_can_go_next(&self, can: bool);
}

impl<T: PlayerSink> PlayerSink for Arc<T> {
    fn set_track(&self, track: TrackSnapshot) {
        (**self).set_track(track)
    }

    fn set_playback_state(&self, status: PlaybackStatus) {
        (**self).set_playback_state(status)
    }

    fn set_can_pause(&self, can: bool) {
        (**self).set_can_pause(can)
    }

    fn set_can_play(&self, can: bool) {
        (**self).set_can_play(can)
    }

    fn set_can_go_prev(&self, can: bool) {
        (**self).set_can_go_prev(can)
    }

    fn set_can_go_next(&self, can: bool) {
        (**self).set_can_go_next(can)
    }
}

/// Delivers host action events. `None` means the host side has gone away.
pub trait ActionSource {
    async fn next_action(&mut self) -> Option<HostAction>;
}

impl ActionSource for UnboundedReceiver<HostAction> {
    async fn next_action(&mut self) -> Option<HostAction> {
        self.recv().await
    }
}
