//! Sink that records every call, for asserting on update sequences.

use std::sync::Mutex;

use tokio::time::Instant;

use super::PlayerSink;
use crate::model::{PlaybackStatus, TrackSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SinkCall {
    Track(TrackSnapshot),
    Playback(PlaybackStatus),
    CanPause(bool),
    CanPlay(bool),
    CanGoPrev(bool),
    CanGoNext(bool),
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    calls: Mutex<Vec<(Instant, SinkCall)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().iter().map(|(_, c)| c.clone()).collect()
    }

    /// Times at which a track update (the first call of a tick) arrived.
    pub fn track_times(&self) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, c)| matches!(c, SinkCall::Track(_)))
            .map(|(t, _)| *t)
            .collect()
    }

    fn push(&self, call: SinkCall) {
        self.calls.lock().unwrap().push((Instant::now(), call));
    }
}

impl PlayerSink for RecordingSink {
    fn set_track(&self, track: TrackSnapshot) {
        self.push(SinkCall::Track(track));
    }

    fn set_playback_state(&self, status: PlaybackStatus) {
        self.push(SinkCall::Playback(status));
    }

    fn set_can_pause(&self, can: bool) {
        self.push(SinkCall::CanPause(can));
    }

    fn set_can_play(&self, can: bool) {
        self.push(SinkCall::CanPlay(can));
    }

    fn set_can_go_prev(&self, can: bool) {
        self.push(SinkCall::CanGoPrev(can));
    }

    fn set_can_go_next(&self, can: bool) {
        self.push(SinkCall::CanGoNext(can));
    }
}
