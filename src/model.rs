//! Canonical now-playing model shared by the extractor, the dispatcher and
//! the host shell.

mod command;

pub use command::*;

/// Now-playing metadata read from the page during one tick.
///
/// Built fresh every tick and handed to the sink by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackSnapshot {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
    /// The web UI never exposes cover art, so this stays `None`.
    pub art_location: Option<String>,
}

impl TrackSnapshot {
    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }
}

/// Best-effort playback state inferred from the page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Unknown,
    Playing,
    Paused,
}

/// Which transport commands are currently meaningful for the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    pub can_pause: bool,
    pub can_play: bool,
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl CapabilitySet {
    /// Every capability set to `enabled`.
    pub fn uniform(enabled: bool) -> Self {
        Self {
            can_pause: enabled,
            can_play: enabled,
            can_go_prev: enabled,
            can_go_next: enabled,
        }
    }

    pub fn all(&self) -> bool {
        self.can_pause && self.can_play && self.can_go_prev && self.can_go_next
    }

    pub fn none(&self) -> bool {
        !(self.can_pause || self.can_play || self.can_go_prev || self.can_go_next)
    }
}

/// Everything one tick produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub track: TrackSnapshot,
    pub status: PlaybackStatus,
    pub capabilities: CapabilitySet,
}

#[cfg(test)]
mod tests;
