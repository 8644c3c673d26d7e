//! Turns the rendered page into a normalized now-playing observation.

use tracing::{debug, trace};

use crate::host::PlayerSink;
use crate::model::{CapabilitySet, Observation, PlaybackStatus, TrackSnapshot};
use crate::page::{DocumentReader, ElementId, Probe};

/// Album text the UI shows before any track has been loaded.
pub const ALBUM_PLACEHOLDER: &str = "path: ";

/// Countdown child class names longer than this mean the player is paused.
pub const PAUSED_CLASS_THRESHOLD: usize = 31;

pub struct Extractor<R, S> {
    reader: R,
    sink: S,
}

impl<R: DocumentReader, S: PlayerSink> Extractor<R, S> {
    pub fn new(reader: R, sink: S) -> Self {
        Self { reader, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Read the page and build an observation without touching the sink.
    pub async fn observe(&self) -> Observation {
        let track = self.read_track().await;
        let class = self
            .reader
            .try_read(&Probe::FirstChildClass(ElementId::Countdown))
            .await;
        let heuristic = status_from_class(class.as_deref());

        let (status, capabilities) = if track.has_title() {
            (heuristic, CapabilitySet::uniform(true))
        } else {
            (PlaybackStatus::Unknown, CapabilitySet::uniform(false))
        };

        Observation {
            track,
            status,
            capabilities,
        }
    }

    /// One full tick: observe, then push track, capabilities and status to the sink.
    pub async fn tick(&self) -> Observation {
        let observation = self.observe().await;
        trace!(?observation, "tick");

        self.sink.set_track(observation.track.clone());
        let caps = observation.capabilities;
        self.sink.set_can_pause(caps.can_pause);
        self.sink.set_can_play(caps.can_play);
        self.sink.set_can_go_prev(caps.can_go_prev);
        self.sink.set_can_go_next(caps.can_go_next);
        self.sink.set_playback_state(observation.status);

        observation
    }

    async fn read_track(&self) -> TrackSnapshot {
        let artist = self.field(ElementId::Artist).await;
        let title = self.field(ElementId::Song).await;

        let album = if title.is_none() && self.is_album_placeholder().await {
            None
        } else {
            self.field(ElementId::Album).await
        };

        TrackSnapshot {
            artist,
            title,
            album,
            art_location: None,
        }
    }

    async fn field(&self, id: ElementId) -> Option<String> {
        let value = self.reader.try_read(&Probe::FirstChildText(id)).await;
        if value.is_none() {
            debug!(element = id.as_str(), "no text");
        }
        value
    }

    async fn is_album_placeholder(&self) -> bool {
        self.reader
            .try_read(&Probe::TextContent(ElementId::Album))
            .await
            .is_some_and(|t| t == ALBUM_PLACEHOLDER)
    }
}

/// Map the countdown widget's first-child class name to a playback status.
///
/// The UI swaps a short class for a longer one while paused; there is no
/// structured state to read instead.
pub fn status_from_class(class: Option<&str>) -> PlaybackStatus {
    match class {
        Some(c) if c.chars().count() > PAUSED_CLASS_THRESHOLD => PlaybackStatus::Paused,
        Some(_) => PlaybackStatus::Playing,
        None => PlaybackStatus::Unknown,
    }
}
