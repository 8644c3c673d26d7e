use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_io::block_on;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};
use zbus::{Connection, ObjectServer, interface};
use zvariant::{ObjectPath, OwnedValue, Value};

use crate::config::MprisSettings;
use crate::host::PlayerSink;
use crate::model::{
    CapabilitySet, HostAction, PlaybackStatus, QUIT_ACTION, TrackSnapshot, TransportCommand,
};

const MPRIS_PATH: &str = "/org/mpris/MediaPlayer2";
const NO_TRACK: &str = "/org/mpris/MediaPlayer2/TrackList/NoTrack";

/// Which player property needs a `PropertiesChanged` signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Change {
    Metadata,
    Playback,
    CanPause,
    CanPlay,
    CanGoPrev,
    CanGoNext,
}

#[derive(Debug, Default)]
struct SharedState {
    playback: PlaybackStatus,
    track: TrackSnapshot,
    /// Bumped whenever a new titled track shows up; feeds `mpris:trackid`.
    track_serial: u64,
    caps: CapabilitySet,
}

/// Host-side sink. Only real changes reach the bus, so the extractor can push
/// the same state every tick.
pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
    notify: UnboundedSender<Change>,
}

impl MprisHandle {
    fn update(&self, change: Change, apply: impl FnOnce(&mut SharedState) -> bool) {
        let changed = match self.state.lock() {
            Ok(mut s) => apply(&mut s),
            Err(_) => false,
        };
        if changed {
            // The receiver is gone when the bus never came up; nothing to signal then.
            let _ = self.notify.send(change);
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl PlayerSink for MprisHandle {
    fn set_track(&self, track: TrackSnapshot) {
        self.update(Change::Metadata, |s| {
            if s.track == track {
                return false;
            }
            if track.has_title() {
                s.track_serial += 1;
            }
            s.track = track;
            true
        });
    }

    fn set_playback_state(&self, status: PlaybackStatus) {
        self.update(Change::Playback, |s| replace(&mut s.playback, status));
    }

    fn set_can_pause(&self, can: bool) {
        self.update(Change::CanPause, |s| replace(&mut s.caps.can_pause, can));
    }

    fn set_can_play(&self, can: bool) {
        self.update(Change::CanPlay, |s| replace(&mut s.caps.can_play, can));
    }

    fn set_can_go_prev(&self, can: bool) {
        self.update(Change::CanGoPrev, |s| replace(&mut s.caps.can_go_prev, can));
    }

    fn set_can_go_next(&self, can: bool) {
        self.update(Change::CanGoNext, |s| replace(&mut s.caps.can_go_next, can));
    }
}

struct RootIface {
    tx: UnboundedSender<HostAction>,
    identity: String,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // The page lives in a headless browser; nothing to raise.
    }

    fn quit(&self) {
        let _ = self.tx.send(HostAction::new(QUIT_ACTION));
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        &self.identity
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: UnboundedSender<HostAction>,
    state: Arc<Mutex<SharedState>>,
}

impl PlayerIface {
    fn send(&self, cmd: TransportCommand) {
        let _ = self.tx.send(cmd.into());
    }

    fn caps(&self) -> CapabilitySet {
        self.state.lock().map(|s| s.caps).unwrap_or_default()
    }
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        self.send(TransportCommand::Next);
    }

    fn previous(&self) {
        self.send(TransportCommand::Prev);
    }

    fn play(&self) {
        self.send(TransportCommand::Play);
    }

    fn pause(&self) {
        self.send(TransportCommand::Pause);
    }

    fn play_pause(&self) {
        self.send(TransportCommand::TogglePlay);
    }

    fn stop(&self) {
        self.send(TransportCommand::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            PlaybackStatus::Unknown => "Stopped",
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        self.caps().can_play
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        self.caps().can_pause
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        self.caps().can_go_next
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        self.caps().can_go_prev
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        match self.state.lock() {
            Ok(s) => metadata_map(&s),
            Err(_) => HashMap::new(),
        }
    }
}

fn owned(value: Value<'_>) -> Option<OwnedValue> {
    OwnedValue::try_from(value).ok()
}

fn metadata_map(s: &SharedState) -> HashMap<String, OwnedValue> {
    let mut map = HashMap::new();

    let track_id = if s.track.has_title() {
        format!("{MPRIS_PATH}/track/{}", s.track_serial)
    } else {
        NO_TRACK.to_string()
    };
    if let Some(v) = ObjectPath::try_from(track_id).ok().and_then(|p| owned(Value::from(p))) {
        map.insert("mpris:trackid".to_string(), v);
    }

    let t = &s.track;
    let entries = [
        ("xesam:title", t.title.clone().map(Value::from)),
        ("xesam:artist", t.artist.clone().map(|a| Value::from(vec![a]))),
        ("xesam:album", t.album.clone().map(Value::from)),
        ("mpris:artUrl", t.art_location.clone().map(Value::from)),
    ];
    for (key, value) in entries {
        if let Some(v) = value.and_then(owned) {
            map.insert(key.to_string(), v);
        }
    }
    map
}

async fn emit_change(server: &ObjectServer, change: Change) -> zbus::Result<()> {
    let iface_ref = server.interface::<_, PlayerIface>(MPRIS_PATH).await?;
    let iface = iface_ref.get().await;
    let emitter = iface_ref.signal_emitter();
    match change {
        Change::Metadata => iface.metadata_changed(emitter).await,
        Change::Playback => iface.playback_status_changed(emitter).await,
        Change::CanPause => iface.can_pause_changed(emitter).await,
        Change::CanPlay => iface.can_play_changed(emitter).await,
        Change::CanGoPrev => iface.can_go_previous_changed(emitter).await,
        Change::CanGoNext => iface.can_go_next_changed(emitter).await,
    }
}

async fn serve(
    settings: MprisSettings,
    tx: UnboundedSender<HostAction>,
    state: Arc<Mutex<SharedState>>,
    mut notify_rx: UnboundedReceiver<Change>,
) -> zbus::Result<()> {
    let connection = Connection::session().await?;
    let name = format!("org.mpris.MediaPlayer2.{}", settings.bus_name_suffix);
    connection.request_name(name.as_str()).await?;

    let object_server = connection.object_server();
    object_server
        .at(
            MPRIS_PATH,
            RootIface {
                tx: tx.clone(),
                identity: settings.identity,
            },
        )
        .await?;
    object_server.at(MPRIS_PATH, PlayerIface { tx, state }).await?;
    info!(name = %name, "MPRIS service registered");

    // Runs until the handle is dropped.
    while let Some(change) = notify_rx.recv().await {
        if let Err(e) = emit_change(object_server, change).await {
            debug!(?change, "failed to emit property change: {e}");
        }
    }
    Ok(())
}

/// Start the MPRIS service on its own thread. Host actions arrive on `tx`.
pub fn spawn_mpris(tx: UnboundedSender<HostAction>, settings: &MprisSettings) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (notify_tx, notify_rx) = mpsc::unbounded_channel();

    let state_for_thread = state.clone();
    let settings = settings.clone();
    std::thread::spawn(move || {
        if let Err(e) = block_on(serve(settings, tx, state_for_thread, notify_rx)) {
            error!("MPRIS: {e}");
        }
    });

    MprisHandle {
        state,
        notify: notify_tx,
    }
}
