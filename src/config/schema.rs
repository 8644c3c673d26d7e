use std::path::PathBuf;

use serde::Deserialize;

/// Top-level bridge settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/volumio-bridge/config.toml` or
/// `~/.config/volumio-bridge/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VOLUMIO_BRIDGE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub address: AddressSettings,
    pub poll: PollSettings,
    pub browser: BrowserSettings,
    pub mpris: MprisSettings,
}

/// Where the Volumio web UI lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AddressSettings {
    pub mode: AddressMode,
    /// Host used in `custom` mode.
    pub host: String,
    /// Port used in `custom` mode.
    pub port: String,
    /// Address used in `default` mode.
    pub default_url: String,
}

impl Default for AddressSettings {
    fn default() -> Self {
        Self {
            mode: AddressMode::Default,
            host: String::new(),
            port: String::new(),
            default_url: "http://volumio:80/".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressMode {
    #[default]
    #[serde(alias = "use-default")]
    Default,
    #[serde(alias = "use-custom")]
    Custom,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollSettings {
    /// Delay between the end of one page read and the start of the next (milliseconds).
    pub interval_ms: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self { interval_ms: 500 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Run Chromium without a window.
    pub headless: bool,
    /// Chromium binary; searched on `PATH` when unset.
    pub executable: Option<PathBuf>,
    /// Pass `--no-sandbox` (needed in some containers).
    pub no_sandbox: bool,
    /// How long to wait for the page to become interactive (milliseconds).
    pub ready_timeout_ms: u64,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            executable: None,
            no_sandbox: false,
            ready_timeout_ms: 30_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MprisSettings {
    /// Appended to `org.mpris.MediaPlayer2.` to form the bus name.
    pub bus_name_suffix: String,
    /// Name media-control applets show for this player.
    pub identity: String,
}

impl Default for MprisSettings {
    fn default() -> Self {
        Self {
            bus_name_suffix: "volumio".to_string(),
            identity: "Volumio".to_string(),
        }
    }
}
