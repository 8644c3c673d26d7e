use std::time::Duration;
use std::{env, path::PathBuf};

use super::schema::{AddressMode, Settings};

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `VOLUMIO_BRIDGE__`)
/// over an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("VOLUMIO_BRIDGE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.poll.interval_ms == 0 {
            return Err("poll.interval_ms must be >= 1".to_string());
        }
        if self.address.mode == AddressMode::Custom && self.address.host.trim().is_empty() {
            return Err("address.host is required when address.mode = \"custom\"".to_string());
        }
        Ok(())
    }

    /// The page to open: `http://{host}:{port}` in custom mode, the default URL otherwise.
    pub fn home_url(&self) -> String {
        let a = &self.address;
        match a.mode {
            AddressMode::Custom => format!("http://{}:{}", a.host.trim(), a.port.trim()),
            AddressMode::Default => a.default_url.clone(),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll.interval_ms)
    }
}

/// Resolve the config path from `VOLUMIO_BRIDGE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("VOLUMIO_BRIDGE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/volumio-bridge/config.toml`
/// or `~/.config/volumio-bridge/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("volumio-bridge").join("config.toml"))
}
