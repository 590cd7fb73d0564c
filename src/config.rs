use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `config.yaml` in the working directory when
    /// present, otherwise from the `LISTEN` environment variable, otherwise
    /// the default address.
    pub fn load() -> Self {
        Self::load_from(Path::new("config.yaml"))
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(raw) = std::fs::read_to_string(path) {
            match serde_yaml::from_str(&raw) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config file {}: {}", path.display(), e);
                }
            }
        }

        let listen_addr =
            std::env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        Self { listen_addr }
    }
}
