use std::{
    fs, io,
    net::{SocketAddr, ToSocketAddrs},
    path::Path,
};

use serde::Deserialize;
use thiserror::Error;

const SETTINGS_FILENAME: &str = "settings.json";

/// `database_path` value that selects the in-process store.
pub const MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_path: String,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("cannot parse JSON content from file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 5000,
            database_path: "tasks.redb".to_string(),
        }
    }
}

impl Settings {
    /// `settings.json` from the working directory (optional), then `HOST`,
    /// `PORT` and `DATABASE_PATH` from the environment.
    pub fn load() -> Result<Settings, SettingsError> {
        Self::load_from(Path::new(SETTINGS_FILENAME), |key| std::env::var(key).ok())
    }

    pub fn load_from(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Settings, SettingsError> {
        let settings = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.display().to_string(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        settings.with_overrides(env)
    }

    fn with_overrides(mut self, env: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        if let Some(host) = env("HOST") {
            self.tcp_socket_binding = host;
        }
        if let Some(port) = env("PORT") {
            self.tcp_socket_port = port
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidValue { key: "PORT", value: port })?;
        }
        if let Some(path) = env("DATABASE_PATH") {
            self.database_path = path;
        }
        Ok(self)
    }

    /// The address to listen on. `tcp_socket_binding` may be an IP literal
    /// or a host name; names resolve to their first address.
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        (self.tcp_socket_binding.as_str(), self.tcp_socket_port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| SettingsError::InvalidValue {
                key: "HOST",
                value: self.tcp_socket_binding.clone(),
            })
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }
}
