// src/config.rs
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "luxe.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub latency: LatencyConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_workers: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "luxe.sqlite3".to_string(),
        }
    }
}

/// Artificial delays standing in for network round-trips.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Login and registration.
    pub auth_ms: u64,
    /// Contact and forgot-password forms.
    pub form_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            auth_ms: 1000,
            form_ms: 1500,
        }
    }
}

impl LatencyConfig {
    pub fn auth(&self) -> Duration {
        Duration::from_millis(self.auth_ms)
    }

    pub fn form(&self) -> Duration {
        Duration::from_millis(self.form_ms)
    }

    /// No delays at all. Used by tests.
    pub fn none() -> Self {
        Self {
            auth_ms: 0,
            form_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive, e.g. "info" or "luxe_estates=debug".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loading order:
    /// 1. `LUXE_CONFIG` env var, else `./luxe.toml`
    /// 2. parse the file if it exists, else defaults
    /// 3. apply `LUXE_*` environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigResult<Self> {
        let path = std::env::var("LUXE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// `lookup` is injected so tests don't have to mutate the process env.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("LUXE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LUXE_PORT") {
            self.server.port = parse_env("LUXE_PORT", &port)?;
        }
        if let Some(path) = lookup("LUXE_DB_PATH") {
            self.database.path = path;
        }
        if let Some(level) = lookup("LUXE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(ms) = lookup("LUXE_AUTH_LATENCY_MS") {
            self.latency.auth_ms = parse_env("LUXE_AUTH_LATENCY_MS", &ms)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                field: "server.port",
                message: "must be non-zero".into(),
            });
        }
        if self.server.max_workers == 0 {
            return Err(ConfigError::Invalid {
                field: "server.max_workers",
                message: "must be at least 1".into(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "database.path",
                message: "must not be empty".into(),
            });
        }
        self.bind_addr()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ConfigError::Invalid {
                field: "server.host",
                message: format!("{e}"),
            })
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({} workers)",
            self.server.host, self.server.port, self.server.max_workers
        );
        info!("  database: {}", self.database.path);
        info!(
            "  latency: auth={}ms, forms={}ms",
            self.latency.auth_ms, self.latency.form_ms
        );
        info!("  logging: {}", self.logging.level);
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, raw: &str) -> ConfigResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        field: key,
        message: format!("{raw:?}: {e}"),
    })
}
