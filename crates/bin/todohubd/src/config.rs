//! Daemon settings.
//!
//! Settings come from three layers, last one wins: built-in defaults, an
//! optional TOML file (`todohub.toml`, or the path in `TODOHUB_CONFIG`), and
//! `TODOHUB_*` environment variables.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8080"
//!
//! [database]
//! url = "sqlite:todohub.db?mode=rwc"
//!
//! [logging]
//! filter = "info"
//! directory = "logs"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "todohub.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub bind: SocketAddr,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlx` `SQLite` URL; `mode=rwc` creates the file on first start.
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive for the console output.
    pub filter: String,
    /// Directory receiving the daily-rotated log files. `None` disables
    /// the file output.
    pub directory: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:todohub.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,tower_http=debug".to_string(),
            directory: Some(PathBuf::from("logs")),
        }
    }
}

impl Config {
    /// Resolve the settings of this process.
    ///
    /// # Errors
    ///
    /// Fails when the config file cannot be read or parsed, when an
    /// environment override is malformed, or when the result is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("TODOHUB_CONFIG")
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

        let mut config = Self::read(&path)?;
        config.merge_env(|key| std::env::var(key).ok())?;
        config.check()?;
        Ok(config)
    }

    /// Parse the file at `path`; a missing file yields the defaults.
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn merge_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(value) = var("TODOHUB_BIND") {
            self.server.bind = value.parse().map_err(|_| ConfigError::Env {
                key: "TODOHUB_BIND",
                value,
            })?;
        }
        if let Some(value) = var("TODOHUB_DATABASE_URL") {
            self.database.url = value;
        }
        // RUST_LOG is the conventional knob and wins over TODOHUB_LOG.
        if let Some(value) = var("RUST_LOG").or_else(|| var("TODOHUB_LOG")) {
            self.logging.filter = value;
        }
        if let Some(value) = var("TODOHUB_LOG_DIR") {
            self.logging.directory = (!value.is_empty()).then(|| PathBuf::from(value));
        }
        Ok(())
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.server.bind.port() == 0 {
            return Err(ConfigError::Invalid("server.bind needs an explicit port"));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url is empty"));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{key}={value:?} is not valid")]
    Env { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn should_listen_on_port_3000_and_log_to_files_by_default() {
        let config = Config::default();
        assert_eq!(config.server.bind.to_string(), "0.0.0.0:3000");
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
        assert!(config.check().is_ok());
    }

    #[test]
    fn should_keep_defaults_for_sections_missing_from_file() {
        let config: Config = toml::from_str("[database]\nurl = 'sqlite::memory:'").unwrap();
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.server.bind.port(), 3000);
        assert_eq!(config.logging.filter, LoggingConfig::default().filter);
    }

    #[test]
    fn should_read_every_section_from_toml() {
        let config: Config = toml::from_str(
            "
            [server]
            bind = '127.0.0.1:9090'

            [logging]
            filter = 'debug'
            directory = '/var/log/todohub'
            ",
        )
        .unwrap();
        assert_eq!(config.server.bind.to_string(), "127.0.0.1:9090");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(
            config.logging.directory,
            Some(PathBuf::from("/var/log/todohub"))
        );
    }

    #[test]
    fn should_reject_bind_without_port_in_file() {
        assert!(toml::from_str::<Config>("[server]\nbind = 'localhost'").is_err());
    }

    #[test]
    fn should_fall_back_to_defaults_when_file_is_absent() {
        let config = Config::read(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.database.url, DatabaseConfig::default().url);
    }

    #[test]
    fn should_let_environment_win_over_file() {
        let mut config = Config::default();
        config
            .merge_env(vars(&[
                ("TODOHUB_BIND", "127.0.0.1:8080"),
                ("TODOHUB_DATABASE_URL", "sqlite::memory:"),
                ("TODOHUB_LOG", "warn"),
                ("RUST_LOG", "trace"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_report_malformed_bind_override() {
        let mut config = Config::default();
        let err = config
            .merge_env(vars(&[("TODOHUB_BIND", "nowhere")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { key: "TODOHUB_BIND", .. }));
    }

    #[test]
    fn should_disable_file_logging_with_empty_directory_override() {
        let mut config = Config::default();
        config.merge_env(vars(&[("TODOHUB_LOG_DIR", "")])).unwrap();
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn should_reject_unusable_settings() {
        let mut config = Config::default();
        config.server.bind.set_port(0);
        assert!(matches!(config.check(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.database.url = "  ".to_string();
        assert!(matches!(config.check(), Err(ConfigError::Invalid(_))));
    }
}
