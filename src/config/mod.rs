use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file '{path}': {source}")]
  Read {
    path: String,
    source: std::io::Error,
  },
  #[error("failed to parse config file '{path}': {source}")]
  Parse {
    path: String,
    source: toml::de::Error,
  },
  #[error("invalid server address '{0}'")]
  InvalidAddr(String),
}

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// Server configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// HTTP listening address
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_server_addr() -> String {
  "0.0.0.0:5000".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  ///
  /// The result is not validated; callers apply overrides first.
  pub fn from_file(path: &str) -> Result<Self, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_string(),
      source,
    })?;

    let config = Self::from_toml(&config_str).map_err(|source| ConfigError::Parse {
      path: path.to_string(),
      source,
    })?;

    Ok(config)
  }

  fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(s)
  }

  /// Check the listen address parses
  pub fn validate(&self) -> Result<(), ConfigError> {
    self
      .server_addr
      .parse::<SocketAddr>()
      .map(|_| ())
      .map_err(|_| ConfigError::InvalidAddr(self.server_addr.clone()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.server_addr, "0.0.0.0:5000");
    assert_eq!(config.log.level, "info");
    assert!(config.log.file.is_none());
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_parse_config() {
    let config_str = r#"
server_addr = "127.0.0.1:8080"

[log]
file = "/tmp/playerscore.log"
level = "debug"
"#;

    let config = Config::from_toml(config_str).unwrap();
    assert_eq!(config.server_addr, "127.0.0.1:8080");
    assert_eq!(config.log.file.as_deref(), Some("/tmp/playerscore.log"));
    assert_eq!(config.log.level, "debug");
  }

  #[test]
  fn test_empty_config_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_invalid_addr() {
    let config = Config {
      server_addr: "not-an-address".to_string(),
      ..Config::default()
    };
    assert!(matches!(
      config.validate(),
      Err(ConfigError::InvalidAddr(addr)) if addr == "not-an-address"
    ));
  }

  #[test]
  fn test_missing_file() {
    let err = Config::from_file("/nonexistent/playerscore.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
  }

  #[test]
  fn test_from_file() {
    let path = std::env::temp_dir().join(format!("playerscore-{}.toml", std::process::id()));
    fs::write(&path, "server_addr = \"127.0.0.1:9000\"\n").unwrap();

    let config = Config::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.server_addr, "127.0.0.1:9000");
    assert_eq!(config.log, LogConfig::default());

    fs::remove_file(path).unwrap();
  }
}
