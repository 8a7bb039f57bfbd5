mod config;
mod http;
mod league;
mod server;
mod store;

use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use config::{Config, LogConfig};
use server::Server;
use store::InMemoryPlayerStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Player score tracking HTTP server
#[derive(Debug, Parser)]
#[command(name = "playerscore", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Listen address, overrides the config file
    #[arg(short, long)]
    addr: Option<String>,

    /// Log level, overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(addr) = &self.addr {
            config.server_addr = addr.clone();
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn log_filter(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log level '{}'", level))
}

fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => log_filter(&log.level)?,
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.init(),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    init_logging(&config.log)?;

    info!("Starting playerscore");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(InMemoryPlayerStore::new());
    let server = Server::bind(&config.server_addr, store)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;
    info!("Server listening on: {}", server.local_addr());

    server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["playerscore"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["playerscore", "--addr", "127.0.0.1:7000", "-l", "debug"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:7000");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_cli_addr_overrides_bad_file_addr() {
        let path = std::env::temp_dir().join(format!("playerscore-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "server_addr = \"not-an-address\"\n").unwrap();

        let cli = Cli::parse_from([
            "playerscore",
            "-c",
            path.to_str().unwrap(),
            "--addr",
            "127.0.0.1:7000",
        ]);
        let config = cli.load_config();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().server_addr, "127.0.0.1:7000");
    }

    #[test]
    fn test_bad_file_addr_without_override_is_rejected() {
        let path = std::env::temp_dir().join(format!("playerscore-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "server_addr = \"not-an-address\"\n").unwrap();

        let cli = Cli::parse_from(["playerscore", "-c", path.to_str().unwrap()]);
        let config = cli.load_config();
        std::fs::remove_file(&path).unwrap();

        assert!(config.is_err());
    }

    #[test]
    fn test_log_filter_rejects_bad_level() {
        assert!(log_filter("debug").is_ok());
        assert!(log_filter("playerscore=debug").is_ok());
        assert!(log_filter("playerscore=loud").is_err());
    }

    #[test]
    fn test_cli_rejects_bad_addr() {
        let cli = Cli::parse_from(["playerscore", "--addr", "nowhere"]);
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_cli_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
