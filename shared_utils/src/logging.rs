//! Logging Module
//!
//! Tracing-based logging: human output stays on the terminal, structured
//! records go to a daily-rotating file in the log directory.
//!
//! # Examples
//!
//! ```no_run
//! use shared_utils::logging::{init_logging, LogConfig};
//! use tracing::info;
//!
//! init_logging("img_heic", LogConfig::default()).expect("Failed to initialize logging");
//! info!("Program started");
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory (defaults to the system temp directory)
    pub log_dir: PathBuf,
    /// Log level, defaults to Info
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: std::env::temp_dir(),
            level: Level::INFO,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.log_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

/// Initialize the tracing subscriber.
///
/// Log file name: `{program_name}.log`, rotated daily. Respects
/// `RUST_LOG` when set; falls back to the configured level otherwise.
/// Fails if called twice in one process.
pub fn init_logging(program_name: &str, config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;

    let log_file_name = format!("{}.log", program_name);
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, &log_file_name);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", program_name, config.level)));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;

    tracing::info!(
        program = program_name,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new()
            .with_log_dir("/tmp/img_heic_logs")
            .with_level(Level::DEBUG);

        assert_eq!(config.log_dir, PathBuf::from("/tmp/img_heic_logs"));
        assert_eq!(config.level, Level::DEBUG);
    }

    #[test]
    fn test_log_config_default_dir() {
        let config = LogConfig::default();
        assert_eq!(config.log_dir, std::env::temp_dir());
        assert_eq!(config.level, Level::INFO);
    }
}
