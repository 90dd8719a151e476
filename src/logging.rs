//! Logger initialization
//!
//! Uses the `log` facade with `env_logger`. The TUI owns the terminal, so in
//! interactive mode records go to a file instead of stderr.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Filter applied when neither the caller nor `RUST_LOG` sets one
pub const DEFAULT_FILTER: &str = "warn";

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "showdetail=debug").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub target: LogTarget,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            target: LogTarget::Stderr,
        }
    }
}

/// Default log file for TUI sessions (~/.cache/showdetail/showdetail.log)
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("showdetail").join("showdetail.log"))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(DEFAULT_FILTER);
        }

        match &config.target {
            LogTarget::Stderr => {
                builder.target(env_logger::Target::Stderr);
            }
            LogTarget::File(path) => match open_log_file(path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(_) => {
                    // No writable log file: stay silent rather than draw over the TUI
                    builder.filter_level(log::LevelFilter::Off);
                }
            },
        }

        if builder.try_init().is_ok() {
            log::debug!("logging initialized ({:?})", config.target);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert!(config.filter.is_none());
        assert_eq!(config.target, LogTarget::Stderr);
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let path = std::env::temp_dir()
            .join(format!("showdetail-log-{}", std::process::id()))
            .join("nested")
            .join("test.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            filter: Some("debug".to_string()),
            target: LogTarget::Stderr,
        });
    }
}
