//! Logging setup using simplelog
//!
//! By default warnings and errors go to stderr, keeping stdout free for the
//! rendered HTML. With `--debug-log` everything is written to a timestamped
//! file instead:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/nbdiff/ on Linux)

use anyhow::{Context, Result};
use simplelog::{Config, ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the debug log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("nbdiff-debug-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        notebook_diff_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Level from `RUST_LOG`, or `default` when unset or not a plain level name
fn level_from_env(default: LevelFilter) -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(default)
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn timestamped_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build()
}

/// Initialize logging
///
/// Returns the path of the debug log file when one was created.
pub fn init(debug_log: bool) -> Result<Option<PathBuf>> {
    if debug_log {
        let log_file = log_file_path();
        let file = File::create(&log_file)
            .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
        WriteLogger::init(level_from_env(LevelFilter::Debug), timestamped_config(), file)
            .context("Failed to initialize logger")?;
        return Ok(Some(log_file));
    }

    WriteLogger::init(
        level_from_env(LevelFilter::Warn),
        timestamped_config(),
        std::io::stderr(),
    )
    .context("Failed to initialize logger")?;
    Ok(None)
}
