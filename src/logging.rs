//! File logging via `tracing-subscriber`.
//!
//! The terminal belongs to the TUI, so events go to a log file instead of
//! stderr. `SCRIBBLE_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::LogError;

pub const LOG_ENV: &str = "SCRIBBLE_LOG";

/// Raise the configured level by one step per `-v`.
pub fn effective_level(base: &str, verbosity: u8) -> String {
    const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

    let base = base.trim().to_ascii_lowercase();
    match LEVELS.iter().position(|l| *l == base) {
        Some(idx) => LEVELS[(idx + verbosity as usize).min(LEVELS.len() - 1)].to_string(),
        // Not a bare level (e.g. "scribble=debug"); leave directives alone.
        None => base,
    }
}

fn build_filter(directive: &str) -> Result<EnvFilter, LogError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    EnvFilter::try_new(directive).map_err(|err| LogError::Filter {
        directive: directive.to_string(),
        reason: err.to_string(),
    })
}

/// Install the global subscriber, appending to `path`.
pub fn init_logging(path: &Path, directive: &str) -> Result<(), LogError> {
    let filter = build_filter(directive)?;

    let open_err = |source| LogError::Open {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)
}
