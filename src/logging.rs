//! Tracing setup
//!
//! Console commands log to stderr. The TUI owns the terminal, so it only logs
//! when a log file is given.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Silent,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// `RUST_LOG` controls the level, defaulting to `warn`. A log file, when
/// given, takes precedence over `target`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(target: LogTarget, log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter())
            .init();
        tracing::info!(path = %path.display(), "logging initialized");
        return Ok(());
    }

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter())
            .init(),
        // Keep the screen clean rather than writing over the terminal UI
        LogTarget::Silent => tracing_subscriber::registry().with(env_filter()).init(),
    }

    Ok(())
}
