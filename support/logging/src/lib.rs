#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging utilities for the wallet RPC client.
//!
//! Library crates emit `tracing` events; applications embedding the client
//! call [`init`] once to install a subscriber driven by [`LoggingConfig`].

use std::fs::OpenOptions;
use std::sync::Mutex;

use config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log filter '{0}': {1}")]
    Filter(String, String),
    /// The configured log file could not be opened.
    #[error("Failed to open log file: {0}")]
    File(#[from] std::io::Error),
    /// A global subscriber is already installed.
    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Emits a trace event tagged with a module prefix.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!(module = module, "{}", msg);
}

/// Builds the filter for `level`, e.g. `info` or `walletrpc_http=trace,warn`.
pub fn filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|e| LoggingError::Filter(level.to_string(), e.to_string()))
}

/// Installs a global fmt subscriber for `config`.
///
/// Events go to the configured file (appended, no ANSI colours) or stderr.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = filter(&config.level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| LoggingError::Install(e.to_string()))
}
