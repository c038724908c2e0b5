//! Logging setup for tally
//!
//! Events are written to a log file under the data directory; stdout and
//! stderr belong to the terminal UI while it is running.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::TallyPaths;
use crate::error::{TallyError, TallyResult};

static INIT: Once = Once::new();

/// Initialize tracing with a file writer
///
/// Only the first call installs the subscriber; later calls are no-ops.
/// The default level is `info`, overridable through `RUST_LOG`.
pub fn init(paths: &TallyPaths) -> TallyResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| TallyError::Io(format!("Failed to open log file: {}", e)))?;

    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();

        tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    });

    Ok(())
}
