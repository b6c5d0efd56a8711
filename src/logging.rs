//! Log setup. Output goes to a file because the terminal belongs to the UI.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::QuizError;

const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber writing to `path`, filtered by `RUST_LOG`.
pub fn init(path: &Path) -> Result<(), QuizError> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(QuizError::Logging)?;

    tracing::info!(log_file = %path.display(), "logging initialised");
    Ok(())
}
