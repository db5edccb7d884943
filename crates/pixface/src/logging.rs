//! Logger setup.
//!
//! The terminal belongs to the face, so log records go to a file in the
//! platform cache directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Once;

use color_eyre::eyre::WrapErr;

const LOG_FILE: &str = "pixface.log";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "pixface=debug,pixface_render=warn"). `RUST_LOG` takes precedence.
#[derive(Debug, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    /// Destination for log records. Logging stays off without one.
    pub target: Option<File>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let Some(file) = config.target else {
            return;
        };

        let mut builder = env_logger::Builder::new();
        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

/// Default log file location.
pub fn default_log_path() -> color_eyre::Result<PathBuf> {
    let dirs = pixface_config::project_dirs()?;
    Ok(dirs.cache_dir().join(LOG_FILE))
}

/// Open `path` for appending, creating it and its directory if needed.
pub fn open_log_file(path: &Path) -> color_eyre::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}
