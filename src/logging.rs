use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var holding a log file path; overrides `logging.file`.
pub const LOG_FILE_ENV: &str = "SHOPPING_LIST_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless a file is configured: the TUI owns the
/// terminal, so nothing may be written to stdout or stderr while it runs.
/// `RUST_LOG` takes precedence over `logging.level`.
///
/// Returns the path actually written to.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let base = std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .or_else(|| config.file.clone())?;

    let path = unique_log_path(&base);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}",
                path.display(),
                err
            );
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    Some(path)
}

/// `{base}.{timestamp}.{pid}`, so concurrent instances never share a file.
fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
