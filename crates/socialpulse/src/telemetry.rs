use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default log file: `<cache dir>/socialpulse/socialpulse.log`.
///
/// `None` when the platform has no cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("socialpulse").join("socialpulse.log"))
}

/// Filter for the subscriber.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `info`.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Send all tracing output to `path`, appending.
///
/// The terminal belongs to the form while it runs, so nothing is written to
/// stdout or stderr. Parent directories are created as needed.
pub fn init_file_logging(path: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    info!(path = %path.display(), "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_forces_debug() {
        assert_eq!(log_filter(true).to_string(), "debug");
    }

    #[test]
    fn default_log_path_ends_with_log_file() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("socialpulse/socialpulse.log"));
        }
    }
}
