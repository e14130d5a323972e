//! Tracing subscriber setup.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "goap-sim.log";

/// Keeps the file writer alive; drop it only at shutdown.
#[must_use = "dropping the guard stops the file log"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Installs logging to stderr and, if `log_dir` is given, to
/// `<log_dir>/goap-sim.log`.
///
/// Filtering comes from `RUST_LOG`; `info` applies when it is unset.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<LogGuard> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_env_filter(directives.as_deref());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, file_guard) = match log_dir {
        Some(dir) => {
            let dir = prepare_log_dir(dir)?;
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}", dir.join(LOG_FILE_NAME).display());
    }

    Ok(LogGuard { _file: file_guard })
}

/// Parses `RUST_LOG`-style directives, defaulting to `info` when none are given.
///
/// Invalid directives are dropped rather than failing startup.
pub fn build_env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Creates the log directory if needed and returns it.
pub fn prepare_log_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn with_filter<T>(directives: Option<&str>, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(build_env_filter(directives));
        tracing::subscriber::with_default(subscriber, f)
    }

    #[test]
    fn rust_log_debug_enables_debug_events() {
        let enabled = with_filter(Some("debug"), || tracing::enabled!(Level::DEBUG));
        assert!(enabled);
    }

    #[test]
    fn target_directive_enables_core_debug() {
        let enabled = with_filter(Some("goap_core=debug"), || {
            tracing::enabled!(target: "goap_core::agent", Level::DEBUG)
        });
        assert!(enabled);
    }

    #[test]
    fn defaults_to_info_without_directives() {
        let info = with_filter(None, || tracing::enabled!(Level::INFO));
        let debug = with_filter(None, || tracing::enabled!(Level::DEBUG));
        let empty_debug = with_filter(Some(""), || tracing::enabled!(Level::DEBUG));

        assert!(info);
        assert!(!debug);
        assert!(!empty_debug);
    }

    #[test]
    fn prepare_creates_nested_directories() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("logs").join("run");

        let dir = prepare_log_dir(&nested).unwrap();

        assert_eq!(dir, nested);
        assert!(nested.is_dir());
    }

    #[test]
    fn prepare_accepts_existing_directory() {
        let root = tempfile::tempdir().unwrap();
        assert!(prepare_log_dir(root.path()).is_ok());
    }
}
