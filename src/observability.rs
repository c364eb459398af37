//! Tracing setup for the CLI.

use std::fs::File;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file prefix.
pub const LOG_ENV: &str = "FORUMKIT_LOG";

/// Where log output goes for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogSettings {
    /// Prefix of the per-process log file.
    pub file_prefix: Option<String>,
    /// Number of `-v` flags. Zero keeps stderr free of log lines.
    pub verbosity: u8,
}

impl LogSettings {
    /// Reads the file prefix from [`LOG_ENV`]. Blank values are ignored.
    pub fn from_env(verbosity: u8) -> Self {
        Self {
            file_prefix: std::env::var(LOG_ENV)
                .ok()
                .filter(|prefix| !prefix.trim().is_empty()),
            verbosity,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file_prefix.is_some() || self.verbosity > 0
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 | 1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// `{prefix}.{timestamp}.{pid}`, so concurrent runs never share a file.
    pub fn file_path(&self, timestamp: u64, pid: u32) -> Option<PathBuf> {
        self.file_prefix
            .as_ref()
            .map(|prefix| PathBuf::from(format!("{}.{}.{}", prefix, timestamp, pid)))
    }
}

/// Installs the global subscriber described by `settings`.
///
/// Does nothing when neither a log file nor `-v` was asked for. A log file
/// that cannot be created is reported on stderr and skipped.
pub fn init_tracing(settings: &LogSettings) {
    if !settings.is_enabled() {
        return;
    }

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let file_layer = settings
        .file_path(timestamp, std::process::id())
        .and_then(|path| match File::create(&path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            ),
            Err(err) => {
                eprintln!(
                    "Warning: Failed to create log file '{}': {}",
                    path.display(),
                    err
                );
                None
            }
        });

    let stderr_layer = (settings.verbosity > 0).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directive()));

    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
}
