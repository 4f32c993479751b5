//! Structured logging setup.
//!
//! Dual-mode: human-readable console output for interactive use, JSONL for
//! agent/automation workflows. stdout is reserved for command payloads; all
//! log output goes to stderr.

use tracing_subscriber::{fmt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Initialize the global tracing subscriber.
///
/// Respects `TP_LOG` (env-filter syntax) when set; otherwise derives the
/// level from `verbosity` (0 = warn, 1 = info, 2 = debug, 3+ = trace).
/// Calling twice is a no-op error we swallow: tests may race to install.
pub fn init_logging(format: LogFormat, verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("TP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    // Already-initialized is fine.
    let _ = result;
}
