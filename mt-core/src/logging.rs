//! Structured logging setup using the `tracing` ecosystem.
//!
//! Console output goes to stderr; a daily-rotated file under the configured
//! log directory receives the same events, optionally as JSON lines.

use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::MtResult;

/// File name prefix for rotated log files.
const LOG_FILE_PREFIX: &str = "mt-data-api.log";

/// Noisy dependency targets capped below the requested level.
const QUIET_TARGETS: &[&str] = &["hyper=warn", "reqwest=info", "rustls=warn"];

/// Build the filter for `level`, falling back to `info` on a bad directive.
///
/// `RUST_LOG` takes precedence when set.
fn build_filter(level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let mut filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    for directive in QUIET_TARGETS {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }
    filter
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `level` - Log level string: "trace", "debug", "info", "warn", "error"
/// * `log_dir` - Directory for log files, created if missing
/// * `json_output` - If true, the file layer writes JSON lines
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> MtResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(console_layer);

    if json_output {
        registry
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!("logging initialized at level={level}, dir={}", log_dir.display());

    Ok(LogGuard { _guard: guard })
}

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Initialize a console-only logger for tests or one-shot tools.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logging_is_idempotent() {
        init_console_logging("debug");
        init_console_logging("trace");
    }

    #[test]
    fn test_bad_level_falls_back() {
        // Must not panic on garbage input.
        let _ = build_filter("not a level ===");
    }
}
