//! Tracing/logging initialization.
//!
//! JSON lines with timestamps, filtered through `RUST_LOG` (default `info`).

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing/logging for the process, writing to stdout.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_writer(io::stdout);
}

/// Initialize tracing/logging with a custom writer.
///
/// Interactive front-ends own the terminal, so they route logs elsewhere
/// (typically a file wrapped in a `Mutex`). Returns `false` if a global
/// subscriber was already installed.
pub fn init_with_writer<W>(writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .is_ok()
}
