//! Tracing and logging (shared setup).

/// Initialize process-wide observability, logging to stdout.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers, writers).
pub mod tracing;

pub use self::tracing::init_with_writer;
