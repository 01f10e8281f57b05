use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes tracing with a console layer and a daily-rotated JSON file
/// log under `logs/`. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "normalizer.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::from_default_env()
        .add_directive("transit_normalizer=info".parse().expect("default log directive"));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stdout))
        .try_init()
        .is_ok();

    if initialized {
        // Keep the guard alive so buffered log lines are flushed on exit.
        std::mem::forget(guard);
    }
}
