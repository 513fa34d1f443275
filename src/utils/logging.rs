use crate::paths::AppPaths;

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, prelude::*};

const LOG_ENV: &str = "STICKER_STUDIO_LOG";
const LOG_FILE_PREFIX: &str = "sticker-studio.log";

/// Keeps the non-blocking file writer flushing until the app exits.
pub struct LoggingGuards {
    _file: tracing_appender::non_blocking::WorkerGuard,
}

impl LoggingGuards {
    pub fn init(app_paths: &AppPaths) -> anyhow::Result<Self> {
        let log_dir = app_paths.log_dir();
        std::fs::create_dir_all(&log_dir).context("create log directory")?;

        // Release GUI builds on Windows have no console, so the file is the only sink there.
        let (file_writer, file_guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(
                &log_dir,
                LOG_FILE_PREFIX,
            ));

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_file(true);

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(cfg!(debug_assertions))
            .with_target(true)
            .with_line_number(true);

        let subscriber = tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_error::ErrorLayer::default())
            .with(file_layer)
            .with(stderr_layer);

        tracing::subscriber::set_global_default(subscriber)
            .context("set global tracing subscriber")?;

        install_panic_hook();

        tracing::info!(log_dir = %log_dir.display(), "Logging initialized");

        Ok(Self { _file: file_guard })
    }
}

// STICKER_STUDIO_LOG, then RUST_LOG, then trace (debug) / info (release).
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(if cfg!(debug_assertions) {
                "trace"
            } else {
                "info"
            })
        })
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Must not panic in here.
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(panic = %info, backtrace = %backtrace, "panic");
        previous(info);
    }));
}
