//! Tracing subscriber setup. Logs go to stdout; when `LOG_DIR` is set a
//! daily-rolling file sink is added (bounded by `LOG_MAX_FILES`).

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{time::ChronoLocal, writer::MakeWriterExt},
};

/// Keeps the non-blocking writer alive so buffered logs flush on shutdown.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false);

    match env::var("LOG_DIR") {
        Ok(dir) => {
            let file_appender = rolling_appender(&dir);
            let (file_writer, guard) = non_blocking(file_appender);
            LOG_GUARD.set(guard).expect("LOG_GUARD already set");

            let stdout = std::io::stdout.with_max_level(tracing::Level::INFO);
            builder.with_writer(stdout.and(file_writer)).init();
        }
        Err(_) => builder.init(),
    }

    tracing::info!("logger initialized");
}

fn rolling_appender(dir: &str) -> RollingFileAppender {
    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("riftview.log");

    if let Some(n) = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
    {
        builder = builder.max_log_files(n);
    }

    builder.build(dir).expect("failed to create log file")
}
