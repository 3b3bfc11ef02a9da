use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{prelude::*, EnvFilter};

pub fn setup_console_log() {
    let console_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(io::stdout)
        .boxed();

    _ = tracing_subscriber::registry()
        .with(vec![console_log])
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Console logging plus a daily rolling file under `log_dir`.
///
/// The returned guard flushes the file writer on drop, keep it alive for the
/// lifetime of the process.
pub fn setup_log(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let Some(log_dir) = log_dir else {
        setup_console_log();
        return None;
    };

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, "clanmark.log"));

    let console_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(io::stdout)
        .boxed();
    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .boxed();

    _ = tracing_subscriber::registry()
        .with(vec![console_log, file_log])
        .with(EnvFilter::from_default_env())
        .try_init();

    Some(guard)
}
