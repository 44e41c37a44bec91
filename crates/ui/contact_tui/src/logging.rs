use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{self, LoggingConfig};

pub const LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

/// Log to `<data dir>/contact_tui.log`; the terminal belongs to the UI.
///
/// The returned guard flushes the writer on drop and has to outlive the
/// program's work.
pub fn init(cfg: &LoggingConfig) -> Result<WorkerGuard> {
    let directory = config::ensure_data_dir_exists()?;
    let file_appender = tracing_appender::rolling::never(&directory, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)?,
    };

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(guard)
}
