//! Subscriber setup for `rtermd`.
//!
//! `RUST_LOG` wins over the configured level. Console output is compact
//! text or JSON; a daily-rolling file is added when a log directory is
//! configured. Keep the returned guard alive for the life of the process
//! or buffered file output is lost.

use anyhow::Context as _;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

pub const LOG_FILE_PREFIX: &str = "rtermd.log";

pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = build_filter(&config.level);

    let (json_layer, compact_layer) = if config.json {
        (Some(fmt::layer().json().with_current_span(false)), None)
    } else {
        (None, Some(fmt::layer().compact()))
    };

    let (file_layer, guard) = match &config.file_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn bad_level_falls_back_to_info() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter("rterm_core=loudest");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    #[serial]
    fn configured_level_is_used() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter("rterm_core=debug");
        assert_eq!(filter.to_string(), "rterm_core=debug");
    }
}
