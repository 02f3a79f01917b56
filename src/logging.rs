use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::CONFIG;

/// Installs the global tracing subscriber: a stdout layer plus a daily
/// rolling file under the configured log directory. Intended for binary
/// hosts; embedding applications that install their own subscriber
/// should skip this.
pub fn init() -> anyhow::Result<()> {
    let cfg = &CONFIG.logging;
    let stdout_filter = cfg
        .stdout_level
        .parse::<tracing_subscriber::filter::LevelFilter>()?;
    let file_filter = cfg
        .file_level
        .parse::<tracing_subscriber::filter::LevelFilter>()?;

    let file_appender = tracing_appender::rolling::daily(&cfg.log_dir, "lensify.log");

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_filter(stdout_filter))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(file_appender)
                .with_filter(file_filter),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive("lensify=debug".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
