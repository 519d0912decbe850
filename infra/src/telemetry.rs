//! Tracing bootstrap for hosts embedding the verification flow

use tracing_subscriber::EnvFilter;

use vw_shared::config::environment::{Environment, LogFormat, LoggingConfig};

/// Install the global tracing subscriber per the given logging config
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call more
/// than once; later calls leave the first subscriber in place.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    if result.is_err() {
        tracing::debug!(event = "tracing_already_initialized", "Subscriber already installed");
    }
}

/// Install the tracing subscriber appropriate for the detected environment
pub fn init_tracing_from_env() {
    let environment = Environment::from_env();
    init_tracing(&LoggingConfig::for_environment(environment));
}
