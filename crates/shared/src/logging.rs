use std::env;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` (default `info`). Set
/// `LOG_FORMAT=json` for machine-readable output.
pub fn configure_logging() -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_new(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stdout);

    let result = if env::var("LOG_FORMAT").as_deref() == Ok("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        // A second init (e.g. from tests) is not fatal.
        warn!("Failed to initialize logging: {}", e);
    }

    Ok(())
}
