//! Logging Infrastructure
//!
//! Console logging to stderr so log lines never interleave with the screen
//! rendered on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Default filter (e.g., "info", "debug"); `RUST_LOG` overrides it
/// * `json_format` - Emit JSON lines instead of the human-readable format
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let json_layer = json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json_format).then(|| {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}
