//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so they never interleave with prompts on stdout.
//! `RUST_LOG` overrides the level picked from `-v` flags.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map a `-v` count to a level. Quiet by default: prompts matter more than logs.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(verbosity: u8) {
    let level = level_from_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        // External crates stay at warn
        EnvFilter::new(format!(
            "warn,questionbot={level},questionbot_types={level},questionbot_dialoguer={level},questionbot_cli={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
