//! Logging utilities for the My Notes crates.
//!
//! Every binary calls [`init`] (or [`init_with_level`]) once at startup. The
//! filter honours `RUST_LOG` when set; otherwise all `mynotes_*` targets log
//! at the requested level and everything else at `warn`.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate targets that receive the configured level.
const TARGETS: &[&str] = &[
    "mynotes_backend",
    "mynotes_push",
    "mynotes_client",
    "mynotes_config",
    "mynotes_common",
];

/// Initialize the tracing subscriber at INFO.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_with_level(level: Level) {
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(build_filter(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

fn build_filter(level: Level) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    TARGETS.iter().fold(EnvFilter::new("warn"), |filter, target| {
        match format!("{}={}", target, level).parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    })
}
