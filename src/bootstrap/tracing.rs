//! Tracing configuration for clipformat
//!
//! Structured logging goes to stderr so command output on stdout stays
//! machine-readable.
//!
//! ## Behavior / 行为
//!
//! - **Development**: debug level for the clipboard crates
//! - **Production**: info level, `warn` for everything outside the crate
//! - **Environment filter**: `RUST_LOG` overrides the defaults

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("clipformat={level}"),
        format!("cf_app={level}"),
        format!("cf_platform={level}"),
        format!("cf_core={level}"),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once from `main` before any clipboard work:
///
/// ```ignore
/// clipformat::bootstrap::tracing::init_tracing_subscriber(false)?;
/// ```
///
/// `verbose` forces development directives in release builds.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(verbose: bool) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(verbose || is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
