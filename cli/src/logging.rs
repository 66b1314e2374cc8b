//! Logging configuration for the CLI.
//!
//! Logs go to stderr so they do not interleave with REPL output on stdout.
//! Set `DEBUG_LOGGING=1` to enable debug output for tickwork crates;
//! `RUST_LOG` overrides both.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn filter_directive(debug_logging: bool) -> &'static str {
    if debug_logging {
        "info,tickwork_core=debug,tickwork_cli=debug"
    } else {
        "info"
    }
}

/// Initialize stderr logging.
pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(debug_logging)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "tickwork logging initialized");
}
