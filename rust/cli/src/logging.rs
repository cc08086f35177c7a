//! Diagnostic logging for the `sixmax` binary.
//!
//! Engine events are emitted with `tracing`; this installs the subscriber
//! that prints them to stderr. `RUST_LOG` overrides the default filter and
//! `SIXMAX_LOG_FORMAT=json` switches to one JSON object per line.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FORMAT: &str = "SIXMAX_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn,sixmax_engine=info,sixmax_cli=info";

/// Installs the global subscriber. Calling it twice is harmless; the second
/// call keeps the first subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var(ENV_LOG_FORMAT)
        .map(|v| v.trim().eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
