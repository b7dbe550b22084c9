use tracing_subscriber::{fmt, EnvFilter};

pub(crate) const LOG_ENV: &str = "FINLEDGER_LOG";

/// Logs go to stderr so they never mix with menu output on stdout.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
