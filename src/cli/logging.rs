use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "ARGSCOPE_LOG";

/// Initialize tracing on stderr.
///
/// Logging is off unless `ARGSCOPE_LOG` is set, e.g. `ARGSCOPE_LOG=debug` or
/// `ARGSCOPE_LOG=argscope=trace`.
pub fn init_tracing() {
    let Some(directive) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let filter = match EnvFilter::try_new(&directive) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!(
                "Warning: Invalid {} directive '{}': {}; falling back to 'info'",
                LOG_ENV_VAR, directive, e
            );
            EnvFilter::new("info")
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
