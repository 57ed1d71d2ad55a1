use crate::utils::error::{GreeterError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "hello_greeter=debug,info"
    } else {
        "hello_greeter=warn"
    }
}

/// Installs the global subscriber. Logs go to stderr; stdout is reserved for the greeting.
pub fn init_cli_logger(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| GreeterError::Logger {
            message: e.to_string(),
        })
}
