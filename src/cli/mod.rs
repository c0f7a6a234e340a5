//! CLI argument parsing and logging setup.

pub mod args;

use tracing_subscriber::EnvFilter;

use usersearch::constants::{DEFAULT_LOG_FILTER, ENV_LOG};
use usersearch::env::Env;

/// Filter directive for a `-v` count.
fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "info",
        _ => "debug",
    }
}

/// Build the log filter. `USERSEARCH_LOG` wins over `-v` when it parses.
fn log_filter(verbose: u8, env: &Env) -> EnvFilter {
    env.get(ENV_LOG)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_directive(verbose)))
}

/// Install the global tracing subscriber, writing to stderr so stdout
/// carries only the report.
pub fn init_logging(verbose: u8, env: &Env) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
