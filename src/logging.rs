use tracing_subscriber::EnvFilter;

use crate::error::ShellError;
use crate::flags::Flags;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "SMALLSH_LOG";

/// Logging is off unless `SMALLSH_LOG` is set or `--debug` is given.
/// Everything goes to stderr so it never mixes with job output on stdout.
pub fn init(flags: &Flags) -> Result<(), ShellError> {
    let filter = if flags.is_set("debug") {
        EnvFilter::new("smallsh=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}
