//! Logger installation for the command-line tool

use flexi_logger::{Logger, LoggerHandle};

use crate::io::error::{Result, invalid_parameter};

/// Install a stderr logger at `level`
///
/// `RUST_LOG`, when set, takes precedence over `level`. The returned handle
/// must stay alive for as long as logging is wanted.
///
/// # Errors
///
/// Returns `InvalidParameter` if the level spec cannot be parsed or a
/// logger is already installed
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(level)
        .map_err(|e| invalid_parameter("log_level", &level, &e))?
        .log_to_stderr()
        .start()
        .map_err(|e| invalid_parameter("log_level", &level, &e))
}
