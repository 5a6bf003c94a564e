//! Structured logging setup for the editor binary

use tracing::Level;

/// Pick the most verbose level to record from the CLI switches
///
/// `quiet` wins over `verbose` when both are given.
pub const fn log_level(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global fmt subscriber
///
/// Returns `false` if a subscriber was already installed, which leaves the
/// existing one in place.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
