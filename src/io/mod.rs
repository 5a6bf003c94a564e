//! Startup I/O: command line, configuration, logging and the base map file

/// Command-line argument parsing
pub mod cli;
/// Constants and validated session settings
pub mod configuration;
/// Error type shared across the crate
pub mod error;
/// Base map bootstrap and decoding
pub mod image;
/// Logging subscriber setup
pub mod logging;
