//! Terrain painting over a raster map
//!
//! A circular brush accumulates an exponentially decaying elevation delta
//! into a sparse per-pixel store. Elevation is rendered as a white-to-green
//! (raised) or white-to-blue (lowered) gradient over the unmodified base map.

#![forbid(unsafe_code)]

/// Startup I/O: CLI, configuration, logging and map bootstrap
pub mod io;
/// Elevation-to-color rendering
pub mod render;
/// Elevation store, brush and session state
pub mod terrain;
/// Native editor window and input handling
pub mod ui;

pub use io::error::{PaintError, Result};
