//! Command-line interface for launching the map editor

use crate::io::configuration::{
    DEFAULT_BRUSH_RADIUS, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_MAP_HEIGHT,
    DEFAULT_MAP_PATH, DEFAULT_MAP_WIDTH, EditorConfig,
};
use crate::io::error::Result;
use crate::io::logging::log_level;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "terrabrush")]
#[command(
    author,
    version,
    about = "Paint elevation onto a raster map: left click raises, right click lowers"
)]
/// Command-line arguments for the map editor
pub struct Cli {
    /// Map image to paint on (created as a blank white canvas if missing)
    #[arg(value_name = "MAP", default_value = DEFAULT_MAP_PATH)]
    pub map: PathBuf,

    /// Width of the blank map created when MAP does not exist
    #[arg(short = 'W', long, default_value_t = DEFAULT_MAP_WIDTH)]
    pub width: u32,

    /// Height of the blank map created when MAP does not exist
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAP_HEIGHT)]
    pub height: u32,

    /// Brush radius in map pixels
    #[arg(short, long, default_value_t = DEFAULT_BRUSH_RADIUS)]
    pub radius: u32,

    /// Initial window width in screen pixels
    #[arg(long, default_value_t = DEFAULT_DISPLAY_WIDTH)]
    pub display_width: u32,

    /// Initial window height in screen pixels
    #[arg(long, default_value_t = DEFAULT_DISPLAY_HEIGHT)]
    pub display_height: u32,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every stroke
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Logging level selected by the `--quiet` and `--verbose` switches
    pub const fn log_level(&self) -> Level {
        log_level(self.quiet, self.verbose)
    }

    /// Build the validated session configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension or the brush radius is out of range
    pub fn config(&self) -> Result<EditorConfig> {
        let config = EditorConfig {
            map_path: self.map.clone(),
            blank_size: (self.width, self.height),
            display_size: (self.display_width, self.display_height),
            brush_radius: self.radius,
        };
        config.validate()?;
        Ok(config)
    }
}
