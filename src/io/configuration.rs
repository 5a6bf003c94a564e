//! Editor constants, runtime configuration defaults and validation

use crate::io::error::{Result, invalid_parameter};
use std::path::PathBuf;

// Bootstrap settings for the map file
/// Map file loaded at startup, created blank when missing
pub const DEFAULT_MAP_PATH: &str = "map.png";
/// Width of the synthesized blank map
pub const DEFAULT_MAP_WIDTH: u32 = 200;
/// Height of the synthesized blank map
pub const DEFAULT_MAP_HEIGHT: u32 = 150;

// Window settings
/// Initial display width in screen pixels
pub const DEFAULT_DISPLAY_WIDTH: u32 = 800;
/// Initial display height in screen pixels
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 600;
/// Title of the editor window
pub const WINDOW_TITLE: &str = "D&D Map Editor";

// Brush settings
/// Radius of the circular brush in map pixels
pub const DEFAULT_BRUSH_RADIUS: u32 = 5;
/// Elevation added at the brush center by a single stroke
pub const STROKE_STRENGTH: f64 = 10_000.0;

// Rendering settings
/// Divisor applied before the tanh intensity curve
pub const ELEVATION_SCALE: f64 = 10.0;
/// Largest value of a color channel
pub const MAX_CHANNEL: i32 = 255;

// Safety limits to keep allocations and offset arithmetic bounded
/// Maximum allowed map or display dimension
pub const MAX_MAP_DIMENSION: u32 = 10_000;
/// Maximum allowed brush radius
pub const MAX_BRUSH_RADIUS: u32 = 10_000;
/// Largest clipped brush window tabulated up front; bigger brushes evaluate
/// their falloff per offset
pub const MAX_KERNEL_CELLS: usize = 1 << 22;

/// Validated settings for one editor session
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Map image to load (and create if missing)
    pub map_path: PathBuf,
    /// Size of a freshly created blank map (width, height)
    pub blank_size: (u32, u32),
    /// Initial window size (width, height)
    pub display_size: (u32, u32),
    /// Brush radius in map pixels
    pub brush_radius: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            blank_size: (DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT),
            display_size: (DEFAULT_DISPLAY_WIDTH, DEFAULT_DISPLAY_HEIGHT),
            brush_radius: DEFAULT_BRUSH_RADIUS,
        }
    }
}

impl EditorConfig {
    /// Check every dimension against the safety limits
    ///
    /// # Errors
    ///
    /// Returns an error if a map or display dimension is zero or exceeds
    /// `MAX_MAP_DIMENSION`, or if the brush radius exceeds `MAX_BRUSH_RADIUS`
    pub fn validate(&self) -> Result<()> {
        validate_dimension("width", self.blank_size.0)?;
        validate_dimension("height", self.blank_size.1)?;
        validate_dimension("display_width", self.display_size.0)?;
        validate_dimension("display_height", self.display_size.1)?;

        if self.brush_radius > MAX_BRUSH_RADIUS {
            return Err(invalid_parameter(
                "radius",
                &self.brush_radius,
                &format!("must not exceed {MAX_BRUSH_RADIUS}"),
            ));
        }

        Ok(())
    }
}

/// Check one map or display dimension against the safety limits
///
/// # Errors
///
/// Returns an error if `value` is zero or exceeds `MAX_MAP_DIMENSION`
pub fn validate_dimension(parameter: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > MAX_MAP_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_MAP_DIMENSION}"),
        ));
    }
    Ok(())
}
