//! Base map bootstrap: synthesize a blank canvas when missing, then load it

use crate::io::configuration::validate_dimension;
use crate::io::error::{PaintError, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Background color of a synthesized map
pub const BLANK_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Create a blank white map at `path` unless a file already exists there
///
/// Returns `true` when a new file was written.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn ensure_base_image(path: &Path, width: u32, height: u32) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PaintError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let blank = RgbImage::from_pixel(width, height, BLANK_COLOR);
    blank.save(path).map_err(|e| PaintError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), width, height, "created blank map");
    Ok(true)
}

/// Decode the map at `path` into an RGB raster
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a valid image
/// - The decoded image has zero width or height
/// - A dimension of the decoded image exceeds `MAX_MAP_DIMENSION`
pub fn load_base_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| PaintError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb = img.to_rgb8();

    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(PaintError::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    validate_dimension("width", rgb.width())?;
    validate_dimension("height", rgb.height())?;

    tracing::info!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "loaded base map"
    );
    Ok(rgb)
}

/// Ensure the map exists, then load it
///
/// # Errors
///
/// Propagates any failure from [`ensure_base_image`] or [`load_base_image`]
pub fn bootstrap_base_image(path: &Path, width: u32, height: u32) -> Result<RgbImage> {
    ensure_base_image(path, width, height)?;
    load_base_image(path)
}
