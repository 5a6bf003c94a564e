//! Application state for one painting session
//!
//! The session owns the base map, the elevation store, the current display
//! image and the tabulated brush. The UI only translates input into calls to
//! [`PaintSession::stroke`] and reads [`PaintSession::display`].

use image::RgbImage;

use crate::io::configuration::EditorConfig;
use crate::io::error::Result;
use crate::io::image::bootstrap_base_image;
use crate::render::compositor::{render_full, render_region};
use crate::terrain::brush::{BrushKernel, StrokeDirection, StrokeOutcome, apply_stroke};
use crate::terrain::store::{ElevationStore, MapPoint};

/// Base map, elevation and display image for the running editor
#[derive(Debug, Clone)]
pub struct PaintSession {
    base: RgbImage,
    store: ElevationStore,
    display: RgbImage,
    kernel: BrushKernel,
}

impl PaintSession {
    /// Start a session on an already loaded base map
    pub fn new(base: RgbImage, brush_radius: u32) -> Self {
        let (width, height) = base.dimensions();
        let store = ElevationStore::new(width, height);
        let kernel = BrushKernel::new(brush_radius, width, height);
        let display = render_full(&base, &store);

        Self {
            base,
            store,
            display,
            kernel,
        }
    }

    /// Bootstrap the configured map file and start a session on it
    ///
    /// # Errors
    ///
    /// Returns an error if the blank map cannot be created or the map cannot
    /// be decoded
    pub fn open(config: &EditorConfig) -> Result<Self> {
        let (width, height) = config.blank_size;
        let base = bootstrap_base_image(&config.map_path, width, height)?;
        Ok(Self::new(base, config.brush_radius))
    }

    /// Apply one brush stroke and refresh the affected part of the display
    pub fn stroke(&mut self, center: MapPoint, direction: StrokeDirection) -> StrokeOutcome {
        let outcome = apply_stroke(&mut self.store, &self.kernel, center, direction);
        if let Some(region) = outcome.region {
            render_region(&mut self.display, &self.base, &self.store, region);
        }

        tracing::debug!(
            x = center.x,
            y = center.y,
            ?direction,
            touched = outcome.touched,
            "applied stroke"
        );
        outcome
    }

    /// Immutable base map
    pub const fn base(&self) -> &RgbImage {
        &self.base
    }

    /// Accumulated elevation
    pub const fn store(&self) -> &ElevationStore {
        &self.store
    }

    /// Current display image
    pub const fn display(&self) -> &RgbImage {
        &self.display
    }

    /// Tabulated brush
    pub const fn kernel(&self) -> &BrushKernel {
        &self.kernel
    }

    /// Map size (width, height)
    pub const fn map_size(&self) -> (u32, u32) {
        (self.store.width(), self.store.height())
    }
}
