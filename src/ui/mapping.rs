//! Translation between on-screen display pixels and map pixels

use crate::terrain::store::MapPoint;

/// Linear scaling between a displayed rectangle and the map it shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMapping {
    /// Displayed size in screen pixels (width, height)
    pub display: [f32; 2],
    /// Map size in pixels (width, height)
    pub map: [u32; 2],
}

impl ViewMapping {
    /// Create a mapping for a map shown at the given display size
    pub const fn new(display: [f32; 2], map: [u32; 2]) -> Self {
        Self { display, map }
    }

    /// Map a display position, relative to the image's top-left, to map space
    ///
    /// Uses `floor(display * map / display_size)` per axis. Positions that
    /// land outside the map return `None`; nothing is clamped or wrapped.
    pub fn to_map(&self, position: [f32; 2]) -> Option<MapPoint> {
        let x = Self::axis(position[0], self.display[0], self.map[0])?;
        let y = Self::axis(position[1], self.display[1], self.map[1])?;
        Some(MapPoint::new(x, y))
    }

    fn axis(position: f32, display: f32, map: u32) -> Option<u32> {
        if display.is_nan() || display <= 0.0 || !position.is_finite() {
            return None;
        }
        let mapped = (f64::from(position) * f64::from(map) / f64::from(display)).floor();
        if mapped < 0.0 || mapped >= f64::from(map) {
            return None;
        }
        Some(mapped as u32)
    }
}

/// Largest size with the map's aspect ratio that fits inside `available`
pub fn fit_size(map: [u32; 2], available: [f32; 2]) -> [f32; 2] {
    if map[0] == 0 || map[1] == 0 {
        return [0.0, 0.0];
    }
    let scale_x = available[0] / map[0] as f32;
    let scale_y = available[1] / map[1] as f32;
    let scale = scale_x.min(scale_y).max(0.0);
    [map[0] as f32 * scale, map[1] as f32 * scale]
}
