//! Bounding boxes of pixels changed by a stroke

use crate::terrain::store::MapPoint;

/// Inclusive axis-aligned rectangle of map pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    /// Minimum corner (inclusive)
    pub min: MapPoint,
    /// Maximum corner (inclusive)
    pub max: MapPoint,
}

impl DirtyRegion {
    /// Region covering a single pixel
    pub const fn point(point: MapPoint) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the region to cover `point`
    #[must_use]
    pub fn include(self, point: MapPoint) -> Self {
        Self {
            min: MapPoint::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: MapPoint::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Smallest region covering both regions
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        self.include(other.min).include(other.max)
    }

    /// Test if a point lies inside the region
    pub const fn contains(&self, point: MapPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.max.x - self.min.x + 1
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.max.y - self.min.y + 1
    }

    /// Iterate over every pixel of the region in row-major order
    pub fn points(&self) -> impl Iterator<Item = MapPoint> + use<> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| MapPoint::new(x, y)))
    }
}
