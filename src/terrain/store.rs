//! Sparse per-pixel elevation accumulated from brush strokes

use std::collections::HashMap;

/// Integer pixel coordinate in map space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapPoint {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
}

impl MapPoint {
    /// Create a point from its column and row
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Sparse elevation map bounded by the base image size
///
/// A point is present only once a stroke has covered it; absent points are
/// neutral. Entries accumulate and are never removed.
#[derive(Debug, Clone)]
pub struct ElevationStore {
    values: HashMap<MapPoint, f64>,
    width: u32,
    height: u32,
}

impl ElevationStore {
    /// Create an empty store for a `width` x `height` map
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            values: HashMap::new(),
            width,
            height,
        }
    }

    /// Map width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Map height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Test whether a point lies inside the map
    pub const fn in_bounds(&self, point: MapPoint) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Accumulated elevation at a point, `None` if never touched
    pub fn get(&self, point: MapPoint) -> Option<f64> {
        self.values.get(&point).copied()
    }

    /// Add `delta` to the elevation at `point`, creating the entry if absent
    ///
    /// Out-of-bounds points are ignored and return `false`.
    pub fn accumulate(&mut self, point: MapPoint, delta: f64) -> bool {
        if !self.in_bounds(point) {
            return false;
        }
        *self.values.entry(point).or_insert(0.0) += delta;
        true
    }

    /// Number of touched points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Test if no stroke has touched the map yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over every touched point and its elevation, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (MapPoint, f64)> + '_ {
        self.values.iter().map(|(&point, &value)| (point, value))
    }
}
