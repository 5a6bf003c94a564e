//! Circular brush with exponential radial falloff
//!
//! A stroke adds `STROKE_STRENGTH * sign * exp(-distance)` to every map pixel
//! whose integer offset from the center lies inside the brush circle. The
//! weights and the circle footprint are tabulated once per radius and canvas
//! so a stroke only walks the precomputed kernel. Brushes too large to
//! tabulate fall back to evaluating the falloff per offset.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::configuration::{MAX_KERNEL_CELLS, STROKE_STRENGTH};
use crate::terrain::region::DirtyRegion;
use crate::terrain::store::{ElevationStore, MapPoint};

/// Whether a stroke raises or lowers the terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeDirection {
    /// Positive delta
    Raise,
    /// Negative delta
    Lower,
}

impl StrokeDirection {
    /// Sign applied to the stroke delta
    pub const fn sign(self) -> f64 {
        match self {
            Self::Raise => 1.0,
            Self::Lower => -1.0,
        }
    }

    /// The opposite direction
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Raise => Self::Lower,
            Self::Lower => Self::Raise,
        }
    }
}

fn squared_distance(dx: i64, dy: i64) -> i64 {
    dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
}

/// Falloff weight at a given offset from the brush center
pub fn falloff(dx: i64, dy: i64) -> f64 {
    (-(squared_distance(dx, dy) as f64).sqrt()).exp()
}

/// Weights and circle footprint for every offset of the clipped window
#[derive(Debug, Clone)]
struct KernelTable {
    weights: Array2<f64>,
    footprint: BitVec,
}

/// Brush weights clipped to the canvas
///
/// Offsets beyond `width - 1` columns or `height - 1` rows can never land on
/// the canvas, so the kernel only spans `min(radius, width - 1)` by
/// `min(radius, height - 1)` around the center. Windows of up to
/// `MAX_KERNEL_CELLS` offsets are tabulated; larger ones compute the falloff
/// on demand.
#[derive(Debug, Clone)]
pub struct BrushKernel {
    radius: u32,
    half_extent: [i64; 2],
    table: Option<KernelTable>,
}

impl BrushKernel {
    /// Build the brush for a `width` x `height` canvas
    pub fn new(radius: u32, width: u32, height: u32) -> Self {
        Self::with_table_limit(radius, width, height, MAX_KERNEL_CELLS)
    }

    /// Build the brush, tabulating only if the window has at most `max_cells` offsets
    pub fn with_table_limit(radius: u32, width: u32, height: u32, max_cells: usize) -> Self {
        let r = i64::from(radius);
        let half_x = r.min(i64::from(width.saturating_sub(1)));
        let half_y = r.min(i64::from(height.saturating_sub(1)));
        let cols = (2 * half_x + 1) as usize;
        let rows = (2 * half_y + 1) as usize;

        let table = rows
            .checked_mul(cols)
            .filter(|&cells| cells <= max_cells)
            .map(|_| tabulate(r, half_x, half_y));
        if table.is_none() {
            tracing::debug!(radius, rows, cols, "brush window too large to tabulate");
        }

        Self {
            radius,
            half_extent: [half_x, half_y],
            table,
        }
    }

    /// Brush radius in map pixels
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    /// Largest horizontal and vertical offset kept after clipping
    pub const fn half_extent(&self) -> [i64; 2] {
        self.half_extent
    }

    /// Whether the weights were precomputed
    pub const fn is_tabulated(&self) -> bool {
        self.table.is_some()
    }

    /// Weight at an offset, `None` outside the circle
    pub fn weight(&self, dx: i64, dy: i64) -> Option<f64> {
        let [half_x, half_y] = self.half_extent;
        if dx.abs() > half_x || dy.abs() > half_y {
            return None;
        }

        let Some(table) = &self.table else {
            let r = i64::from(self.radius);
            return (squared_distance(dx, dy) <= r.saturating_mul(r)).then(|| falloff(dx, dy));
        };

        let row = (dy + half_y) as usize;
        let col = (dx + half_x) as usize;
        let cols = (2 * half_x + 1) as usize;
        if table.footprint.get(row * cols + col).as_deref() != Some(&true) {
            return None;
        }
        table.weights.get((row, col)).copied()
    }

    /// Number of offsets inside the clipped circle
    pub fn footprint_size(&self) -> usize {
        if let Some(table) = &self.table {
            return table.footprint.count_ones();
        }

        // Count each row's span of the circle analytically
        let [half_x, half_y] = self.half_extent;
        let r_squared = i64::from(self.radius).saturating_mul(i64::from(self.radius));
        (-half_y..=half_y)
            .map(|dy| {
                let reach = (r_squared - dy * dy).max(0).isqrt().min(half_x);
                (2 * reach + 1) as usize
            })
            .sum()
    }
}

fn tabulate(r: i64, half_x: i64, half_y: i64) -> KernelTable {
    let cols = (2 * half_x + 1) as usize;
    let rows = (2 * half_y + 1) as usize;
    let mut weights = Array2::zeros((rows, cols));
    let mut footprint = bitvec![0; rows * cols];
    let r_squared = r.saturating_mul(r);

    for dy in -half_y..=half_y {
        for dx in -half_x..=half_x {
            if squared_distance(dx, dy) > r_squared {
                continue;
            }
            let row = (dy + half_y) as usize;
            let col = (dx + half_x) as usize;
            if let Some(weight) = weights.get_mut((row, col)) {
                *weight = falloff(dx, dy);
            }
            footprint.set(row * cols + col, true);
        }
    }

    KernelTable { weights, footprint }
}

/// Result of applying one stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeOutcome {
    /// Bounding box of the touched pixels, `None` if nothing was touched
    pub region: Option<DirtyRegion>,
    /// Number of pixels whose elevation changed
    pub touched: usize,
}

/// Apply one stroke centered at `center` to the store
///
/// Points outside the map are skipped. The offset loop is limited to the
/// window of the kernel that overlaps the canvas.
pub fn apply_stroke(
    store: &mut ElevationStore,
    kernel: &BrushKernel,
    center: MapPoint,
    direction: StrokeDirection,
) -> StrokeOutcome {
    let [half_x, half_y] = kernel.half_extent();
    let cx = i64::from(center.x);
    let cy = i64::from(center.y);
    let width = i64::from(store.width());
    let height = i64::from(store.height());

    let dx_range = (-half_x).max(-cx)..=half_x.min(width - 1 - cx);
    let dy_range = (-half_y).max(-cy)..=half_y.min(height - 1 - cy);

    let delta = STROKE_STRENGTH * direction.sign();
    let mut region: Option<DirtyRegion> = None;
    let mut touched = 0;

    for dy in dy_range {
        for dx in dx_range.clone() {
            let Some(weight) = kernel.weight(dx, dy) else {
                continue;
            };
            let point = MapPoint::new((cx + dx) as u32, (cy + dy) as u32);
            if store.accumulate(point, delta * weight) {
                touched += 1;
                region = Some(region.map_or_else(
                    || DirtyRegion::point(point),
                    |r| r.include(point),
                ));
            }
        }
    }

    StrokeOutcome { region, touched }
}
