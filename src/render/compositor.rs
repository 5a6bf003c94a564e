//! Composites elevation colors onto the immutable base map

use image::RgbImage;

use crate::render::color::elevation_color;
use crate::terrain::region::DirtyRegion;
use crate::terrain::store::{ElevationStore, MapPoint};

/// Render the whole display image from a fresh copy of the base
pub fn render_full(base: &RgbImage, store: &ElevationStore) -> RgbImage {
    let mut display = base.clone();

    for (point, elevation) in store.iter() {
        if point.x >= display.width() || point.y >= display.height() {
            continue;
        }
        if let Some(color) = elevation_color(elevation) {
            display.put_pixel(point.x, point.y, color);
        }
    }

    display
}

/// Re-render only `region` of an existing display image
///
/// Every pixel of the region is reset to the base pixel before the stored
/// elevation is applied, so the result matches [`render_full`] inside the
/// region and leaves everything outside it untouched. Parts of the region
/// outside the image are ignored.
pub fn render_region(
    display: &mut RgbImage,
    base: &RgbImage,
    store: &ElevationStore,
    region: DirtyRegion,
) {
    let width = display.width().min(base.width());
    let height = display.height().min(base.height());
    if region.min.x >= width || region.min.y >= height {
        return;
    }
    let clipped = DirtyRegion {
        min: region.min,
        max: MapPoint::new(region.max.x.min(width - 1), region.max.y.min(height - 1)),
    };

    for point in clipped.points() {
        let base_pixel = *base.get_pixel(point.x, point.y);
        let color = store
            .get(point)
            .and_then(elevation_color)
            .unwrap_or(base_pixel);
        display.put_pixel(point.x, point.y, color);
    }
}
