//! Elevation-to-color rendering over the base map

/// Elevation color gradient
pub mod color;
/// Full and dirty-region compositing
pub mod compositor;
