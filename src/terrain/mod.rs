//! Elevation state and the brush that edits it
//!
//! This module contains:
//! - The sparse elevation store
//! - The tabulated circular brush
//! - Dirty-region bookkeeping
//! - The session struct tying them to the base map

/// Circular brush kernel and stroke application
pub mod brush;
/// Bounding boxes of changed pixels
pub mod region;
/// Application state for one painting session
pub mod session;
/// Sparse per-pixel elevation
pub mod store;

pub use session::PaintSession;
pub use store::{ElevationStore, MapPoint};
