//! Native editor window and its input adapters

/// The eframe application
pub mod app;
/// Pointer button to stroke direction policy
pub mod input;
/// Display-to-map coordinate mapping
pub mod mapping;
