//! Pixel buffers and the two-layer CPU surface.

/// Straight-alpha source-over helpers.
pub mod blend;
/// RGBA8 pixel grid.
pub mod buffer;
/// Main + scratch surface.
pub mod surface;
