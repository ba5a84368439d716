//! Text stamped along freehand strokes.

/// Glyph placement along a stroke and compositing onto the surface.
pub mod compositor;
/// Glyph measurement and rasterization backends.
pub mod glyphs;
/// Live path-text parameters and their input parsing.
pub mod params;
