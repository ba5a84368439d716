//! Freehand strokes and their simplification.

/// Thin polyline preview of the stroke being drawn.
pub mod preview;
/// Greedy point reduction.
pub mod simplify;
/// Recorded stroke points.
pub mod stroke;
