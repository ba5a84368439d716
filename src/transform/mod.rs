//! Geometric edits on the main layer.

/// Axis-aligned crop and the interactive crop box.
pub mod crop;
/// Horizontal and vertical mirroring.
pub mod flip;
/// Quarter-turn and arbitrary-angle rotation.
pub mod rotate;
