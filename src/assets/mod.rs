//! Image bytes in and out of the editor.

/// Decoding and letterboxing uploads into the surface.
pub mod decode;
/// PNG export.
pub mod encode;
