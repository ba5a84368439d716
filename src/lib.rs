//! pathpaint is the core of a raster image editor.
//!
//! An [`EditorState`] owns a two-layer CPU surface and a bounded undo log. Shell input arrives
//! as [`Command`]s:
//!
//! - Load an image (letterboxed into the surface)
//! - Apply pixel [`Filter`]s, rotate, flip and crop
//! - Draw a freehand stroke and lay text along it, with debounced live parameter edits
//! - Undo/redo and export PNG
//!
//! Glyph measurement and rasterization go through [`GlyphRasterizer`]; [`ParleyGlyphRasterizer`]
//! shapes with `parley` and rasterizes with `vello_cpu`.
#![forbid(unsafe_code)]

mod foundation;

/// Image decode/encode.
pub mod assets;
/// Controller state and command dispatch.
pub mod editor;
/// Pixel filters.
pub mod effects;
/// Undo/redo log.
pub mod history;
/// Strokes, stroke preview and simplification.
pub mod path;
/// Pixel buffers and the main/scratch surface.
pub mod raster;
/// Path text.
pub mod text;
/// Rotate, flip and crop.
pub mod transform;

pub use crate::foundation::core::{Affine, Canvas, PixelRect, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{EditorError, EditorResult};

pub use crate::assets::decode::decode_image;
pub use crate::assets::encode::{EXPORT_FILE_NAME, encode_png};
pub use crate::editor::command::{Command, apply_all, apply_command};
pub use crate::editor::opts::EditorOpts;
pub use crate::editor::state::{EditorState, Mode, Outcome};
pub use crate::effects::filter::Filter;
pub use crate::history::log::{Action, History, HistoryEntry, Snapshot};
pub use crate::path::stroke::StrokePath;
pub use crate::raster::buffer::PixelBuffer;
pub use crate::raster::surface::{Layer, Surface};
pub use crate::text::glyphs::{GlyphRasterizer, GlyphStamp, ParleyGlyphRasterizer, TextStyle};
pub use crate::text::params::{ParamChange, PathTextParams};
pub use crate::transform::crop::{CropHandle, CropSession};
pub use crate::transform::flip::FlipAxis;
