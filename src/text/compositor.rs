//! Text laid along a freehand stroke.
//!
//! Glyphs are spaced by the widest grapheme of the text, each rotated to its segment's tangent.
//! The running distance is carried across segment boundaries so spacing stays continuous where the
//! polyline bends.

use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::core::Point;
use crate::foundation::error::EditorResult;
use crate::path::simplify::simplify;
use crate::path::stroke::StrokePath;
use crate::raster::buffer::PixelBuffer;
use crate::raster::surface::{Layer, Surface};
use crate::text::glyphs::{GlyphRasterizer, GlyphStamp};
use crate::text::params::{FALLBACK_PATH_TEXT, PathTextParams};

/// Where one glyph lands on the stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index into the grapheme list, already wrapped.
    pub glyph: usize,
    /// Placement point.
    pub origin: Point,
    /// Segment direction in radians.
    pub angle: f64,
}

/// Split text into extended grapheme clusters.
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Distance between consecutive glyph origins.
///
/// `spacing` is expressed in tenths of `max_char_width`; negative values pull glyphs together.
pub fn char_spacing(max_char_width: f64, spacing: f64) -> f64 {
    max_char_width + max_char_width * (spacing * 0.1)
}

/// Walk `points` and return glyph placements every `step` units, cycling through `glyph_count`
/// graphemes.
///
/// The distance counter starts at 0 and is carried into the next segment after subtracting the
/// segment length. A non-positive `step` would never advance and yields no placements.
pub fn place_along(points: &[Point], glyph_count: usize, step: f64) -> Vec<Placement> {
    let mut out = Vec::new();
    if points.len() < 2 || glyph_count == 0 || !step.is_finite() || step <= 0.0 {
        return out;
    }

    let mut carried = 0.0f64;
    let mut next_glyph = 0usize;
    for seg in points.windows(2) {
        let (p1, p2) = (seg[0], seg[1]);
        let d = p2 - p1;
        let len = d.hypot();
        let angle = d.y.atan2(d.x);

        while carried < len {
            let t = carried / len;
            out.push(Placement {
                glyph: next_glyph % glyph_count,
                origin: p1 + d * t,
                angle,
            });
            next_glyph += 1;
            carried += step;
        }
        carried -= len;
    }
    out
}

/// Stamp `params.text` along `path` and commit it onto the main buffer.
///
/// The main buffer is first reset to `base` (the image captured when the stroke started) so that
/// repeated redraws while parameters change never accumulate stale glyphs. Returns the number of
/// glyphs drawn. A path with fewer than two points only clears scratch.
pub fn render_path_text(
    surface: &mut Surface,
    base: Option<&PixelBuffer>,
    path: &StrokePath,
    params: &PathTextParams,
    tolerance: f64,
    glyphs: &mut dyn GlyphRasterizer,
) -> EditorResult<usize> {
    surface.clear(Layer::Scratch);
    if !path.is_drawable() {
        return Ok(0);
    }

    let style = params.style();
    let simplified = simplify(path.points(), tolerance);
    let clusters = if params.text.is_empty() {
        graphemes(FALLBACK_PATH_TEXT)
    } else {
        graphemes(&params.text)
    };

    let mut max_char_width = 0.0f64;
    for g in &clusters {
        max_char_width = max_char_width.max(glyphs.advance(g, &style)?);
    }
    let step = char_spacing(max_char_width, params.spacing);
    let placements = place_along(&simplified, clusters.len(), step);

    let stamps: Vec<GlyphStamp<'_>> = placements
        .iter()
        .map(|p| GlyphStamp {
            grapheme: clusters[p.glyph],
            origin: p.origin,
            angle: p.angle,
        })
        .collect();
    let layer = glyphs.rasterize(surface.canvas(), &stamps, &style)?;
    surface.put_pixels(Layer::Scratch, &layer, 0, 0);

    if let Some(base) = base {
        if base.canvas() == surface.canvas() {
            surface.put_pixels(Layer::Main, base, 0, 0);
        } else {
            tracing::warn!(
                base_w = base.width(),
                base_h = base.height(),
                "stroke base does not match surface size; drawing over current image"
            );
        }
    }
    surface.merge_scratch()?;

    tracing::debug!(
        glyphs = stamps.len(),
        segments = simplified.len().saturating_sub(1),
        step,
        "path text composited"
    );
    Ok(stamps.len())
}

#[cfg(test)]
#[path = "../../tests/unit/text/compositor.rs"]
mod tests;
