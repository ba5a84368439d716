use crate::foundation::core::{Affine, Canvas, Point, Rgba8};
use crate::foundation::error::{EditorError, EditorResult};
use crate::foundation::math::unpremultiply;
use crate::raster::buffer::PixelBuffer;

/// Font size and fill color shared by every glyph of one path-text pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f32,
    /// Fill color.
    pub color: Rgba8,
}

/// One glyph placed on the surface: centered on `origin`, baseline rotated by `angle` radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStamp<'a> {
    /// Grapheme cluster to draw.
    pub grapheme: &'a str,
    /// Placement point in surface coordinates.
    pub origin: Point,
    /// Baseline direction in radians.
    pub angle: f64,
}

impl GlyphStamp<'_> {
    /// Local glyph space to surface space. Rotation pivots on the placement point.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::rotate(self.angle)
    }
}

/// Glyph measurement and rasterization backend.
///
/// Implementations draw each glyph horizontally centered on its local origin with the alphabetic
/// baseline passing through it, then apply the stamp transform.
pub trait GlyphRasterizer {
    /// Advance width of `grapheme` at `style.font_size`.
    fn advance(&mut self, grapheme: &str, style: &TextStyle) -> EditorResult<f64>;

    /// Rasterize all stamps into a fresh straight-alpha layer of `canvas` size.
    fn rasterize(
        &mut self,
        canvas: Canvas,
        stamps: &[GlyphStamp<'_>],
        style: &TextStyle,
    ) -> EditorResult<PixelBuffer>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// [`GlyphRasterizer`] that shapes with Parley and rasterizes with `vello_cpu`.
pub struct ParleyGlyphRasterizer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for ParleyGlyphRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyGlyphRasterizer")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl ParleyGlyphRasterizer {
    /// Register a font from raw TTF/OTF bytes and use its first family for every glyph.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> EditorResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| EditorError::glyph("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| EditorError::glyph("registered font family has no name"))?
            .to_string();

        tracing::debug!(family = %family_name, "registered path-text font");

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0),
        })
    }

    /// Family name resolved from the registered font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn layout(
        &mut self,
        text: &str,
        style: &TextStyle,
    ) -> EditorResult<parley::Layout<TextBrushRgba8>> {
        if !style.font_size.is_finite() || style.font_size <= 0.0 {
            return Err(EditorError::validation(
                "font size must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.font_size));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::from(
            style.color,
        )));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl GlyphRasterizer for ParleyGlyphRasterizer {
    fn advance(&mut self, grapheme: &str, style: &TextStyle) -> EditorResult<f64> {
        let layout = self.layout(grapheme, style)?;
        Ok(f64::from(layout.width()))
    }

    fn rasterize(
        &mut self,
        canvas: Canvas,
        stamps: &[GlyphStamp<'_>],
        style: &TextStyle,
    ) -> EditorResult<PixelBuffer> {
        let w: u16 = canvas
            .width
            .try_into()
            .map_err(|_| EditorError::glyph("surface width exceeds u16"))?;
        let h: u16 = canvas
            .height
            .try_into()
            .map_err(|_| EditorError::glyph("surface height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            style.color.r,
            style.color.g,
            style.color.b,
            style.color.a,
        ));

        for stamp in stamps {
            let layout = self.layout(stamp.grapheme, style)?;
            let baseline = layout
                .lines()
                .next()
                .map(|line| f64::from(line.metrics().baseline))
                .unwrap_or(0.0);
            let centered = Affine::translate((-f64::from(layout.width()) / 2.0, -baseline));
            ctx.set_transform(affine_to_cpu(stamp.transform() * centered));

            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    // Glyph offsets are relative to the pen; advances accumulate along the run.
                    let mut pen = run.offset();
                    let run_baseline = run.baseline();
                    let glyphs: Vec<vello_cpu::Glyph> = run
                        .glyphs()
                        .map(|g| {
                            let placed = vello_cpu::Glyph {
                                id: g.id,
                                x: pen + g.x,
                                y: run_baseline - g.y,
                            };
                            pen += g.advance;
                            placed
                        })
                        .collect();
                    ctx.glyph_run(&self.font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs.into_iter());
                }
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        let mut straight = pixmap.data_as_u8_slice().to_vec();
        for px in straight.chunks_exact_mut(4) {
            let un = unpremultiply([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&un);
        }
        PixelBuffer::from_raw(canvas.width, canvas.height, straight)
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/text/glyphs.rs"]
mod tests;
