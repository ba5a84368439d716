use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{EditorError, EditorResult};
use crate::foundation::math::unpremultiply;
use crate::raster::buffer::PixelBuffer;

/// Color of the in-progress stroke preview.
pub const PREVIEW_COLOR: Rgba8 = Rgba8::rgb(0x66, 0x66, 0x66);
/// Line width of the in-progress stroke preview.
pub const PREVIEW_WIDTH: f64 = 1.0;

/// Rasterize the raw stroke as a thin polyline on a transparent layer.
///
/// Fewer than two points produce an empty layer.
pub fn render_preview(canvas: Canvas, points: &[Point]) -> EditorResult<PixelBuffer> {
    if points.len() < 2 {
        return Ok(PixelBuffer::new(canvas.width, canvas.height));
    }
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| EditorError::validation("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| EditorError::validation("surface height exceeds u16"))?;

    let mut line = vello_cpu::kurbo::BezPath::new();
    line.move_to(vello_cpu::kurbo::Point::new(points[0].x, points[0].y));
    for p in &points[1..] {
        line.line_to(vello_cpu::kurbo::Point::new(p.x, p.y));
    }

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        PREVIEW_COLOR.r,
        PREVIEW_COLOR.g,
        PREVIEW_COLOR.b,
        PREVIEW_COLOR.a,
    ));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(PREVIEW_WIDTH));
    ctx.stroke_path(&line);
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

#[cfg(test)]
#[path = "../../tests/unit/path/preview.rs"]
mod tests;
