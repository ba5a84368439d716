use crate::foundation::core::{PixelRect, Rgba8};
use crate::foundation::error::{EditorError, EditorResult};
use crate::raster::buffer::PixelBuffer;
use crate::raster::surface::{Layer, Surface};

/// Decode PNG/JPEG/GIF/BMP/WebP bytes (any format `image` recognizes) into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> EditorResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| EditorError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(EditorError::decode("image has zero dimensions"));
    }
    Ok(PixelBuffer::from_rgba_image(rgba))
}

/// Target rectangle that fits `image_w × image_h` inside the surface, aspect preserved, centered.
pub fn letterbox_rect(surface_w: u32, surface_h: u32, image_w: u32, image_h: u32) -> PixelRect {
    let (sw, sh) = (f64::from(surface_w), f64::from(surface_h));
    let (iw, ih) = (f64::from(image_w), f64::from(image_h));
    let scale = (sw / iw).min(sh / ih);
    let w = (iw * scale).round().clamp(1.0, sw);
    let h = (ih * scale).round().clamp(1.0, sh);
    PixelRect::new(
        ((sw - w) / 2.0).round() as u32,
        ((sh - h) / 2.0).round() as u32,
        w as u32,
        h as u32,
    )
}

/// Clear the surface to `background` and draw `image` scaled to fit, centered.
///
/// Returns the rectangle the image landed in.
pub fn letterbox_into(
    surface: &mut Surface,
    image: &PixelBuffer,
    background: Option<Rgba8>,
) -> EditorResult<PixelRect> {
    surface.clear(Layer::Scratch);
    match background {
        Some(color) => surface.layer_mut(Layer::Main).fill(color),
        None => surface.clear(Layer::Main),
    }
    let canvas = surface.canvas();
    let dst = letterbox_rect(canvas.width, canvas.height, image.width(), image.height());
    surface.draw_region(image, PixelRect::full(image.canvas()), dst)?;
    Ok(dst)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
