use std::io::Cursor;

use crate::foundation::error::{EditorError, EditorResult};
use crate::raster::buffer::PixelBuffer;

/// File name suggested for exported images.
pub const EXPORT_FILE_NAME: &str = "edited-image.png";

/// Encode a buffer as PNG bytes.
pub fn encode_png(buf: &PixelBuffer) -> EditorResult<Vec<u8>> {
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(buf.to_rgba_image())
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| EditorError::encode(format!("encode png: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
