use crate::foundation::core::{Canvas, PixelRect, Rgba8};
use crate::foundation::error::{EditorError, EditorResult};

/// Straight-alpha RGBA8 pixel grid, row-major, tightly packed.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl PixelBuffer {
    /// Fully transparent buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    /// Buffer filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let mut out = Self::new(width, height);
        out.fill(color);
        out
    }

    /// Wrap existing RGBA8 bytes; the length must be `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> EditorResult<Self> {
        if data.len() != byte_len(width, height) {
            return Err(EditorError::validation(format!(
                "pixel buffer byte len mismatch: expected {} for {width}x{height}, got {}",
                byte_len(width, height),
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read one pixel; `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Write one pixel; writes outside the grid are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let px = color.to_array();
        for dst in self.data.chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    /// Set every pixel inside `rect` to transparent.
    pub fn clear_rect(&mut self, rect: PixelRect) {
        let rect = rect.clip_to(self.canvas());
        if rect.is_empty() {
            return;
        }
        let row_bytes = rect.width as usize * 4;
        for y in rect.y..rect.bottom() {
            let i = self.offset(rect.x, y);
            self.data[i..i + row_bytes].fill(0);
        }
    }

    /// Copy out a sub-rectangle. Parts outside the grid read as transparent.
    pub fn region(&self, rect: PixelRect) -> PixelBuffer {
        let mut out = PixelBuffer::new(rect.width, rect.height);
        let clipped = rect.clip_to(self.canvas());
        if clipped.is_empty() {
            return out;
        }
        let row_bytes = clipped.width as usize * 4;
        for y in clipped.y..clipped.bottom() {
            let src = self.offset(clipped.x, y);
            let dst = out.offset(clipped.x - rect.x, y - rect.y);
            out.data[dst..dst + row_bytes].copy_from_slice(&self.data[src..src + row_bytes]);
        }
        out
    }

    /// Write `src` with its top-left corner at `(x, y)`, replacing pixels (no blending).
    pub fn put(&mut self, src: &PixelBuffer, x: u32, y: u32) {
        let dst_rect = PixelRect::new(x, y, src.width, src.height).clip_to(self.canvas());
        if dst_rect.is_empty() {
            return;
        }
        let row_bytes = dst_rect.width as usize * 4;
        for dy in 0..dst_rect.height {
            let s = src.offset(0, dy);
            let d = self.offset(dst_rect.x, dst_rect.y + dy);
            self.data[d..d + row_bytes].copy_from_slice(&src.data[s..s + row_bytes]);
        }
    }

    /// Bounding box of pixels with non-zero alpha, or `None` when everything is transparent.
    pub fn opaque_bounds(&self) -> Option<PixelRect> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let mut left = u32::MAX;
        let mut top = u32::MAX;
        let mut right = 0u32;
        let mut bottom = 0u32;
        let mut any = false;

        for (row_i, row) in self.data.chunks_exact(self.width as usize * 4).enumerate() {
            for (col_i, px) in row.chunks_exact(4).enumerate() {
                if px[3] == 0 {
                    continue;
                }
                let (x, y) = (col_i as u32, row_i as u32);
                any = true;
                left = left.min(x);
                right = right.max(x);
                top = top.min(y);
                bottom = bottom.max(y);
            }
        }

        any.then(|| PixelRect::new(left, top, right - left + 1, bottom - top + 1))
    }

    /// Convert into an `image` crate RGBA buffer.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Build from an `image` crate RGBA buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
