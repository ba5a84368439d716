use crate::foundation::core::{Canvas, PixelRect};
use crate::foundation::error::EditorResult;
use crate::raster::blend::over_in_place;
use crate::raster::buffer::PixelBuffer;

/// Which of the two surface buffers an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The persistent composed image.
    Main,
    /// The transient overlay used for previews and uncommitted glyphs.
    Scratch,
}

/// CPU raster surface owning the main and scratch buffers.
///
/// Both buffers always share dimensions; every size change goes through [`Surface::resize`] or
/// [`Surface::replace_main`], which keep them in lockstep.
#[derive(Clone, Debug)]
pub struct Surface {
    main: PixelBuffer,
    scratch: PixelBuffer,
}

impl Surface {
    /// Transparent surface of the given size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            main: PixelBuffer::new(canvas.width, canvas.height),
            scratch: PixelBuffer::new(canvas.width, canvas.height),
        }
    }

    /// Current dimensions shared by both buffers.
    pub fn canvas(&self) -> Canvas {
        self.main.canvas()
    }

    /// Borrow a layer.
    pub fn layer(&self, layer: Layer) -> &PixelBuffer {
        match layer {
            Layer::Main => &self.main,
            Layer::Scratch => &self.scratch,
        }
    }

    /// Mutably borrow a layer.
    pub fn layer_mut(&mut self, layer: Layer) -> &mut PixelBuffer {
        match layer {
            Layer::Main => &mut self.main,
            Layer::Scratch => &mut self.scratch,
        }
    }

    /// Copy out pixels from a layer.
    pub fn get_pixels(&self, layer: Layer, rect: PixelRect) -> PixelBuffer {
        self.layer(layer).region(rect)
    }

    /// Overwrite pixels of a layer starting at `(x, y)`.
    pub fn put_pixels(&mut self, layer: Layer, src: &PixelBuffer, x: u32, y: u32) {
        self.layer_mut(layer).put(src, x, y);
    }

    /// Clear a region of a layer to transparent.
    pub fn clear_region(&mut self, layer: Layer, rect: PixelRect) {
        self.layer_mut(layer).clear_rect(rect);
    }

    /// Clear a whole layer.
    pub fn clear(&mut self, layer: Layer) {
        let rect = PixelRect::full(self.canvas());
        self.clear_region(layer, rect);
    }

    /// Resize both buffers. Like a canvas resize, contents are discarded.
    pub fn resize(&mut self, canvas: Canvas) {
        self.main = PixelBuffer::new(canvas.width, canvas.height);
        self.scratch = PixelBuffer::new(canvas.width, canvas.height);
    }

    /// Replace the main buffer wholesale. Scratch is cleared and follows the new size.
    pub fn replace_main(&mut self, buffer: PixelBuffer) {
        self.scratch = PixelBuffer::new(buffer.width(), buffer.height());
        self.main = buffer;
    }

    /// Source-over `src_rect` of `src` onto `dst_rect` of the main buffer, scaling when the two
    /// rectangles differ in size.
    pub fn draw_region(
        &mut self,
        src: &PixelBuffer,
        src_rect: PixelRect,
        dst_rect: PixelRect,
    ) -> EditorResult<()> {
        if src_rect.is_empty() || dst_rect.is_empty() {
            return Ok(());
        }

        let region = src.region(src_rect);
        let region = if src_rect.width == dst_rect.width && src_rect.height == dst_rect.height {
            region
        } else {
            PixelBuffer::from_rgba_image(image::imageops::resize(
                &region.to_rgba_image(),
                dst_rect.width,
                dst_rect.height,
                image::imageops::FilterType::Triangle,
            ))
        };

        let target = dst_rect.clip_to(self.canvas());
        if target.is_empty() {
            return Ok(());
        }
        let visible = region.region(PixelRect::new(
            target.x - dst_rect.x,
            target.y - dst_rect.y,
            target.width,
            target.height,
        ));
        let mut under = self.main.region(target);
        over_in_place(under.as_bytes_mut(), visible.as_bytes())?;
        self.main.put(&under, target.x, target.y);
        Ok(())
    }

    /// Composite the scratch buffer onto main and clear scratch.
    pub fn merge_scratch(&mut self) -> EditorResult<()> {
        over_in_place(self.main.as_bytes_mut(), self.scratch.as_bytes())?;
        self.clear(Layer::Scratch);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
