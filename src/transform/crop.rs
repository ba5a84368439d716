use crate::foundation::core::{Canvas, PixelRect, Point};
use crate::raster::buffer::PixelBuffer;

/// Smallest crop edge in pixels.
pub const MIN_CROP_SIZE: u32 = 50;

/// Clamp a requested rectangle into `canvas`.
///
/// Width and height are held at `min_size` or above (or the canvas extent when the canvas is
/// smaller), then the corner is pulled back so the rectangle stays inside the canvas.
pub fn clamp_crop_rect(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    canvas: Canvas,
    min_size: u32,
) -> PixelRect {
    let (x, width) = clamp_axis(x, width, canvas.width, min_size);
    let (y, height) = clamp_axis(y, height, canvas.height, min_size);
    PixelRect::new(x, y, width, height)
}

fn clamp_axis(pos: f64, len: f64, extent: u32, min_size: u32) -> (u32, u32) {
    let min_len = min_size.min(extent);
    let len = if len.is_finite() {
        len.round().clamp(f64::from(min_len), f64::from(extent)) as u32
    } else {
        min_len
    };
    let max_pos = extent - len;
    let pos = if pos.is_finite() {
        pos.round().clamp(0.0, f64::from(max_pos)) as u32
    } else {
        0
    };
    (pos, len)
}

/// Extract a pre-clamped rectangle into a new buffer of exactly its size.
pub fn crop(buf: &PixelBuffer, rect: PixelRect) -> PixelBuffer {
    buf.region(rect)
}

/// Part of the crop box grabbed by the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropHandle {
    /// Top-left corner.
    Nw,
    /// Top edge.
    N,
    /// Top-right corner.
    Ne,
    /// Right edge.
    E,
    /// Bottom-right corner.
    Se,
    /// Bottom edge.
    S,
    /// Bottom-left corner.
    Sw,
    /// Left edge.
    W,
    /// The box itself; dragging moves it without resizing.
    Body,
}

impl CropHandle {
    /// New `(left, top, width, height)` for a drag of `(dx, dy)` from `start`.
    fn apply(self, start: PixelRect, dx: f64, dy: f64) -> (f64, f64, f64, f64) {
        let (l, t) = (f64::from(start.x), f64::from(start.y));
        let (w, h) = (f64::from(start.width), f64::from(start.height));
        match self {
            Self::Nw => (l + dx, t + dy, w - dx, h - dy),
            Self::N => (l, t + dy, w, h - dy),
            Self::Ne => (l, t + dy, w + dx, h - dy),
            Self::E => (l, t, w + dx, h),
            Self::Se => (l, t, w + dx, h + dy),
            Self::S => (l, t, w, h + dy),
            Self::Sw => (l + dx, t, w - dx, h + dy),
            Self::W => (l + dx, t, w - dx, h),
            Self::Body => (l + dx, t + dy, w, h),
        }
    }
}

/// An in-progress pointer drag on the crop box. Held from pointer-down until pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropDrag {
    handle: CropHandle,
    pointer_start: Point,
    rect_start: PixelRect,
}

/// Interactive crop state between "start crop" and "apply"/"cancel".
#[derive(Clone, Debug, PartialEq)]
pub struct CropSession {
    canvas: Canvas,
    min_size: u32,
    rect: PixelRect,
    drag: Option<CropDrag>,
}

impl CropSession {
    /// Open a session with a centered square covering `fraction` of the content's shorter side.
    pub fn start(canvas: Canvas, content: PixelRect, fraction: f64, min_size: u32) -> Self {
        let side = f64::from(content.width.min(content.height)) * fraction;
        let x = f64::from(content.x) + (f64::from(content.width) - side) / 2.0;
        let y = f64::from(content.y) + (f64::from(content.height) - side) / 2.0;
        Self {
            canvas,
            min_size,
            rect: clamp_crop_rect(x, y, side, side, canvas, min_size),
            drag: None,
        }
    }

    /// Current clamped crop rectangle.
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Return `true` while a pointer drag is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Replace the rectangle directly (clamped).
    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.rect = clamp_crop_rect(x, y, width, height, self.canvas, self.min_size);
    }

    /// Pointer-down on a handle or the box body.
    pub fn begin_drag(&mut self, handle: CropHandle, pointer: Point) {
        self.drag = Some(CropDrag {
            handle,
            pointer_start: pointer,
            rect_start: self.rect,
        });
    }

    /// Pointer-move while dragging; ignored when no drag is active.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let delta = pointer - drag.pointer_start;
        let (x, y, w, h) = drag.handle.apply(drag.rect_start, delta.x, delta.y);
        self.set_rect(x, y, w, h);
    }

    /// Pointer-up: release the drag.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/crop.rs"]
mod tests;
