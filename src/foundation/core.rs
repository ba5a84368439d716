use crate::foundation::error::{EditorError, EditorResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> EditorResult<Self> {
        if width == 0 || height == 0 {
            return Err(EditorError::validation("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn area(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// Integer pixel rectangle, `x`/`y` at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Construct a rectangle from its corner and size.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole canvas.
    pub fn full(canvas: Canvas) -> Self {
        Self::new(0, 0, canvas.width, canvas.height)
    }

    /// Exclusive right edge.
    pub fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Return `true` when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersect with a canvas, dropping whatever falls outside it.
    pub fn clip_to(self, canvas: Canvas) -> Self {
        let x = self.x.min(canvas.width);
        let y = self.y.min(canvas.height);
        Self {
            x,
            y,
            width: self.right().min(canvas.width) - x,
            height: self.bottom().min(canvas.height) - y,
        }
    }

    /// Center point in floating-point surface coordinates.
    pub fn center(self) -> Point {
        Point::new(
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// Convert into a `kurbo` rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.right()),
            f64::from(self.bottom()),
        )
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black, the default text color.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build from a `[r, g, b, a]` array.
    pub fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> EditorResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(EditorError::validation(format!("invalid hex color '{s}'")));
        }

        fn byte(h: &str) -> Option<u8> {
            u8::from_str_radix(h, 16).ok()
        }
        fn nibble(h: &str) -> Option<u8> {
            byte(h).map(|v| v * 17)
        }

        let parsed = match hex.len() {
            3 => nibble(&hex[0..1])
                .zip(nibble(&hex[1..2]))
                .zip(nibble(&hex[2..3]))
                .map(|((r, g), b)| Self::rgb(r, g, b)),
            6 => byte(&hex[0..2])
                .zip(byte(&hex[2..4]))
                .zip(byte(&hex[4..6]))
                .map(|((r, g), b)| Self::rgb(r, g, b)),
            8 => byte(&hex[0..2])
                .zip(byte(&hex[2..4]))
                .zip(byte(&hex[4..6]))
                .zip(byte(&hex[6..8]))
                .map(|(((r, g), b), a)| Self { r, g, b, a }),
            _ => None,
        };
        parsed.ok_or_else(|| EditorError::validation(format!("invalid hex color '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
