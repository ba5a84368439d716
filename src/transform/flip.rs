use crate::raster::buffer::PixelBuffer;

/// Mirror direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipAxis {
    /// Mirror left-right about the vertical centerline.
    Horizontal,
    /// Mirror top-bottom about the horizontal centerline.
    Vertical,
}

impl FlipAxis {
    /// Tag used in logs and scripts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Pure reflection; dimensions are unchanged.
pub fn flip(buf: &PixelBuffer, axis: FlipAxis) -> PixelBuffer {
    let img = buf.to_rgba_image();
    let out = match axis {
        FlipAxis::Horizontal => image::imageops::flip_horizontal(&img),
        FlipAxis::Vertical => image::imageops::flip_vertical(&img),
    };
    PixelBuffer::from_rgba_image(out)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/flip.rs"]
mod tests;
