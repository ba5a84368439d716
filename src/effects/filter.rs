use rayon::prelude::*;

use crate::foundation::error::{EditorError, EditorResult};
use crate::foundation::math::clamp_u8;
use crate::raster::buffer::PixelBuffer;

/// Named pixel-wise color filter. Dimensions never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Mean of the three channels.
    Grayscale,
    /// Classic sepia matrix.
    Sepia,
    /// Red up, blue down.
    Warm,
    /// Red down, blue up.
    Cool,
    /// Channels bleed into each other for a faded print look.
    Vintage,
    /// Brighter color at 80% alpha.
    Fade,
    /// Channels scaled by 1.2.
    Bright,
    /// Channels scaled by 0.8.
    Dark,
    /// Strong red boost, green and blue dimmed.
    Dramatic,
}

impl Filter {
    /// Every filter, in menu order.
    pub const ALL: [Self; 9] = [
        Self::Grayscale,
        Self::Sepia,
        Self::Warm,
        Self::Cool,
        Self::Vintage,
        Self::Fade,
        Self::Bright,
        Self::Dark,
        Self::Dramatic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Vintage => "vintage",
            Self::Fade => "fade",
            Self::Bright => "bright",
            Self::Dark => "dark",
            Self::Dramatic => "dramatic",
        }
    }

    /// Map one straight-alpha pixel. Channels not named by the filter pass through.
    pub fn map_pixel(self, px: [u8; 4]) -> [u8; 4] {
        let [r, g, b, a] = px.map(f64::from);
        let out = match self {
            Self::Grayscale => {
                let avg = (r + g + b) / 3.0;
                [avg, avg, avg, a]
            }
            Self::Sepia => [
                r * 0.393 + g * 0.769 + b * 0.189,
                r * 0.349 + g * 0.686 + b * 0.168,
                r * 0.272 + g * 0.534 + b * 0.131,
                a,
            ],
            Self::Warm => [r * 1.1, g, b * 0.9, a],
            Self::Cool => [r * 0.9, g, b * 1.1, a],
            Self::Vintage => [r * 0.9 + g * 0.1, g * 0.8 + b * 0.2, b * 0.7 + r * 0.3, a],
            Self::Fade => [r * 1.2, g * 1.2, b * 1.2, a * 0.8],
            Self::Bright => [r * 1.2, g * 1.2, b * 1.2, a],
            Self::Dark => [r * 0.8, g * 0.8, b * 0.8, a],
            Self::Dramatic => [r * 1.5, g * 0.8, b * 0.8, a],
        };
        out.map(clamp_u8)
    }

    /// Apply in place to every pixel of `buf`.
    pub fn apply(self, buf: &mut PixelBuffer) {
        buf.as_bytes_mut().par_chunks_exact_mut(4).for_each(|px| {
            let mapped = self.map_pixel([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&mapped);
        });
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Filter {
    type Err = EditorError;

    fn from_str(s: &str) -> EditorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| EditorError::validation(format!("unknown filter \"{s}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/filter.rs"]
mod tests;
