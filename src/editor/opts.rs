use std::time::Duration;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{EditorError, EditorResult};
use crate::history::log::DEFAULT_HISTORY_CAP;
use crate::path::simplify::PATH_TEXT_TOLERANCE;
use crate::transform::crop::MIN_CROP_SIZE;

/// Largest surface side the CPU rasterizer accepts.
pub const MAX_SURFACE_SIDE: u32 = u16::MAX as u32;

/// Editor configuration. Every field has a default; unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorOpts {
    /// Surface width used for new sessions and image uploads, at most [`MAX_SURFACE_SIDE`].
    pub width: u32,
    /// Surface height used for new sessions and image uploads, at most [`MAX_SURFACE_SIDE`].
    pub height: u32,
    /// Maximum number of undo entries.
    pub history_cap: usize,
    /// Quiet window before a parameter change redraws the path text.
    pub debounce_ms: u64,
    /// Simplifier tolerance applied to strokes before placing glyphs.
    pub simplify_tolerance: f64,
    /// Smallest crop edge.
    pub min_crop_size: u32,
    /// Initial crop square as a fraction of the content's shorter side.
    pub initial_crop_fraction: f64,
    /// Fill behind letterboxed uploads. `None` leaves the margins transparent.
    pub background: Option<Rgba8>,
}

impl Default for EditorOpts {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            history_cap: DEFAULT_HISTORY_CAP,
            debounce_ms: 16,
            simplify_tolerance: PATH_TEXT_TOLERANCE,
            min_crop_size: MIN_CROP_SIZE,
            initial_crop_fraction: 0.8,
            background: None,
        }
    }
}

impl EditorOpts {
    /// Reject sizes and tolerances the editor cannot work with.
    pub fn validate(&self) -> EditorResult<()> {
        Canvas::new(self.width, self.height)?;
        if self.width > MAX_SURFACE_SIDE || self.height > MAX_SURFACE_SIDE {
            return Err(EditorError::validation(format!(
                "surface {}x{} exceeds {MAX_SURFACE_SIDE} px per side",
                self.width, self.height
            )));
        }
        if self.history_cap == 0 {
            return Err(EditorError::validation("history_cap must be > 0"));
        }
        if !self.simplify_tolerance.is_finite() || self.simplify_tolerance < 0.0 {
            return Err(EditorError::validation(
                "simplify_tolerance must be finite and >= 0",
            ));
        }
        if self.min_crop_size == 0 {
            return Err(EditorError::validation("min_crop_size must be > 0"));
        }
        if !(self.initial_crop_fraction > 0.0 && self.initial_crop_fraction <= 1.0) {
            return Err(EditorError::validation(
                "initial_crop_fraction must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Configured surface size.
    pub fn canvas(&self) -> EditorResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Quiet window as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parse and validate options from JSON.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let opts: Self = serde_json::from_str(json)
            .map_err(|e| EditorError::validation(format!("invalid editor options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/opts.rs"]
mod tests;
