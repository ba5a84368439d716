use crate::foundation::core::Rgba8;
use crate::text::glyphs::TextStyle;

/// Text shown in the path-text input before the user types anything.
pub const DEFAULT_PATH_TEXT: &str = "🌟这是路径文字效果✨";
/// Text drawn when the input is empty.
pub const FALLBACK_PATH_TEXT: &str = "这是路径文字效果";
/// Font size used when the input does not parse to a positive integer.
pub const DEFAULT_FONT_SIZE: u32 = 20;
/// Spacing used when the input does not parse.
pub const DEFAULT_SPACING: f64 = 0.0;

/// Live path-text parameters, already resolved to usable values.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTextParams {
    /// Text repeated along the stroke. Never empty.
    pub text: String,
    /// Font size in pixels. Always positive.
    pub font_size: u32,
    /// Fill color.
    pub color: Rgba8,
    /// Extra spacing in tenths of the widest glyph; negative values overlap glyphs.
    pub spacing: f64,
}

impl Default for PathTextParams {
    fn default() -> Self {
        Self {
            text: DEFAULT_PATH_TEXT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: Rgba8::BLACK,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl PathTextParams {
    /// Style handed to the glyph rasterizer.
    pub fn style(&self) -> TextStyle {
        TextStyle {
            font_size: self.font_size as f32,
            color: self.color,
        }
    }

    /// Replace the text; empty input falls back to the placeholder.
    pub fn set_text(&mut self, raw: &str) {
        self.text = parse_text(raw);
    }

    /// Replace one parameter from its raw input string.
    pub fn apply(&mut self, change: &ParamChange) {
        match change {
            ParamChange::FontSize(raw) => self.font_size = parse_font_size(raw),
            ParamChange::Color(raw) => self.color = parse_color(raw),
            ParamChange::Spacing(raw) => self.spacing = parse_spacing(raw),
        }
    }
}

/// A raw parameter edit coming from the shell's inputs.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "param", content = "value", rename_all = "snake_case")]
pub enum ParamChange {
    /// Font size input.
    FontSize(String),
    /// Color input.
    Color(String),
    /// Spacing slider.
    Spacing(String),
}

/// Empty text falls back to [`FALLBACK_PATH_TEXT`].
pub fn parse_text(raw: &str) -> String {
    if raw.is_empty() {
        FALLBACK_PATH_TEXT.to_string()
    } else {
        raw.to_string()
    }
}

/// Parse the leading integer of `raw` (`"24px"` → 24); unparseable or zero input yields 20.
pub fn parse_font_size(raw: &str) -> u32 {
    let t = raw.trim_start();
    let (sign, digits) = match t.as_bytes().first() {
        Some(b'-') => (-1i64, &t[1..]),
        Some(b'+') => (1, &t[1..]),
        _ => (1, t),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits[..end].parse::<i64>() {
        Ok(v) if sign * v > 0 => u32::try_from(sign * v).unwrap_or(DEFAULT_FONT_SIZE),
        _ => DEFAULT_FONT_SIZE,
    }
}

/// Parse the leading float of `raw`; unparseable input yields 0.
pub fn parse_spacing(raw: &str) -> f64 {
    let t = raw.trim();
    // Longest prefix that parses, so "1.5px" reads as 1.5.
    (1..=t.len())
        .rev()
        .filter(|&i| t.is_char_boundary(i))
        .find_map(|i| t[..i].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_SPACING)
}

/// Parse a hex color; empty or malformed input yields black.
pub fn parse_color(raw: &str) -> Rgba8 {
    if raw.trim().is_empty() {
        return Rgba8::BLACK;
    }
    match Rgba8::from_hex(raw) {
        Ok(c) => c,
        Err(err) => {
            tracing::debug!(%err, "falling back to default text color");
            Rgba8::BLACK
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/params.rs"]
mod tests;
