/// Convenience result type used across the editor.
pub type EditorResult<T> = Result<T, EditorError>;

/// Top-level error type for editor operations that can genuinely fail.
///
/// Missing inputs and unparseable parameters are not errors: the editor treats those as no-ops or
/// falls back to defaults. This type covers decoding, encoding, font handling and option checks.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// Invalid options or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The main buffer could not be encoded for export.
    #[error("encode error: {0}")]
    Encode(String),

    /// Font registration, shaping or glyph rasterization failed.
    #[error("glyph error: {0}")]
    Glyph(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EditorError {
    /// Build an [`EditorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EditorError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an [`EditorError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`EditorError::Glyph`] value.
    pub fn glyph(msg: impl Into<String>) -> Self {
        Self::Glyph(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
