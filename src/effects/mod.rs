//! Whole-image pixel effects.

/// Named per-pixel color filters.
pub mod filter;
