//! Bounded undo/redo log of full-buffer snapshots.

/// History entries, the cursor and the adjust-text collapse.
pub mod log;
