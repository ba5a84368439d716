use std::collections::VecDeque;
use std::sync::Arc;
use std::time::SystemTime;

use crate::path::stroke::StrokePath;
use crate::raster::buffer::PixelBuffer;

/// Default number of entries kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAP: usize = 20;

/// Tag naming the edit that produced a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// An image was letterboxed onto the surface.
    UploadImage,
    /// A stroke was finished and text laid along it.
    AddPathText,
    /// The path text string changed.
    UpdatePathText,
    /// A parameter drag ended.
    AdjustText,
    /// Canvas as it was when a parameter drag began.
    AdjustTextStart,
    Crop,
    Rotate,
    Flip,
    Filter,
}

impl Action {
    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UploadImage => "uploadImage",
            Self::AddPathText => "addPathText",
            Self::UpdatePathText => "updatePathText",
            Self::AdjustText => "adjustText",
            Self::AdjustTextStart => "adjustTextStart",
            Self::Crop => "crop",
            Self::Rotate => "rotate",
            Self::Flip => "flip",
            Self::Filter => "filter",
        }
    }
}

/// Main buffer and path captured at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Main layer pixels.
    pub buffer: Arc<PixelBuffer>,
    /// Path the text was laid along, if any.
    pub path: Option<StrokePath>,
}

impl Snapshot {
    /// Capture copies of `buffer` and `path`.
    pub fn capture(buffer: &PixelBuffer, path: Option<&StrokePath>) -> Self {
        Self {
            buffer: Arc::new(buffer.clone()),
            path: path.cloned(),
        }
    }
}

/// One immutable undo step.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub action: Action,
    pub snapshot: Snapshot,
    /// Wall-clock time of the record.
    pub timestamp: SystemTime,
}

/// Ordered snapshots plus a cursor pointing at the entry that matches the canvas.
///
/// The cursor is `None` only while the log is empty. Recording after an undo drops every entry
/// past the cursor; recording beyond the cap evicts the oldest entry.
#[derive(Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    cursor: Option<usize>,
    cap: usize,
    staged: Option<Snapshot>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}

impl History {
    /// Empty log holding at most `cap` entries (at least one).
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            entries: VecDeque::with_capacity(cap),
            cursor: None,
            cap,
            staged: None,
        }
    }

    /// Number of stored entries, including any redo branch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Index of the entry matching the canvas.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entry under the cursor.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    /// An older entry exists before the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|i| i > 0)
    }

    /// A newer entry exists after the cursor.
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|i| i + 1 < self.entries.len())
    }

    /// Hold the pre-drag snapshot consumed by the next [`Action::AdjustText`] record.
    pub fn stage_initial(&mut self, snapshot: Snapshot) {
        self.staged = Some(snapshot);
    }

    /// Drop a staged snapshot without recording it.
    pub fn clear_staged(&mut self) {
        self.staged = None;
    }

    pub fn staged(&self) -> Option<&Snapshot> {
        self.staged.as_ref()
    }

    /// Push `snapshot` tagged `action`.
    ///
    /// For [`Action::AdjustText`] with a staged snapshot, trailing `updatePathText` entries are
    /// collapsed and the staged snapshot is pushed as `adjustTextStart` ahead of the final one.
    /// The staged snapshot is cleared afterwards in every case.
    pub fn record(&mut self, action: Action, snapshot: Snapshot, now: SystemTime) {
        self.truncate_after_cursor();

        let staged = self.staged.take();
        if let (Action::AdjustText, Some(start)) = (action, staged) {
            let mut collapsed = 0usize;
            while self.cursor.is_some_and(|i| i > 0)
                && self
                    .entries
                    .back()
                    .is_some_and(|e| e.action == Action::UpdatePathText)
            {
                self.entries.pop_back();
                self.cursor = self.cursor.map(|i| i - 1);
                collapsed += 1;
            }
            tracing::debug!(collapsed, "history adjust-text collapse");
            self.push(Action::AdjustTextStart, start, now);
        }

        self.push(action, snapshot, now);
    }

    /// Move the cursor back one step and return the entry to restore.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.cursor = self.cursor.map(|i| i - 1);
        self.current()
    }

    /// Move the cursor forward one step and return the entry to restore.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.cursor = self.cursor.map(|i| i + 1);
        self.current()
    }

    fn truncate_after_cursor(&mut self) {
        let keep = self.cursor.map_or(0, |i| i + 1);
        if keep < self.entries.len() {
            tracing::debug!(
                dropped = self.entries.len() - keep,
                "history redo branch truncated"
            );
            self.entries.truncate(keep);
        }
    }

    fn push(&mut self, action: Action, snapshot: Snapshot, timestamp: SystemTime) {
        self.entries.push_back(HistoryEntry {
            action,
            snapshot,
            timestamp,
        });
        let mut cursor = self.entries.len() - 1;
        if self.entries.len() > self.cap {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(action = evicted.action.as_str(), "history evicted oldest");
            }
            cursor -= 1;
        }
        self.cursor = Some(cursor);
        tracing::debug!(
            action = action.as_str(),
            len = self.entries.len(),
            cursor,
            "history push"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/log.rs"]
mod tests;
