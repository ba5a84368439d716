use std::time::Duration;

/// Trailing-edge debounce driven by an explicit clock.
///
/// `schedule` replaces any pending payload and restarts the quiet window; `poll` hands the payload
/// back once the window has elapsed. Times are offsets from the session start.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending task and schedule `payload` to fire at `now + delay`.
    pub fn schedule(&mut self, now: Duration, payload: T) {
        self.pending = Some((now.saturating_add(self.delay), payload));
    }

    /// Take the pending payload if it is due at `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some((due, _)) if *due <= now => self.pending.take().map(|(_, p)| p),
            _ => None,
        }
    }

    /// Take the pending payload regardless of its due time.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(_, p)| p)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending payload becomes due.
    pub fn due_at(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(due, _)| *due)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/debounce.rs"]
mod tests;
