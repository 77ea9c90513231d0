// Chunk: docs/chunks/query_debounce - Debounced query commits
//!
//! Debouncing logic for raw input text.
//!
//! When the input text changes, we wait for a brief period (the debounce window)
//! before committing it as the new query. If another change arrives within this
//! window, the timer resets. This coalesces a burst of keystrokes into a single
//! committed query while always landing on the value the user settled on.
//!
//! There is at most one pending value (and therefore one deadline) at a time.
//! Cancelling drops it and it never fires.

use std::time::{Duration, Instant};

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

#[derive(Debug, Clone)]
struct PendingQuery {
    text: String,
    changed_at: Instant,
}

/// Debounces raw input text into committed queries.
///
/// This is a pure data structure with no timers of its own, making it easy to
/// test. The host calls `register()` for every text change, asks
/// `next_deadline()` when to wake up, and calls `flush_ready()` once that
/// deadline has passed.
#[derive(Debug, Clone)]
pub struct InputDebouncer {
    /// The value waiting for its quiet period to elapse
    pending: Option<PendingQuery>,
    /// Most recent value seen (registered or reset), for deduplication
    last_seen: Option<String>,
    /// Debounce window duration
    debounce_duration: Duration,
}

impl InputDebouncer {
    /// Creates a new debouncer with the given debounce window.
    ///
    /// # Arguments
    ///
    /// * `debounce_ms` - The debounce window in milliseconds
    pub fn new(debounce_ms: u64) -> Self {
        Self::with_duration(Duration::from_millis(debounce_ms))
    }

    pub fn with_duration(debounce_duration: Duration) -> Self {
        Self {
            pending: None,
            last_seen: None,
            debounce_duration,
        }
    }

    /// Creates a new debouncer with the default debounce window (250ms).
    pub fn with_default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }

    pub fn debounce_duration(&self) -> Duration {
        self.debounce_duration
    }

    /// Activates the debouncer and returns the value to commit immediately.
    ///
    /// The initial value bypasses the debounce window. Any pending value is
    /// dropped. Returns the initial value (empty string when `None`).
    pub fn activate(&mut self, initial: Option<&str>) -> String {
        let initial = initial.unwrap_or_default().to_string();
        self.reset(&initial);
        initial
    }

    /// Forces the current value without waiting for the window.
    ///
    /// Cancels the pending value (it will not fire) and records `text` as the
    /// latest value so that re-registering it is treated as a duplicate.
    /// Returns true if a pending value was cancelled.
    pub fn reset(&mut self, text: &str) -> bool {
        let cancelled = self.pending.take().is_some();
        self.last_seen = Some(text.to_string());
        cancelled
    }

    /// Registers a raw text change.
    ///
    /// If `text` equals the most recent value seen, nothing happens and this
    /// returns false. Otherwise `text` becomes the pending value and the
    /// window restarts from `now`.
    ///
    /// This method does NOT return a value to commit - use `flush_ready()` for that.
    ///
    /// # Arguments
    ///
    /// * `text` - The full input text after the change
    /// * `now` - The current timestamp (passed in for testability)
    pub fn register(&mut self, text: &str, now: Instant) -> bool {
        if self.last_seen.as_deref() == Some(text) {
            return false;
        }
        self.last_seen = Some(text.to_string());
        self.pending = Some(PendingQuery {
            text: text.to_string(),
            changed_at: now,
        });
        true
    }

    /// Returns the pending value if its debounce window has expired.
    ///
    /// The returned value is removed from the pending slot.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp (passed in for testability)
    pub fn flush_ready(&mut self, now: Instant) -> Option<String> {
        let ready = match &self.pending {
            Some(pending) => now.duration_since(pending.changed_at) >= self.debounce_duration,
            None => false,
        };
        if ready {
            self.pending.take().map(|pending| pending.text)
        } else {
            None
        }
    }

    /// Cancels the pending value, returning it.
    ///
    /// The cancelled value never fires.
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|pending| pending.text)
    }

    /// Arms a fresh window for `text`, replacing any pending value.
    ///
    /// Unlike `register()`, this never deduplicates. Used to carry uncommitted
    /// input across a cancellation.
    pub fn schedule(&mut self, text: &str, now: Instant) {
        self.last_seen = Some(text.to_string());
        self.pending = Some(PendingQuery {
            text: text.to_string(),
            changed_at: now,
        });
    }

    /// Returns the instant at which the pending value becomes ready.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|pending| pending.changed_at + self.debounce_duration)
    }

    /// Returns the pending (not yet committed) value, if any.
    pub fn pending_text(&self) -> Option<&str> {
        self.pending.as_ref().map(|pending| pending.text.as_str())
    }

    /// Returns true if a value is waiting for its window to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for InputDebouncer {
    fn default() -> Self {
        Self::with_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_debouncer_has_nothing_pending() {
        let debouncer = InputDebouncer::new(250);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.next_deadline(), None);
    }

    #[test]
    fn test_default_window_is_250ms() {
        let debouncer = InputDebouncer::with_default();
        assert_eq!(debouncer.debounce_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_activate_returns_initial_value_immediately() {
        let mut debouncer = InputDebouncer::new(250);
        assert_eq!(debouncer.activate(Some("piz")), "piz");
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_activate_without_initial_value_returns_empty() {
        let mut debouncer = InputDebouncer::new(250);
        assert_eq!(debouncer.activate(None), "");
    }

    #[test]
    fn test_activated_value_is_deduplicated() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();
        debouncer.activate(Some("pi"));

        assert!(!debouncer.register("pi", now));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_single_change_not_emitted_immediately() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();

        debouncer.register("p", now);

        assert_eq!(debouncer.flush_ready(now), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_change_emitted_after_window() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();

        debouncer.register("p", now);

        let later = now + Duration::from_millis(250);
        assert_eq!(debouncer.flush_ready(later), Some("p".to_string()));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_rapid_changes_coalesce() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();

        debouncer.register("p", now);
        debouncer.register("pi", now + Duration::from_millis(80));
        debouncer.register("piz", now + Duration::from_millis(160));

        // 250ms after the first change, but only 90ms after the last one
        assert_eq!(debouncer.flush_ready(now + Duration::from_millis(250)), None);

        let ready = debouncer.flush_ready(now + Duration::from_millis(410));
        assert_eq!(ready, Some("piz".to_string()));
        assert_eq!(debouncer.flush_ready(now + Duration::from_millis(1000)), None);
    }

    #[test]
    fn test_duplicate_does_not_restart_window() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();

        assert!(debouncer.register("pi", now));
        assert!(!debouncer.register("pi", now + Duration::from_millis(200)));

        assert_eq!(debouncer.next_deadline(), Some(now + Duration::from_millis(250)));
        assert_eq!(
            debouncer.flush_ready(now + Duration::from_millis(250)),
            Some("pi".to_string())
        );
    }

    #[test]
    fn test_boundary_exactly_at_window() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();
        debouncer.register("p", now);
        assert!(debouncer.flush_ready(now + Duration::from_millis(250)).is_some());
    }

    #[test]
    fn test_just_before_window() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();
        debouncer.register("p", now);
        assert!(debouncer.flush_ready(now + Duration::from_millis(249)).is_none());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();
        debouncer.register("piz", now);

        assert_eq!(debouncer.cancel(), Some("piz".to_string()));
        assert_eq!(debouncer.flush_ready(now + Duration::from_secs(10)), None);
        assert_eq!(debouncer.cancel(), None);
    }

    #[test]
    fn test_reset_cancels_and_records_value() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();
        debouncer.register("piz", now);

        assert!(debouncer.reset("Pizza"));
        assert!(!debouncer.is_pending());
        // The forced value counts as seen
        assert!(!debouncer.register("Pizza", now));
        assert!(debouncer.register("Pizz", now));
    }

    #[test]
    fn test_schedule_restarts_window() {
        let mut debouncer = InputDebouncer::new(250);
        let now = Instant::now();
        debouncer.register("pi", now);
        let carried = debouncer.cancel().unwrap();

        let later = now + Duration::from_millis(200);
        debouncer.schedule(&carried, later);

        assert_eq!(debouncer.pending_text(), Some("pi"));
        assert_eq!(debouncer.next_deadline(), Some(later + Duration::from_millis(250)));
        assert!(debouncer.flush_ready(now + Duration::from_millis(250)).is_none());
    }

    #[test]
    fn test_flush_with_nothing_pending() {
        let mut debouncer = InputDebouncer::new(250);
        assert_eq!(debouncer.flush_ready(Instant::now()), None);
    }
}
