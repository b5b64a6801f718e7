//! Debounced search controller.
//!
//! Keystrokes schedule through a [`Debouncer`]; each new keystroke cancels
//! the pending one, so only the most recent query fires. The fired query is
//! applied by the caller against the live record set, never a snapshot, so
//! deletes and edits landing during the quiet period are reflected.

use std::time::Duration;

use roster_states::{Debouncer, StateRuntime};

/// Quiet period after the last keystroke before a search executes.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(800);

/// Debounce wrapper owning the pending-search task.
pub struct SearchDebounce {
    debouncer: Debouncer<String>,
}

impl SearchDebounce {
    pub fn new() -> Self {
        Self {
            debouncer: Debouncer::new(SEARCH_QUIET_PERIOD),
        }
    }

    /// Called on every edit of the search field.
    pub fn keystroke(&mut self, runtime: &StateRuntime, query: impl Into<String>) {
        self.debouncer.schedule(runtime, query.into());
    }

    /// The query whose quiet period elapsed, if any. Call once per frame.
    pub fn poll(&mut self) -> Option<String> {
        self.debouncer.poll()
    }

    /// Drops any pending search.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new()
    }
}
