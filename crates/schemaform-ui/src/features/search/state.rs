//! Search bar state for table toolbars.
//!
//! # Design
//! - Keep local text for immediate typing feedback.
//! - Typing goes through a debounce; clearing bypasses it and cancels any
//!   pending emission.
//! - Focus only affects presentation.

use crate::core::debounce::{DebounceTicket, Debounced};
use schemaform_config::SearchSettings;
use tracing::debug;

/// Search intent handed to the table's data loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchQuery {
    /// Filter by the given non-empty text.
    Text(String),
    /// No filter.
    Cleared,
}

impl SearchQuery {
    /// Map raw input text to an intent; only empty text means no filter.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Self::Cleared
        } else {
            Self::Text(text.to_string())
        }
    }

    /// Filter text, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Cleared => None,
        }
    }
}

/// Where the bar is in its typing cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// No text and nothing pending.
    Empty,
    /// Waiting for the quiet period after a keystroke.
    Typing,
    /// The current text has been emitted.
    Committed,
}

/// Local state behind the search input.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchBarState {
    text: String,
    active: bool,
    pending: Debounced<SearchQuery>,
}

impl SearchBarState {
    /// Idle bar with the configured quiet period.
    #[must_use]
    pub fn new(settings: &SearchSettings) -> Self {
        Self::with_delay(settings.debounce_ms)
    }

    /// Idle bar with an explicit quiet period.
    #[must_use]
    pub const fn with_delay(delay_ms: u32) -> Self {
        Self {
            text: String::new(),
            active: false,
            pending: Debounced::new(delay_ms),
        }
    }

    /// Current input text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the input has focus.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the clear affordance should be shown.
    #[must_use]
    pub fn shows_clear(&self) -> bool {
        !self.text.is_empty()
    }

    /// Current phase of the typing cycle.
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.pending.is_pending() {
            SearchPhase::Typing
        } else if self.text.is_empty() {
            SearchPhase::Empty
        } else {
            SearchPhase::Committed
        }
    }

    /// Record a keystroke and restart the quiet period.
    pub fn input(&mut self, text: impl Into<String>, now_ms: u64) -> DebounceTicket {
        self.text = text.into();
        self.pending
            .schedule(SearchQuery::from_text(&self.text), now_ms)
    }

    /// Emit the pending query once its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<SearchQuery> {
        let query = self.pending.poll(now_ms)?;
        debug!(cleared = query.as_text().is_none(), "search query settled");
        Some(query)
    }

    /// Emit the pending query from a timer carrying `ticket`.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<SearchQuery> {
        let query = self.pending.fire(ticket)?;
        debug!(cleared = query.as_text().is_none(), "search query settled");
        Some(query)
    }

    /// Reset the text and emit [`SearchQuery::Cleared`] right away.
    pub fn clear(&mut self) -> SearchQuery {
        self.text.clear();
        if self.pending.cancel().is_some() {
            debug!("cleared search with a pending query");
        }
        SearchQuery::Cleared
    }

    /// Drop any pending emission, e.g. when the bar unmounts.
    pub fn cancel_pending(&mut self) {
        self.pending.cancel();
    }

    /// Input gained focus.
    pub const fn focus(&mut self) {
        self.active = true;
    }

    /// Input lost focus.
    pub const fn blur(&mut self) {
        self.active = false;
    }
}
