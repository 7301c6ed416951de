//! URL Synchronizer
//!
//! Keeps the in-memory [`SelectionState`] and the navigation history's query
//! string consistent. The query string is the source of truth for anything
//! shareable; the state held here is a decoded projection of it.
//!
//! Two directions:
//! - user action: [`UrlSync::dispatch`] reduces, stores, then publishes;
//! - external navigation (back/forward): [`UrlSync::on_external_navigation`]
//!   re-decodes and patches only the fields that differ, without publishing.

use super::query_string;
use super::selection::{apply, Action, SelectionState};

/// Navigation history the synchronizer publishes to.
///
/// `push` must add a history entry without reloading the document.
pub trait History {
    /// Current query string, with or without the leading `?`.
    fn current_query(&self) -> String;

    /// Push a new entry whose query string is `query` (no leading `?`,
    /// empty for the canonical default state).
    fn push(&mut self, query: &str);
}

impl<H: History + ?Sized> History for Box<H> {
    fn current_query(&self) -> String {
        (**self).current_query()
    }

    fn push(&mut self, query: &str) {
        (**self).push(query)
    }
}

/// In-memory history with back/forward stacks.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial_query: &str) -> Self {
        Self {
            entries: vec![strip_question_mark(initial_query).to_string()],
            cursor: 0,
        }
    }

    /// Step back one entry. Returns the query now current, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. Returns the query now current, or `None` at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Number of entries, including ones ahead of the cursor.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    fn current_query(&self) -> String {
        self.entries.get(self.cursor).cloned().unwrap_or_default()
    }

    fn push(&mut self, query: &str) {
        if self.entries.is_empty() {
            self.entries.push(query.to_string());
            self.cursor = 0;
            return;
        }
        // pushing discards the forward stack, like a browser
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query.to_string());
        self.cursor = self.entries.len() - 1;
    }
}

/// Fields updated by [`UrlSync::on_external_navigation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldChanges {
    pub genres: bool,
    pub year: bool,
    pub sort: bool,
    pub page: bool,
}

impl FieldChanges {
    /// Fields that differ between two selections.
    pub fn between(old: &SelectionState, new: &SelectionState) -> Self {
        Self {
            genres: !old.genres.iter().eq(new.genres.iter()),
            year: old.year != new.year,
            sort: old.sort != new.sort,
            page: old.page != new.page,
        }
    }

    pub fn any(&self) -> bool {
        self.genres || self.year || self.sort || self.page
    }
}

/// Owner of the current selection and its history.
#[derive(Debug)]
pub struct UrlSync<H: History> {
    state: SelectionState,
    history: H,
}

impl<H: History> UrlSync<H> {
    /// Decode the initial state from the history's current entry.
    pub fn new(history: H) -> Self {
        let state = query_string::decode(&history.current_query());
        log::debug!("Initial selection decoded: {state:?}");
        Self { state, history }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Canonical query string for the current state.
    pub fn canonical_query(&self) -> String {
        query_string::encode(&self.state)
    }

    /// Apply a user action. Publishes and returns `true` when the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = apply(&self.state, &action);
        if next == self.state {
            log::debug!("Action {action:?} left selection unchanged");
            return false;
        }
        self.state = next;
        self.publish();
        true
    }

    /// Push the encoded state unless the history already shows it.
    ///
    /// Calling this several times for one action pushes at most once.
    pub fn publish(&mut self) {
        let encoded = query_string::encode(&self.state);
        if strip_question_mark(&self.history.current_query()) == encoded {
            return;
        }
        log::debug!("Publishing query '{encoded}'");
        self.history.push(&encoded);
    }

    /// Re-synchronize after the URL changed underneath us.
    ///
    /// Only differing fields are written, and nothing is published.
    pub fn on_external_navigation(&mut self, query: &str) -> FieldChanges {
        let decoded = query_string::decode(query);
        let changes = FieldChanges::between(&self.state, &decoded);

        if changes.genres {
            self.state.genres = decoded.genres;
        }
        if changes.year {
            self.state.year = decoded.year;
        }
        if changes.sort {
            self.state.sort = decoded.sort;
        }
        if changes.page {
            self.state.page = decoded.page;
        }

        if changes.any() {
            log::debug!("External navigation updated selection: {changes:?}");
        }
        changes
    }
}

impl UrlSync<MemoryHistory> {
    /// Step the in-memory history back and re-synchronize.
    pub fn back(&mut self) -> Option<FieldChanges> {
        let query = self.history.back()?.to_string();
        Some(self.on_external_navigation(&query))
    }

    /// Step the in-memory history forward and re-synchronize.
    pub fn forward(&mut self) -> Option<FieldChanges> {
        let query = self.history.forward()?.to_string();
        Some(self.on_external_navigation(&query))
    }
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}
