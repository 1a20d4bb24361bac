//! Canonical lookup paths and the navigation history they live in.
//!
//! The address line is modeled as a history stack with a cursor, matching
//! browser semantics: recording a location pushes an entry and drops any
//! forward entries, while back/forward only move the cursor. Recording
//! never produces a navigation event; traversal is what callers react to.

/// Canonical path when no identifier is selected.
pub const EMPTY_PATH: &str = "/order";

/// Canonical path for a non-empty identifier.
///
/// The identifier is embedded verbatim; escaping is the network boundary's
/// concern, not the address line's.
#[must_use]
pub fn canonical_path(identifier: &str) -> String {
    format!("/order/{identifier}")
}

/// Extracts the identifier from a canonical path.
///
/// Matches exactly three `/`-separated segments: a leading empty one, the
/// literal `order`, and a non-empty identifier. Anything else (the empty
/// path, trailing segments, other roots) yields `None`.
#[must_use]
pub fn identifier_from_path(path: &str) -> Option<&str> {
    let mut segments = path.split('/');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(""), Some("order"), Some(identifier), None) if !identifier.is_empty() => {
            Some(identifier)
        }
        _ => None,
    }
}

/// One recorded location: the path plus its associated identifier state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    /// Identifier carried as entry state; `None` for the empty path.
    pub identifier: Option<String>,
}

impl HistoryEntry {
    fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let identifier = identifier_from_path(&path).map(str::to_string);
        Self { path, identifier }
    }
}

/// Navigation history: a stack of entries and a cursor into it.
///
/// Always holds at least one entry (the initial location).
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Creates a history whose single entry is the given starting path.
    #[must_use]
    pub fn with_initial(path: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::from_path(path)],
            cursor: 0,
        }
    }

    /// Pushes a new entry after the cursor, dropping any forward entries.
    ///
    /// This is a local record only; it never triggers a navigation event.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Moves the cursor one entry back. Returns whether it moved.
    pub fn back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Moves the cursor one entry forward. Returns whether it moved.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// The entry under the cursor.
    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position, 0-based.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }
}

/// Keeps the address line in step with the identifier being looked up.
#[derive(Debug)]
pub struct UrlSynchronizer {
    history: History,
}

impl UrlSynchronizer {
    /// Creates a synchronizer whose address line starts at `path`.
    #[must_use]
    pub fn with_initial_path(path: impl Into<String>) -> Self {
        Self {
            history: History::with_initial(path),
        }
    }

    /// Records the canonical location for `identifier` (empty means the
    /// no-identifier path).
    ///
    /// Recording the location already under the cursor is a no-op, so
    /// reloading the current location does not pile up duplicate entries
    /// or destroy forward history.
    pub fn record(&mut self, identifier: &str) {
        let entry = if identifier.is_empty() {
            HistoryEntry {
                path: EMPTY_PATH.to_string(),
                identifier: None,
            }
        } else {
            HistoryEntry {
                path: canonical_path(identifier),
                identifier: Some(identifier.to_string()),
            }
        };
        if self.history.current().path != entry.path {
            self.history.push(entry);
        }
    }

    /// Current address-line path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.history.current().path
    }

    /// Identifier parsed out of the current path, if it is canonical.
    #[must_use]
    pub fn current_identifier(&self) -> Option<&str> {
        identifier_from_path(self.current_path())
    }

    /// Moves back one entry. Returns whether the cursor moved.
    pub fn back(&mut self) -> bool {
        self.history.back()
    }

    /// Moves forward one entry. Returns whether the cursor moved.
    pub fn forward(&mut self) -> bool {
        self.history.forward()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_path_embeds_identifier_verbatim() {
        assert_eq!(canonical_path("XYZ123"), "/order/XYZ123");
        assert_eq!(canonical_path("weird id"), "/order/weird id");
    }

    #[test]
    fn parse_accepts_exactly_three_segments() {
        assert_eq!(identifier_from_path("/order/XYZ123"), Some("XYZ123"));
    }

    #[test]
    fn parse_rejects_empty_path() {
        assert_eq!(identifier_from_path("/order"), None);
        assert_eq!(identifier_from_path("/order/"), None);
    }

    #[test]
    fn parse_rejects_trailing_segments() {
        assert_eq!(identifier_from_path("/order/XYZ123/extra"), None);
    }

    #[test]
    fn parse_rejects_other_roots() {
        assert_eq!(identifier_from_path("/"), None);
        assert_eq!(identifier_from_path(""), None);
        assert_eq!(identifier_from_path("/generate"), None);
        assert_eq!(identifier_from_path("order/XYZ123"), None);
    }

    #[test]
    fn push_truncates_forward_entries() {
        let mut history = History::with_initial(EMPTY_PATH);
        history.push(HistoryEntry::from_path("/order/A"));
        history.push(HistoryEntry::from_path("/order/B"));
        assert!(history.back());
        history.push(HistoryEntry::from_path("/order/C"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.current().path, "/order/C");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn back_and_forward_stay_in_bounds() {
        let mut history = History::with_initial(EMPTY_PATH);
        assert!(!history.back());

        history.push(HistoryEntry::from_path("/order/A"));
        assert!(history.back());
        assert_eq!(history.current().path, EMPTY_PATH);
        assert!(history.forward());
        assert_eq!(history.current().path, "/order/A");
        assert!(!history.forward());
    }

    #[test]
    fn entry_state_carries_identifier() {
        let entry = HistoryEntry::from_path("/order/A");
        assert_eq!(entry.identifier.as_deref(), Some("A"));
        let empty = HistoryEntry::from_path(EMPTY_PATH);
        assert_eq!(empty.identifier, None);
    }

    #[test]
    fn record_maps_empty_identifier_to_empty_path() {
        let mut url = UrlSynchronizer::with_initial_path("/order/A");
        url.record("");
        assert_eq!(url.current_path(), EMPTY_PATH);
        assert_eq!(url.current_identifier(), None);
    }

    #[test]
    fn record_same_location_is_a_no_op() {
        let mut url = UrlSynchronizer::with_initial_path(EMPTY_PATH);
        url.record("A");
        url.record("B");
        assert!(url.back());
        // Reloading the entry under the cursor must not eat forward history.
        url.record("A");
        assert_eq!(url.history().len(), 3);
        assert!(url.forward());
        assert_eq!(url.current_path(), "/order/B");
    }

    #[test]
    fn current_identifier_round_trips() {
        let mut url = UrlSynchronizer::with_initial_path(EMPTY_PATH);
        url.record("XYZ123");
        assert_eq!(url.current_identifier(), Some("XYZ123"));
    }
}
