//! Newest-first command history with a navigation cursor.
//!
//! The cursor is `None` while the user is typing free text and
//! `Some(index)` while browsing. Navigating past the newest entry
//! leaves browsing mode and restores a blank buffer.

/// Default bound on retained entries; oldest entries are dropped first.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// History navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward older entries (up arrow).
    Older,
    /// Toward newer entries (down arrow).
    Newer,
}

/// Ordered history of submitted command lines, newest first.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: Option<usize>,
    max_entries: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// History bounded at [`DEFAULT_MAX_ENTRIES`].
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// History bounded at `max_entries`.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_entries,
        }
    }

    /// Record a submitted line as the newest entry and leave browsing
    /// mode. Entries past the bound fall off the old end.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.insert(0, line.into());
        self.entries.truncate(self.max_entries);
        self.cursor = None;
    }

    /// Move the cursor and return the text the input buffer should now
    /// hold: a history entry, an empty string when leaving browsing
    /// mode, or `None` when the cursor cannot move.
    pub fn navigate(&mut self, direction: Direction) -> Option<String> {
        match direction {
            Direction::Older => {
                let next = self.cursor.map_or(0, |c| c + 1);
                if next < self.entries.len() {
                    self.cursor = Some(next);
                    Some(self.entries[next].clone())
                } else {
                    None
                }
            }
            Direction::Newer => match self.cursor {
                Some(0) => {
                    self.cursor = None;
                    Some(String::new())
                }
                Some(c) => {
                    self.cursor = Some(c - 1);
                    Some(self.entries[c - 1].clone())
                }
                None => None,
            },
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current cursor position, if browsing.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
