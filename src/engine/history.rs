//! Session history
//!
//! An append-only log of successful evaluations. Entries are never mutated,
//! truncated, or deduplicated, and the log is not persisted across sessions.

/// One successful evaluation: the original line and the value it produced
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: f64,
}

/// Append-only log of successful evaluations
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&mut self, expression: &str, result: f64) {
        self.entries.push(HistoryEntry {
            expression: expression.to_string(),
            result,
        });
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in evaluation order, 1-indexed for display.
    ///
    /// The iterator is lazy and restartable: each call starts over from the
    /// first entry.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }
}
