//! Recent-search tracking
//!
//! A bounded, deduplicated, most-recent-first list of submitted search terms.

use serde::{Deserialize, Serialize};

/// Maximum number of recent searches kept
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Most-recent-first list of distinct search terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearches {
    terms: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new list with `term` promoted to the front.
    ///
    /// Any existing occurrence is removed first, then the list is truncated
    /// to `MAX_RECENT_SEARCHES`. Matching is exact: "Cake" and "cake" are
    /// distinct entries.
    pub fn record(&self, term: &str) -> Self {
        let terms = std::iter::once(term.to_string())
            .chain(self.terms.iter().filter(|existing| existing.as_str() != term).cloned())
            .take(MAX_RECENT_SEARCHES)
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RecentSearches {
    /// Replay terms oldest-first through `record`
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |recent, term| recent.record(term.as_ref()))
    }
}
