use crate::core::filters::matches_query;
use crate::models::{SearchMode, SearchResult};

/// Default number of results shown in the autocomplete dropdown
pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Result of a search
#[derive(Debug)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    /// Number of matching candidates before the dropdown cap was applied
    pub total_matches: usize,
}

impl SearchOutcome {
    fn empty() -> Self {
        Self {
            results: Vec::new(),
            total_matches: 0,
        }
    }
}

/// Free-text search over merged candidates
///
/// # Pipeline
/// 1. Empty query short-circuits to no results
/// 2. Case-insensitive substring filter on each kind's title and subtitle
/// 3. Dropdown mode truncates to `max_results`, keeping merge order
#[derive(Debug, Clone)]
pub struct Searcher {
    max_results: usize,
}

impl Searcher {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Filter `candidates` against `query`
    ///
    /// An empty query yields no results rather than every candidate, so the
    /// caller can tell "nothing typed yet" apart from "no matches".
    pub fn search(
        &self,
        query: &str,
        candidates: Vec<SearchResult>,
        mode: SearchMode,
    ) -> SearchOutcome {
        if query.is_empty() {
            return SearchOutcome::empty();
        }

        let lowered = query.to_lowercase();

        let mut results: Vec<SearchResult> = candidates
            .into_iter()
            .filter(|candidate| matches_query(candidate, &lowered))
            .collect();

        let total_matches = results.len();

        if mode == SearchMode::Dropdown {
            results.truncate(self.max_results);
        }

        SearchOutcome {
            results,
            total_matches,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, ResourceKind};
    use serde_json::json;

    fn candidate(kind: ResourceKind, id: &str, title: &str) -> SearchResult {
        let descriptor = kind.descriptor();
        let mut map = serde_json::Map::new();
        map.insert("_id".to_string(), json!(id));
        map.insert(descriptor.title_field.to_string(), json!(title));
        SearchResult::new(kind, Record::from(map))
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let searcher = Searcher::default();
        let candidates = vec![candidate(ResourceKind::Hotel, "h1", "Seaside Inn")];

        let outcome = searcher.search("", candidates, SearchMode::Full);

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.total_matches, 0);
    }

    #[test]
    fn test_dropdown_cap_preserves_order() {
        let searcher = Searcher::default();
        let candidates: Vec<SearchResult> = (0..12)
            .map(|i| candidate(ResourceKind::Tour, &format!("t{}", i), "family"))
            .collect();

        let outcome = searcher.search("fam", candidates, SearchMode::Dropdown);

        assert_eq!(outcome.results.len(), 8);
        assert_eq!(outcome.total_matches, 12);
        assert_eq!(outcome.results[0].data.id(), Some("t0"));
        assert_eq!(outcome.results[7].data.id(), Some("t7"));
    }

    #[test]
    fn test_full_mode_is_uncapped() {
        let searcher = Searcher::default();
        let candidates: Vec<SearchResult> = (0..12)
            .map(|i| candidate(ResourceKind::Tour, &format!("t{}", i), "family"))
            .collect();

        let outcome = searcher.search("fam", candidates, SearchMode::Full);

        assert_eq!(outcome.results.len(), 12);
    }

    #[test]
    fn test_custom_cap() {
        let searcher = Searcher::new(3);
        let candidates: Vec<SearchResult> = (0..5)
            .map(|i| candidate(ResourceKind::Hotel, &format!("h{}", i), "Inn"))
            .collect();

        let outcome = searcher.search("inn", candidates, SearchMode::Dropdown);

        assert_eq!(outcome.results.len(), 3);
    }

    #[test]
    fn test_whitespace_query_is_searched() {
        let searcher = Searcher::default();
        let candidates = vec![
            candidate(ResourceKind::Hotel, "h1", "Seaside Inn"),
            candidate(ResourceKind::Hotel, "h2", "Grand"),
        ];

        let outcome = searcher.search(" ", candidates, SearchMode::Full);

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].data.id(), Some("h1"));
    }
}
