use crate::core::navigator::{NavigationError, Navigator, Router};
use crate::core::searcher::Searcher;
use crate::models::{ResultRow, SearchMode, SearchResult};

/// Visibility of the autocomplete dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
}

/// Autocomplete search box
///
/// Starts closed. Only focus opens it; every keystroke re-filters the
/// candidates, and an outside click, blur or selection closes it again.
/// Selecting a result navigates and clears the query.
#[derive(Debug, Clone)]
pub struct SearchBox {
    state: DropdownState,
    query: String,
    results: Vec<SearchResult>,
    searcher: Searcher,
    navigator: Navigator,
}

impl SearchBox {
    pub fn new(searcher: Searcher, navigator: Navigator) -> Self {
        Self {
            state: DropdownState::Closed,
            query: String::new(),
            results: Vec::new(),
            searcher,
            navigator,
        }
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Rows to display; empty while closed
    pub fn rows(&self) -> Vec<ResultRow> {
        if self.is_open() {
            self.navigator.render_all(&self.results)
        } else {
            Vec::new()
        }
    }

    pub fn focus(&mut self) {
        self.state = DropdownState::Open;
    }

    /// Replace the query text and re-filter against the current candidates
    ///
    /// Does not open a closed box; results show up once it is focused.
    pub fn input(&mut self, text: impl Into<String>, candidates: Vec<SearchResult>) {
        self.query = text.into();
        self.refilter(candidates);
    }

    /// Re-run the current query, e.g. after another resource list arrived
    pub fn refilter(&mut self, candidates: Vec<SearchResult>) {
        self.results = self
            .searcher
            .search(&self.query, candidates, SearchMode::Dropdown)
            .results;
    }

    pub fn outside_click(&mut self) {
        self.state = DropdownState::Closed;
    }

    pub fn blur(&mut self) {
        self.state = DropdownState::Closed;
    }

    /// Navigate to the result at `index`, then clear the query and close
    ///
    /// On error nothing is navigated and the box is left as it was.
    pub fn select<R: Router>(
        &mut self,
        index: usize,
        router: &mut R,
    ) -> Result<String, NavigationError> {
        let result = self
            .results
            .get(index)
            .ok_or(NavigationError::OutOfRange(index))?;
        let route = self.navigator.select(result)?;

        router.navigate(&route);

        self.query.clear();
        self.results.clear();
        self.state = DropdownState::Closed;

        Ok(route)
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new(Searcher::default(), Navigator::default())
    }
}
