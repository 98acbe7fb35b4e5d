//! Search dropdown state machine.

use tokio::time::Instant;

use super::{CACHE_TTL, DEBOUNCE, MIN_QUERY_CHARS, SearchCache};
use crate::client::ClientError;
use crate::dto::SearchResult;
use crate::routes::AppRoute;
use crate::text::to_title_case;

/// Keys handled while the dropdown is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    /// Next result, wrapping to the first.
    ArrowDown,
    /// Previous result, wrapping to the last.
    ArrowUp,
    /// Select the highlighted result.
    Enter,
    /// Close the dropdown.
    Escape,
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key does nothing in the current state.
    Ignored,
    /// The highlight moved.
    Moved,
    /// Enter picked the highlighted result.
    Selected(Selection),
    /// Escape closed the dropdown.
    Closed,
}

/// Request to fetch results for `query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommand {
    /// Tag echoed back to [`SearchSession::results_arrived`].
    pub generation: u64,
    /// Trimmed query text.
    pub query: String,
}

/// A chosen search hit and the page it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The hit as returned by the API.
    pub result: SearchResult,
    /// Page to navigate to; `None` for malformed hits.
    pub route: Option<AppRoute>,
}

/// What the dropdown body shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Query too short to search.
    #[default]
    Idle,
    /// First fetch for a query with nothing to show yet.
    Searching,
    /// The last fetch failed.
    Failed,
    /// The fetch succeeded with no rows.
    NoResults {
        /// Query echoed in the message.
        query: String,
    },
    /// Rows are listed.
    Results,
}

impl SearchStatus {
    /// Message rendered in place of the result list.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle | Self::Results => None,
            Self::Searching => Some("Searching campgrounds...".to_owned()),
            Self::Failed => Some("Failed to search campgrounds. Please try again.".to_owned()),
            Self::NoResults { query } => Some(format!(
                "No campgrounds found for \"{query}\". Try a different search term."
            )),
        }
    }
}

/// Snapshot rendered by the search bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchView {
    /// Text in the input box.
    pub input: String,
    /// Whether the dropdown is shown.
    pub open: bool,
    /// Dropdown body state.
    pub status: SearchStatus,
    /// Rows to list, possibly from the previous query.
    pub results: Vec<SearchResult>,
    /// Keyboard highlight index.
    pub highlighted: Option<usize>,
}

/// Type-ahead state: input text, debounce deadline, results and highlight.
///
/// Time is passed in explicitly so the machine can be driven by any clock.
pub struct SearchSession {
    input: String,
    query: String,
    deadline: Option<Instant>,
    open: bool,
    loading: bool,
    failed: bool,
    results: Vec<SearchResult>,
    highlighted: Option<usize>,
    generation: u64,
    cache: SearchCache,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

fn searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

impl SearchSession {
    /// Closed dropdown with an empty input and cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: String::new(),
            query: String::new(),
            deadline: None,
            open: false,
            loading: false,
            failed: false,
            results: Vec::new(),
            highlighted: None,
            generation: 0,
            cache: SearchCache::new(CACHE_TTL),
        }
    }

    /// Record a keystroke and restart the debounce window.
    ///
    /// The dropdown opens or closes right away from the trimmed input
    /// length; only the fetch waits for the window. Returns the instant at
    /// which [`Self::debounce_elapsed`] should run.
    pub fn input_changed(&mut self, text: impl Into<String>, now: Instant) -> Instant {
        self.input = text.into();
        if searchable(self.input.trim()) {
            self.open = true;
        } else {
            self.close();
        }
        let deadline = now + DEBOUNCE;
        self.deadline = Some(deadline);
        deadline
    }

    /// Pending debounce deadline, if a keystroke is waiting.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Settle the debounced query once the window has passed.
    ///
    /// Returns a command when results must be fetched. Short queries close
    /// the dropdown and fresh cache hits are applied directly.
    pub fn debounce_elapsed(&mut self, now: Instant) -> Option<SearchCommand> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;

        let query = self.input.trim().to_owned();
        if query != self.query {
            self.highlighted = None;
        }
        self.query = query;
        self.generation += 1;
        self.failed = false;

        if !searchable(&self.query) {
            self.open = false;
            self.loading = false;
            self.results.clear();
            return None;
        }

        self.open = true;
        if let Some(hit) = self.cache.get(&self.query, now) {
            self.results = hit.to_vec();
            self.loading = false;
            return None;
        }

        self.loading = true;
        Some(SearchCommand {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Apply a fetch outcome. Returns `false` when the response is stale.
    pub fn results_arrived(
        &mut self,
        generation: u64,
        outcome: Result<Vec<SearchResult>, ClientError>,
        now: Instant,
    ) -> bool {
        if generation != self.generation || !self.loading {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(results) => {
                self.cache.insert(&self.query, results.clone(), now);
                self.results = results;
                self.failed = false;
            }
            Err(_) => {
                self.results.clear();
                self.failed = true;
            }
        }
        if self
            .highlighted
            .is_some_and(|index| index >= self.results.len())
        {
            self.highlighted = None;
        }
        true
    }

    /// Handle a navigation key. Keys only act on an open, non-empty list.
    pub fn key(&mut self, key: NavigationKey) -> KeyOutcome {
        let count = self.results.len();
        if !self.open || count == 0 {
            return KeyOutcome::Ignored;
        }
        match key {
            NavigationKey::ArrowDown => {
                self.highlighted = Some(match self.highlighted {
                    Some(index) if index + 1 < count => index + 1,
                    _ => 0,
                });
                KeyOutcome::Moved
            }
            NavigationKey::ArrowUp => {
                self.highlighted = Some(match self.highlighted {
                    Some(index) if index > 0 => index - 1,
                    _ => count - 1,
                });
                KeyOutcome::Moved
            }
            NavigationKey::Enter => self
                .highlighted
                .and_then(|index| self.select(index))
                .map_or(KeyOutcome::Ignored, KeyOutcome::Selected),
            NavigationKey::Escape => {
                self.close();
                KeyOutcome::Closed
            }
        }
    }

    /// Choose the result at `index`.
    ///
    /// The input takes the title-cased display name and the dropdown closes
    /// without scheduling another search.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        let result = self.results.get(index)?.clone();
        self.input = to_title_case(result.display_name());
        self.deadline = None;
        self.close();
        let route = result.target_route();
        Some(Selection { result, route })
    }

    /// Pointer went down outside the search bar.
    pub fn click_outside(&mut self) {
        self.close();
    }

    /// The input regained focus.
    pub fn focus(&mut self) {
        if searchable(self.input.trim()) {
            self.open = true;
        }
    }

    fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SearchView {
        let status = if !searchable(&self.query) {
            SearchStatus::Idle
        } else if self.failed {
            SearchStatus::Failed
        } else if self.results.is_empty() && self.loading {
            SearchStatus::Searching
        } else if self.results.is_empty() {
            SearchStatus::NoResults {
                query: self.query.clone(),
            }
        } else {
            SearchStatus::Results
        };
        SearchView {
            input: self.input.clone(),
            open: self.open,
            status,
            results: self.results.clone(),
            highlighted: self.highlighted,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::dto::EntityType;

    fn hit(id: &str, name: &str) -> SearchResult {
        SearchResult {
            id: format!("1:campground:{id}"),
            entity_type: EntityType::Campground,
            provider_id: 1,
            provider_name: "RecreationDotGov".to_owned(),
            recreation_area_id: Some("2991".to_owned()),
            recreation_area_name: Some("Yosemite National Park".to_owned()),
            campground_id: Some(id.to_owned()),
            campground_name: Some(name.to_owned()),
        }
    }

    fn pines() -> Vec<SearchResult> {
        vec![
            hit("232450", "LOWER PINES"),
            hit("232449", "NORTH PINES"),
            hit("232447", "UPPER PINES"),
        ]
    }

    struct Clocked {
        session: SearchSession,
        now: Instant,
    }

    impl Clocked {
        fn type_and_settle(&mut self, text: &str) -> Option<SearchCommand> {
            self.session.input_changed(text, self.now);
            self.now += DEBOUNCE;
            self.session.debounce_elapsed(self.now)
        }
    }

    #[fixture]
    fn clocked() -> Clocked {
        Clocked {
            session: SearchSession::new(),
            now: Instant::now(),
        }
    }

    #[fixture]
    fn open_with_pines(mut clocked: Clocked) -> Clocked {
        let command = clocked.type_and_settle("pines").expect("search issued");
        assert!(
            clocked
                .session
                .results_arrived(command.generation, Ok(pines()), clocked.now)
        );
        clocked
    }

    #[rstest]
    fn nothing_is_issued_before_the_debounce_window(mut clocked: Clocked) {
        let deadline = clocked.session.input_changed("pines", clocked.now);
        assert_eq!(deadline, clocked.now + Duration::from_millis(300));
        assert!(
            clocked
                .session
                .debounce_elapsed(clocked.now + Duration::from_millis(299))
                .is_none()
        );
        let command = clocked
            .session
            .debounce_elapsed(deadline)
            .expect("search issued");
        assert_eq!(command.query, "pines");
        assert_eq!(clocked.session.view().status, SearchStatus::Searching);
    }

    #[rstest]
    fn dropdown_follows_keystrokes_before_the_window_ends(mut open_with_pines: Clocked) {
        let session = &mut open_with_pines.session;
        session.key(NavigationKey::ArrowDown);

        session.input_changed("p", open_with_pines.now);
        let view = session.view();
        assert!(!view.open);
        assert_eq!(view.highlighted, None);

        session.input_changed(" pi ", open_with_pines.now);
        assert!(session.view().open);
        assert!(session.deadline().is_some());
    }

    #[rstest]
    #[case("p")]
    #[case("  p  ")]
    #[case("")]
    fn short_queries_close_without_searching(mut open_with_pines: Clocked, #[case] text: &str) {
        assert!(open_with_pines.type_and_settle(text).is_none());
        let view = open_with_pines.session.view();
        assert!(!view.open);
        assert_eq!(view.status, SearchStatus::Idle);
        assert!(view.results.is_empty());
    }

    #[rstest]
    fn stale_responses_are_discarded(mut clocked: Clocked) {
        let first = clocked.type_and_settle("yosemite").expect("first search");
        let second = clocked.type_and_settle("pines").expect("second search");

        assert!(
            !clocked
                .session
                .results_arrived(first.generation, Ok(vec![hit("1", "Wrong")]), clocked.now)
        );
        assert_eq!(clocked.session.view().status, SearchStatus::Searching);
        assert!(
            clocked
                .session
                .results_arrived(second.generation, Ok(pines()), clocked.now)
        );
        assert_eq!(clocked.session.view().results, pines());
    }

    #[rstest]
    fn previous_results_stay_visible_while_fetching(mut open_with_pines: Clocked) {
        assert!(open_with_pines.type_and_settle("upper").is_some());
        let view = open_with_pines.session.view();
        assert_eq!(view.status, SearchStatus::Results);
        assert_eq!(view.results, pines());
    }

    #[rstest]
    fn fresh_cache_hits_skip_the_request(mut open_with_pines: Clocked) {
        let upper = open_with_pines.type_and_settle("upper").expect("search");
        open_with_pines.session.results_arrived(
            upper.generation,
            Ok(vec![hit("232447", "UPPER PINES")]),
            open_with_pines.now,
        );

        assert!(open_with_pines.type_and_settle(" pines ").is_none());
        assert_eq!(open_with_pines.session.view().results, pines());

        open_with_pines.now += CACHE_TTL;
        assert!(open_with_pines.type_and_settle("pines").is_some());
    }

    #[rstest]
    fn failures_and_empty_results_have_messages(mut clocked: Clocked) {
        let command = clocked.type_and_settle("nowhere").expect("search");
        clocked.session.results_arrived(
            command.generation,
            Err(ClientError::Transport {
                message: "refused".to_owned(),
            }),
            clocked.now,
        );
        let status = clocked.session.view().status;
        assert_eq!(
            status.message().as_deref(),
            Some("Failed to search campgrounds. Please try again.")
        );

        let command = clocked.type_and_settle("nowhere else").expect("search");
        clocked
            .session
            .results_arrived(command.generation, Ok(Vec::new()), clocked.now);
        assert_eq!(
            clocked.session.view().status.message().as_deref(),
            Some("No campgrounds found for \"nowhere else\". Try a different search term.")
        );
    }

    #[rstest]
    fn arrows_wrap_around(mut open_with_pines: Clocked) {
        let session = &mut open_with_pines.session;
        assert_eq!(session.key(NavigationKey::ArrowUp), KeyOutcome::Moved);
        assert_eq!(session.view().highlighted, Some(2));
        session.key(NavigationKey::ArrowDown);
        assert_eq!(session.view().highlighted, Some(0));
        session.key(NavigationKey::ArrowDown);
        session.key(NavigationKey::ArrowDown);
        session.key(NavigationKey::ArrowDown);
        assert_eq!(session.view().highlighted, Some(0));
    }

    #[rstest]
    fn enter_selects_highlighted_result(mut open_with_pines: Clocked) {
        let session = &mut open_with_pines.session;
        assert_eq!(session.key(NavigationKey::Enter), KeyOutcome::Ignored);
        session.key(NavigationKey::ArrowDown);
        session.key(NavigationKey::ArrowDown);

        let KeyOutcome::Selected(selection) = session.key(NavigationKey::Enter) else {
            panic!("expected a selection");
        };
        assert_eq!(
            selection.route,
            Some(AppRoute::Campground {
                provider_id: 1,
                id: "232449".to_owned()
            })
        );
        let view = session.view();
        assert_eq!(view.input, "North Pines");
        assert!(!view.open);
        assert!(session.deadline().is_none());
    }

    #[rstest]
    fn escape_and_click_outside_close(mut open_with_pines: Clocked) {
        let session = &mut open_with_pines.session;
        session.key(NavigationKey::ArrowDown);
        assert_eq!(session.key(NavigationKey::Escape), KeyOutcome::Closed);
        assert_eq!(session.key(NavigationKey::ArrowDown), KeyOutcome::Ignored);

        session.focus();
        assert!(session.view().open);
        session.click_outside();
        assert!(!session.view().open);
    }

    #[rstest]
    fn highlight_resets_when_query_changes(mut open_with_pines: Clocked) {
        open_with_pines.session.key(NavigationKey::ArrowDown);
        open_with_pines.type_and_settle("pines");
        assert_eq!(open_with_pines.session.view().highlighted, Some(0));

        open_with_pines.type_and_settle("north");
        assert_eq!(open_with_pines.session.view().highlighted, None);
    }
}
