//! Search session state and its transitions.
//!
//! Every transition takes the current [`AppState`] by value and returns the
//! next one. Transitions that need the network also return a
//! [`FetchRequest`]; issuing it is the container's job.

use crate::config::DEFAULT_QUERY;
use crate::error::FetchFailure;
use crate::models::{Hit, ResultsCache, SearchResultPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query_key: String,
    pub page: u32,
}

impl FetchRequest {
    pub fn new(query_key: impl Into<String>, page: u32) -> Self {
        Self {
            query_key: query_key.into(),
            page,
        }
    }
}

/// What sits under the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footer {
    More,
    Loading,
    /// A retry is in flight while the error panel is still up.
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub results_cache: ResultsCache,
    /// The last submitted query. Not necessarily what is in the input box.
    pub active_query_key: String,
    pub pending_query_text: String,
    pub last_error: Option<FetchFailure>,
    pub is_loading: bool,
}

impl AppState {
    pub fn new(default_query: impl Into<String>) -> Self {
        Self {
            results_cache: ResultsCache::new(),
            active_query_key: String::new(),
            pending_query_text: default_query.into(),
            last_error: None,
            is_loading: false,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.results_cache
            .get(&self.active_query_key)
            .map_or(0, |entry| entry.page)
    }

    pub fn current_hits(&self) -> &[Hit] {
        self.results_cache
            .get(&self.active_query_key)
            .map(|entry| entry.hits.as_slice())
            .unwrap_or_default()
    }

    pub fn needs_fetch(&self, query_key: &str) -> bool {
        !self.results_cache.contains(query_key)
    }

    pub fn shows_error(&self) -> bool {
        self.last_error.is_some()
    }

    pub fn footer(&self) -> Footer {
        match (self.is_loading, self.shows_error()) {
            (false, _) => Footer::More,
            (true, false) => Footer::Loading,
            (true, true) => Footer::Hidden,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}

/// First mount: the default query becomes active and page 0 is requested.
pub fn initialize(mut state: AppState) -> (AppState, FetchRequest) {
    state.active_query_key = state.pending_query_text.clone();
    let request = FetchRequest::new(state.active_query_key.clone(), 0);
    (state, request)
}

pub fn on_query_text_changed(mut state: AppState, text: impl Into<String>) -> AppState {
    state.pending_query_text = text.into();
    state
}

/// Activates the typed query. Cached queries are shown as-is without a fetch.
pub fn on_query_submitted(mut state: AppState) -> (AppState, Option<FetchRequest>) {
    state.active_query_key = state.pending_query_text.clone();
    let request = state
        .needs_fetch(&state.active_query_key)
        .then(|| FetchRequest::new(state.active_query_key.clone(), 0));
    (state, request)
}

pub fn on_hit_dismissed(mut state: AppState, object_id: &str) -> AppState {
    let Some(entry) = state.results_cache.get(&state.active_query_key) else {
        return state;
    };
    let updated = entry.without_hit(object_id);
    let key = state.active_query_key.clone();
    state.results_cache.insert(key, updated);
    state
}

/// The "More" control: next page of the active query.
pub fn request_more(state: &AppState) -> FetchRequest {
    FetchRequest::new(state.active_query_key.clone(), state.current_page().saturating_add(1))
}

pub fn fetch_started(mut state: AppState) -> AppState {
    state.is_loading = true;
    state
}

/// Appends `page` to whatever is cached under `query_key`. A success also
/// clears any earlier error.
pub fn fetch_succeeded(mut state: AppState, query_key: &str, page: SearchResultPage) -> AppState {
    let merged = match state.results_cache.get(query_key) {
        Some(existing) => existing.merged_with(page),
        None => page,
    };
    state.results_cache.insert(query_key, merged);
    state.is_loading = false;
    state.last_error = None;
    state
}

pub fn fetch_failed(mut state: AppState, error: FetchFailure) -> AppState {
    state.last_error = Some(error);
    state.is_loading = false;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hit;

    fn loaded(query: &str, hits: Vec<Hit>, page: u32) -> AppState {
        let (state, request) = initialize(AppState::new(query));
        let state = fetch_started(state);
        fetch_succeeded(state, &request.query_key, SearchResultPage::new(hits, page))
    }

    fn ids(hits: &[Hit]) -> Vec<&str> {
        hits.iter().map(|h| h.object_id.as_str()).collect()
    }

    #[test]
    fn fresh_state_matches_initial_shape() {
        let state = AppState::new("react");
        assert!(state.results_cache.is_empty());
        assert_eq!(state.active_query_key, "");
        assert_eq!(state.pending_query_text, "react");
        assert!(state.last_error.is_none());
        assert!(!state.is_loading);
        assert_eq!(state.current_page(), 0);
        assert!(state.current_hits().is_empty());
    }

    #[test]
    fn initialize_activates_default_query_and_requests_first_page() {
        let (state, request) = initialize(AppState::new("react"));
        assert_eq!(state.active_query_key, "react");
        assert_eq!(request, FetchRequest::new("react", 0));
    }

    #[test]
    fn initial_load_populates_cache() {
        let state = loaded("react", vec![hit("1")], 0);
        let entry = state.results_cache.get("react").unwrap();
        assert_eq!(ids(&entry.hits), ["1"]);
        assert_eq!(entry.page, 0);
        assert!(!state.is_loading);
    }

    #[test]
    fn typing_never_changes_active_key() {
        let state = loaded("react", vec![hit("1")], 0);
        let state = on_query_text_changed(state, "rus");
        let state = on_query_text_changed(state, "rust");
        assert_eq!(state.pending_query_text, "rust");
        assert_eq!(state.active_query_key, "react");
        assert_eq!(ids(state.current_hits()), ["1"]);
    }

    #[test]
    fn submitting_new_query_requests_page_zero() {
        let state = on_query_text_changed(loaded("react", vec![hit("1")], 0), "golang");
        let (state, request) = on_query_submitted(state);
        assert_eq!(state.active_query_key, "golang");
        assert_eq!(request, Some(FetchRequest::new("golang", 0)));
        assert!(state.current_hits().is_empty());
    }

    #[test]
    fn resubmitting_cached_query_does_not_fetch() {
        let state = loaded("react", vec![hit("1")], 0);
        let (state, first) = on_query_submitted(state);
        let (state, second) = on_query_submitted(state);
        assert!(first.is_none());
        assert!(second.is_none());
        assert_eq!(ids(state.current_hits()), ["1"]);
    }

    #[test]
    fn switching_back_to_cached_query_reuses_pages() {
        let state = loaded("react", vec![hit("1")], 0);
        let (state, _) = on_query_submitted(on_query_text_changed(state, "golang"));
        let state = fetch_succeeded(state, "golang", SearchResultPage::new(vec![hit("g")], 0));
        let (state, request) = on_query_submitted(on_query_text_changed(state, "react"));
        assert!(request.is_none());
        assert_eq!(ids(state.current_hits()), ["1"]);
        assert_eq!(state.results_cache.len(), 2);
    }

    #[test]
    fn dismiss_removes_exactly_one_hit() {
        let state = loaded("react", vec![hit("1")], 0);
        let state = on_hit_dismissed(state, "1");
        assert!(state.results_cache.get("react").unwrap().hits.is_empty());
        assert_eq!(state.current_page(), 0);
    }

    #[test]
    fn dismiss_sequence_keeps_relative_order() {
        let all: Vec<_> = ["a", "b", "c", "d", "e", "f"].into_iter().map(hit).collect();
        let dismissed = ["e", "a", "c"];
        let mut state = loaded("react", all, 4);
        for id in dismissed {
            state = on_hit_dismissed(state, id);
        }
        assert_eq!(ids(state.current_hits()), ["b", "d", "f"]);
        assert_eq!(state.current_page(), 4);
    }

    #[test]
    fn dismiss_without_cache_entry_is_a_no_op() {
        let (state, _) = initialize(AppState::new("react"));
        let before = state.clone();
        assert_eq!(on_hit_dismissed(state, "1"), before);
    }

    #[test]
    fn load_more_targets_next_page_of_active_key() {
        let state = loaded("react", vec![hit("1")], 0);
        assert_eq!(request_more(&state), FetchRequest::new("react", 1));
    }

    #[test]
    fn load_more_at_last_representable_page_does_not_overflow() {
        let state = loaded("react", vec![hit("1")], u32::MAX);
        assert_eq!(request_more(&state), FetchRequest::new("react", u32::MAX));
    }

    #[test]
    fn more_after_dismissing_everything_appends_to_empty_list() {
        let state = on_hit_dismissed(loaded("react", vec![hit("1")], 0), "1");
        let request = request_more(&state);
        let state = fetch_started(state);
        let state = fetch_succeeded(state, &request.query_key, SearchResultPage::new(vec![hit("2")], request.page));
        assert_eq!(ids(state.current_hits()), ["2"]);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn success_concatenates_previous_and_new_hits() {
        let state = loaded("react", vec![hit("1"), hit("2")], 0);
        let state = fetch_succeeded(state, "react", SearchResultPage::new(vec![hit("3"), hit("4")], 1));
        assert_eq!(ids(state.current_hits()), ["1", "2", "3", "4"]);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn success_lands_on_requested_key_even_after_switching() {
        let (state, request) = initialize(AppState::new("react"));
        let state = fetch_started(state);
        let (state, _) = on_query_submitted(on_query_text_changed(state, "golang"));
        let state = fetch_succeeded(state, &request.query_key, SearchResultPage::new(vec![hit("1")], 0));
        assert_eq!(ids(&state.results_cache.get("react").unwrap().hits), ["1"]);
        assert!(state.results_cache.get("golang").is_none());
    }

    #[test]
    fn failure_keeps_cache_and_sets_error() {
        let state = loaded("react", vec![hit("1")], 0);
        let cache_before = state.results_cache.clone();
        let state = fetch_started(state);
        assert!(state.is_loading);
        let state = fetch_failed(state, FetchFailure::new("boom"));
        assert_eq!(state.results_cache, cache_before);
        assert!(!state.is_loading);
        assert_eq!(state.last_error, Some(FetchFailure::new("boom")));
    }

    #[test]
    fn failed_first_fetch_leaves_no_entry() {
        let state = on_query_text_changed(loaded("react", vec![hit("1")], 0), "golang");
        let (state, request) = on_query_submitted(state);
        assert!(request.is_some());
        let state = fetch_failed(fetch_started(state), FetchFailure::new("offline"));
        assert!(state.results_cache.get("golang").is_none());
        assert!(state.last_error.is_some());
    }

    #[test]
    fn footer_tracks_loading_and_error() {
        let state = AppState::new("react");
        assert_eq!(state.footer(), Footer::More);
        let state = fetch_started(state);
        assert_eq!(state.footer(), Footer::Loading);
        let state = fetch_failed(state, FetchFailure::new("boom"));
        assert_eq!(state.footer(), Footer::More);
        assert!(state.shows_error());
        let state = fetch_started(state);
        assert_eq!(state.footer(), Footer::Hidden);
    }

    #[test]
    fn success_clears_previous_error() {
        let state = fetch_failed(fetch_started(AppState::new("react")), FetchFailure::new("boom"));
        let state = fetch_started(state);
        let state = fetch_succeeded(state, "react", SearchResultPage::new(vec![hit("1")], 0));
        assert!(state.last_error.is_none());
        assert!(!state.is_loading);
    }
}
