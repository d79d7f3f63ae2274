//! Application state and transitions.
//!
//! `AppState` is the Results Controller: it owns the Result set, the View set,
//! the input controls and the detail overlay. Handlers mutate state and queue
//! [`Effect`]s; they never perform I/O. The shell executes queued effects and
//! feeds their outcomes back as [`Completion`]s.

use tracing::{debug, error, info, warn};

use crate::model::{ApiError, Business, BusinessId, Envelope, SearchParams};
use crate::state::detail_overlay::{DetailBody, DetailFailure, DetailOverlay};
use crate::state::form::SearchForm;
use crate::state::refine::{refine, MinRating, RefineControls, SortKey};

/// Banner text when the backend rejects a search without saying why.
pub const SEARCH_FAILED_FALLBACK: &str = "Failed to fetch businesses";

/// Banner text when a search never produced an envelope.
pub const SEARCH_NETWORK_ERROR: &str =
    "Network error. Please check your connection and try again.";

// ===== Effects =====

/// A request the controller asks the shell to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a bulk search.
    Search {
        /// Tag matched against the latest search.
        generation: u64,
        /// Trimmed form values.
        params: SearchParams,
    },
    /// Look up one business.
    Details {
        /// Tag matched against the open overlay.
        generation: u64,
        /// Record to look up.
        business_id: BusinessId,
    },
}

/// Outcome of an [`Effect`], tagged with the generation it was issued with.
#[derive(Debug)]
pub enum Completion {
    /// A search finished.
    Search {
        /// Generation of the originating [`Effect::Search`].
        generation: u64,
        /// Envelope, or the transport failure.
        result: Result<Envelope<Vec<Business>>, ApiError>,
    },
    /// A detail lookup finished.
    Details {
        /// Generation of the originating [`Effect::Details`].
        generation: u64,
        /// Envelope, or the transport failure.
        result: Result<Envelope<Business>, ApiError>,
    },
}

// ===== Phase & Focus =====

/// Lifecycle of the most recent search.
///
/// Exactly one of loading indicator, error banner, or controls+results is
/// visible at a time (none while idle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing searched yet.
    Idle,
    /// Request in flight; loading indicator visible.
    Loading,
    /// Last search failed; banner shows this (unsanitized) message.
    Failed(String),
    /// Last search succeeded; controls and results visible.
    Ready,
}

/// Region receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Search terms input.
    Query,
    /// Location input.
    Location,
    /// Result limit input.
    Limit,
    /// Language input.
    Language,
    /// Sort selector.
    Sort,
    /// Minimum-rating selector.
    MinRating,
    /// Free-text filter input.
    Filter,
    /// Result card list.
    Results,
}

impl Focus {
    const FORM: [Focus; 4] = [Focus::Query, Focus::Location, Focus::Limit, Focus::Language];
    const ALL: [Focus; 8] = [
        Focus::Query,
        Focus::Location,
        Focus::Limit,
        Focus::Language,
        Focus::Sort,
        Focus::MinRating,
        Focus::Filter,
        Focus::Results,
    ];

    /// Whether printable keys edit text in this region.
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            Focus::Query | Focus::Location | Focus::Limit | Focus::Language | Focus::Filter
        )
    }

    /// Whether this region belongs to the search form.
    pub fn is_form_field(self) -> bool {
        Self::FORM.contains(&self)
    }
}

// ===== AppState =====

/// Application state. No I/O; effects are queued for the shell.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search form inputs.
    pub form: SearchForm,

    /// Results controls (sort, min rating, text filter).
    controls: RefineControls,

    /// Which region has keyboard focus.
    focus: Focus,

    phase: SearchPhase,

    /// Result set: records from the last successful search.
    results: Vec<Business>,

    /// View set: indices into `results`.
    view: Vec<usize>,

    /// Composed query echoed by the backend on the last success.
    echoed_query: Option<String>,

    /// Selected card, as a position in `view`.
    selected: usize,

    /// First card rendered in the list.
    list_offset: usize,

    detail: DetailOverlay,

    search_generation: u64,
    detail_generation: u64,

    /// Limit sent when the limit input is not a positive integer.
    default_limit: u32,

    effects: Vec<Effect>,
}

impl AppState {
    /// Create state with an empty form prefilled with the given defaults.
    pub fn new(default_limit: u32, default_language: &str) -> Self {
        Self {
            form: SearchForm::with_defaults(default_limit, default_language),
            controls: RefineControls::default(),
            focus: Focus::Query,
            phase: SearchPhase::Idle,
            results: Vec::new(),
            view: Vec::new(),
            echoed_query: None,
            selected: 0,
            list_offset: 0,
            detail: DetailOverlay::new(),
            search_generation: 0,
            detail_generation: 0,
            default_limit,
            effects: Vec::new(),
        }
    }

    // ----- read access -----

    /// Current search phase.
    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Region receiving keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Filter and sort controls.
    pub fn controls(&self) -> &RefineControls {
        &self.controls
    }

    /// Detail overlay.
    pub fn detail(&self) -> &DetailOverlay {
        &self.detail
    }

    /// Result set.
    pub fn results(&self) -> &[Business] {
        &self.results
    }

    /// View set as indices into [`AppState::results`].
    pub fn view_indices(&self) -> &[usize] {
        &self.view
    }

    /// View set records in display order.
    pub fn view_records(&self) -> impl Iterator<Item = &Business> + '_ {
        self.view.iter().map(|&i| &self.results[i])
    }

    /// Size of the View set, as shown in the count region.
    pub fn view_count(&self) -> usize {
        self.view.len()
    }

    /// Query string echoed by the backend for the count line.
    pub fn echoed_query(&self) -> Option<&str> {
        self.echoed_query.as_deref()
    }

    /// Selected position in the View set, if any card exists.
    pub fn selected(&self) -> Option<usize> {
        (!self.view.is_empty()).then_some(self.selected)
    }

    /// First View set position drawn in the list.
    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    /// Whether a search is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// Error banner message, when a search failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Controls panel and result list are shown only after a success.
    pub fn results_visible(&self) -> bool {
        self.phase == SearchPhase::Ready
    }

    // ----- effects -----

    /// Drain queued effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Peek at queued effects without draining them.
    pub fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }

    // ----- search -----

    /// Submit the search form.
    ///
    /// Enters the loading state (hides results, controls and error banner)
    /// and queues a search tagged with a fresh generation.
    pub fn submit_search(&mut self) {
        self.search_generation += 1;
        let params = self.form.params(self.default_limit);
        info!(
            generation = self.search_generation,
            query = %params.query,
            location = %params.location,
            limit = params.limit,
            language = %params.language,
            "Submitting search"
        );

        self.phase = SearchPhase::Loading;
        self.ensure_focus_visible();
        self.effects.push(Effect::Search {
            generation: self.search_generation,
            params,
        });
    }

    /// Apply the outcome of a search.
    ///
    /// Returns `false` if the completion was stale and ignored. Otherwise the
    /// loading state always ends, in success or failure.
    pub fn on_search_completed(
        &mut self,
        generation: u64,
        result: Result<Envelope<Vec<Business>>, ApiError>,
    ) -> bool {
        if generation != self.search_generation {
            debug!(
                generation,
                latest = self.search_generation,
                "Discarding stale search completion"
            );
            return false;
        }

        match result {
            Ok(envelope) if envelope.is_success() => {
                self.results = envelope.data.unwrap_or_default();
                self.echoed_query = envelope.query;
                self.selected = 0;
                self.list_offset = 0;
                self.phase = SearchPhase::Ready;
                // Full copy in backend order; controls apply on their next change.
                self.view = (0..self.results.len()).collect();
                info!(
                    generation,
                    results = self.results.len(),
                    shown = self.view.len(),
                    "Search succeeded"
                );
            }
            Ok(envelope) => {
                let message = envelope
                    .failure_message()
                    .unwrap_or(SEARCH_FAILED_FALLBACK)
                    .to_string();
                warn!(generation, status = %envelope.status, %message, "Search rejected by backend");
                self.phase = SearchPhase::Failed(message);
            }
            Err(err) => {
                error!(generation, error = %err, "Search request failed");
                self.phase = SearchPhase::Failed(SEARCH_NETWORK_ERROR.to_string());
            }
        }

        self.ensure_focus_visible();
        true
    }

    // ----- refinement -----

    /// Recompute the View set from the Result set and controls.
    ///
    /// Always a full recomputation; the selection is clamped to the new View set.
    pub fn apply_refinement(&mut self) {
        self.view = refine(&self.results, &self.controls);
        if self.selected >= self.view.len() {
            self.selected = self.view.len().saturating_sub(1);
        }
        self.list_offset = self.list_offset.min(self.selected);
        debug!(shown = self.view.len(), "View set recomputed");
    }

    /// Change the sort key and recompute.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.controls.sort = sort;
        self.apply_refinement();
    }

    /// Change the rating threshold and recompute.
    pub fn set_min_rating(&mut self, min_rating: MinRating) {
        self.controls.min_rating = min_rating;
        self.apply_refinement();
    }

    /// Replace the text filter and recompute.
    pub fn set_filter(&mut self, text: &str) {
        self.controls.filter.set(text);
        self.apply_refinement();
    }

    /// Edit the text filter in place and recompute.
    pub fn edit_filter(&mut self, edit: impl FnOnce(&mut crate::state::TextInput)) {
        edit(&mut self.controls.filter);
        self.apply_refinement();
    }

    // ----- selection -----

    /// Select the next card.
    pub fn select_next(&mut self) {
        self.select_by(1);
    }

    /// Select the previous card.
    pub fn select_prev(&mut self) {
        self.select_by(-1);
    }

    /// Move selection by `delta` cards, clamping at both ends.
    pub fn select_by(&mut self, delta: isize) {
        if self.view.is_empty() {
            return;
        }
        let last = self.view.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// Select a View set position, if it exists.
    pub fn select(&mut self, position: usize) {
        if position < self.view.len() {
            self.selected = position;
        }
    }

    /// Keep the selected card inside a window of `visible_cards` cards.
    pub fn ensure_selection_visible(&mut self, visible_cards: usize) {
        let visible_cards = visible_cards.max(1);
        if self.selected < self.list_offset {
            self.list_offset = self.selected;
        } else if self.selected >= self.list_offset + visible_cards {
            self.list_offset = self.selected + 1 - visible_cards;
        }
    }

    // ----- details -----

    /// Open the detail overlay for the card at `position` in the View set.
    ///
    /// A record without an identifier opens straight into the failure state.
    pub fn open_details(&mut self, position: usize) {
        let Some(&index) = self.view.get(position) else {
            return;
        };
        self.selected = position;
        self.detail_generation += 1;
        let generation = self.detail_generation;

        match self.results[index].id() {
            Some(business_id) => {
                info!(generation, %business_id, "Requesting business details");
                self.detail.open_loading(generation);
                self.effects.push(Effect::Details {
                    generation,
                    business_id,
                });
            }
            None => {
                warn!(generation, "Business has no identifier; details unavailable");
                self.detail
                    .open_with(generation, DetailBody::Failed(DetailFailure::Unavailable));
            }
        }
    }

    /// Open details for the selected card.
    pub fn open_selected_details(&mut self) {
        if let Some(position) = self.selected() {
            self.open_details(position);
        }
    }

    /// Apply the outcome of a detail lookup.
    ///
    /// Returns `false` if the completion was stale (superseded or the overlay
    /// was closed) and ignored.
    pub fn on_detail_completed(
        &mut self,
        generation: u64,
        result: Result<Envelope<Business>, ApiError>,
    ) -> bool {
        let body = match result {
            Ok(envelope) if envelope.is_success() => match envelope.data {
                Some(business) => DetailBody::Loaded(Box::new(business)),
                None => {
                    warn!(generation, "Detail envelope without data");
                    DetailBody::Failed(DetailFailure::Unavailable)
                }
            },
            Ok(envelope) => {
                warn!(
                    generation,
                    status = %envelope.status,
                    message = envelope.failure_message().unwrap_or(""),
                    "Detail lookup rejected by backend"
                );
                DetailBody::Failed(DetailFailure::Unavailable)
            }
            Err(err) => {
                error!(generation, error = %err, "Detail request failed");
                DetailBody::Failed(DetailFailure::Network)
            }
        };

        let applied = self.detail.resolve(generation, body);
        if !applied {
            debug!(generation, "Discarding stale detail completion");
        }
        applied
    }

    /// Close the overlay; a pending lookup becomes stale.
    pub fn close_details(&mut self) {
        self.detail.close();
    }

    /// Scroll the overlay body up.
    pub fn scroll_details_up(&mut self, lines: u16) {
        self.detail.scroll_up(lines);
    }

    /// Scroll the overlay body down, at most to `max`.
    pub fn scroll_details_down(&mut self, lines: u16, max: u16) {
        self.detail.scroll_down(lines, max);
    }

    // ----- completions -----

    /// Route a completion to its handler. Returns whether state changed.
    pub fn apply_completion(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Search { generation, result } => {
                self.on_search_completed(generation, result)
            }
            Completion::Details { generation, result } => {
                self.on_detail_completed(generation, result)
            }
        }
    }

    // ----- focus -----

    /// Regions that can currently take focus, in Tab order.
    pub fn focus_order(&self) -> Vec<Focus> {
        if self.results_visible() {
            Focus::ALL.to_vec()
        } else {
            Focus::FORM.to_vec()
        }
    }

    /// Move focus forward in Tab order.
    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    /// Move focus backward in Tab order.
    pub fn focus_prev(&mut self) {
        let len = self.focus_order().len();
        self.cycle_focus(len - 1);
    }

    /// Focus a region if it is currently focusable.
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus_order().contains(&focus) {
            self.focus = focus;
        }
    }

    fn cycle_focus(&mut self, step: usize) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + step) % order.len()];
    }

    /// Move focus back to the form if its region was hidden.
    fn ensure_focus_visible(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::Query;
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
