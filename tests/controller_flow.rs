//! End-to-end controller flows through the public state API.
//!
//! Keyboard input goes through `handle_key` with the default bindings, the
//! way the event loop delivers it; completions are fed back by hand.

use bizlens::config::KeyBindings;
use bizlens::model::{ApiError, Business, Envelope};
use bizlens::state::{
    handle_key, AppState, Completion, DetailBody, Effect, Focus, KeyOutcome, MinRating,
    ScreenRegions, SearchPhase, SortKey,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

struct Harness {
    state: AppState,
    bindings: KeyBindings,
    regions: ScreenRegions,
}

impl Harness {
    fn new() -> Self {
        Self {
            state: AppState::new(20, "en"),
            bindings: KeyBindings::default(),
            regions: ScreenRegions::default(),
        }
    }

    fn press(&mut self, code: KeyCode) -> KeyOutcome {
        self.press_with(code, KeyModifiers::NONE)
    }

    fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyOutcome {
        handle_key(
            &mut self.state,
            KeyEvent::new(code, modifiers),
            &self.bindings,
            &self.regions,
        )
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    fn last_search_generation(&mut self) -> u64 {
        match self.state.take_effects().pop() {
            Some(Effect::Search { generation, .. }) => generation,
            other => panic!("expected search effect, got {:?}", other),
        }
    }

    fn complete_search(&mut self, generation: u64, data: Vec<Business>) -> bool {
        self.state.apply_completion(Completion::Search {
            generation,
            result: Ok(Envelope {
                status: "success".into(),
                data: Some(data),
                message: None,
                query: None,
            }),
        })
    }
}

fn rated(name: &str, rating: Option<f64>, reviews: Option<u64>) -> Business {
    Business {
        business_id: Some(name.to_lowercase()),
        name: Some(name.into()),
        rating,
        review_count: reviews,
        ..Business::default()
    }
}

fn view_names(state: &AppState) -> Vec<String> {
    state
        .view_records()
        .map(|b| b.name.clone().unwrap_or_default())
        .collect()
}

fn sample() -> Vec<Business> {
    vec![
        rated("Five", Some(5.0), Some(10)),
        rated("Three", Some(3.0), Some(50)),
        rated("Unrated", None, None),
    ]
}

#[test]
fn typed_form_becomes_search_params() {
    let mut h = Harness::new();
    h.type_text("  tacos ");
    h.press(KeyCode::Tab);
    h.type_text("Austin, TX");
    h.press(KeyCode::Tab);
    // Replace the prefilled limit with something invalid
    h.press(KeyCode::Backspace);
    h.press(KeyCode::Backspace);
    h.type_text("ten");
    h.press(KeyCode::Enter);

    match h.state.pending_effects() {
        [Effect::Search { params, .. }] => {
            assert_eq!(params.query, "tacos");
            assert_eq!(params.location, "Austin, TX");
            assert_eq!(params.limit, 20);
            assert_eq!(params.language, "en");
        }
        other => panic!("unexpected effects: {:?}", other),
    }
    assert!(h.state.is_loading());
}

#[test]
fn min_rating_four_keeps_only_five_star() {
    let mut h = Harness::new();
    h.state.submit_search();
    let generation = h.last_search_generation();
    h.complete_search(generation, sample());

    h.state.set_min_rating(MinRating::Four);
    assert_eq!(view_names(&h.state), ["Five"]);
}

#[test]
fn sort_by_reviews_orders_missing_last() {
    let mut h = Harness::new();
    h.state.submit_search();
    let generation = h.last_search_generation();
    h.complete_search(generation, sample());

    h.state.set_sort(SortKey::Reviews);
    assert_eq!(view_names(&h.state), ["Three", "Five", "Unrated"]);
}

#[test]
fn filter_matches_type_alone() {
    let mut h = Harness::new();
    h.state.submit_search();
    let generation = h.last_search_generation();
    let mut bakery = rated("Golden Crust", Some(4.0), Some(3));
    bakery.kind = Some("Bakery".into());
    h.complete_search(generation, vec![bakery, rated("Five", Some(5.0), Some(10))]);

    h.state.set_filter("  BAKERY ");
    assert_eq!(view_names(&h.state), ["Golden Crust"]);
}

#[test]
fn filter_typed_through_keyboard_refines_live() {
    let mut h = Harness::new();
    h.state.submit_search();
    let generation = h.last_search_generation();
    h.complete_search(generation, sample());

    h.state.set_focus(Focus::Filter);
    h.type_text("thr");
    assert_eq!(view_names(&h.state), ["Three"]);

    h.press(KeyCode::Backspace);
    h.press(KeyCode::Backspace);
    h.press(KeyCode::Backspace);
    assert_eq!(h.state.view_count(), 3);
}

#[test]
fn last_search_wins_over_slower_earlier_one() {
    let mut h = Harness::new();
    h.state.submit_search();
    let first = h.last_search_generation();
    h.state.submit_search();
    let second = h.last_search_generation();

    assert!(h.complete_search(second, vec![rated("Newer", Some(4.0), Some(1))]));
    assert!(!h.complete_search(first, vec![rated("Older", Some(4.0), Some(1))]));
    assert_eq!(view_names(&h.state), ["Newer"]);
}

#[test]
fn transport_failure_ends_loading_with_network_message() {
    let mut h = Harness::new();
    h.state.submit_search();
    let generation = h.last_search_generation();
    h.state.apply_completion(Completion::Search {
        generation,
        result: Err(ApiError::Unhealthy("unreachable".into())),
    });

    assert!(!h.state.is_loading());
    assert!(matches!(h.state.phase(), SearchPhase::Failed(_)));
    assert_eq!(
        h.state.error_message(),
        Some("Network error. Please check your connection and try again.")
    );
    assert!(!h.state.results_visible());
}

#[test]
fn keyboard_opens_and_closes_details() {
    let mut h = Harness::new();
    h.state.submit_search();
    let generation = h.last_search_generation();
    h.complete_search(generation, sample());

    h.state.set_focus(Focus::Results);
    h.press(KeyCode::Down);
    assert_eq!(h.state.selected(), Some(1));

    h.press(KeyCode::Enter);
    assert_eq!(h.state.detail().body(), Some(&DetailBody::Loading));
    assert!(matches!(
        h.state.pending_effects(),
        [Effect::Details { business_id, .. }] if business_id.as_str() == "three"
    ));

    assert_eq!(h.press(KeyCode::Esc), KeyOutcome::Continue);
    assert!(!h.state.detail().is_visible());
}

#[test]
fn ctrl_c_always_quits() {
    let mut h = Harness::new();
    assert_eq!(
        h.press_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        KeyOutcome::Quit
    );

    h.state.submit_search();
    let generation = h.last_search_generation();
    h.complete_search(generation, sample());
    h.state.open_details(0);
    assert_eq!(
        h.press_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        KeyOutcome::Quit
    );
}
