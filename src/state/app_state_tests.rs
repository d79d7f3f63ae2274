//! Tests for AppState.
//!
//! These tests verify pure state transitions without any TUI dependencies.

use super::*;

// ===== Test Helpers =====

fn business(id: Option<&str>, name: &str, rating: Option<f64>, reviews: Option<u64>) -> Business {
    Business {
        business_id: id.map(str::to_string),
        name: Some(name.to_string()),
        rating,
        review_count: reviews,
        ..Business::default()
    }
}

fn sample_results() -> Vec<Business> {
    vec![
        business(Some("a"), "Alpha", Some(5.0), Some(10)),
        business(Some("b"), "Bravo", Some(3.0), Some(50)),
        business(Some("c"), "Charlie", None, None),
    ]
}

fn success<T>(data: T, query: Option<&str>) -> Envelope<T> {
    Envelope {
        status: "success".into(),
        data: Some(data),
        message: None,
        query: query.map(str::to_string),
    }
}

fn failure<T>(message: Option<&str>) -> Envelope<T> {
    Envelope {
        status: "error".into(),
        data: None,
        message: message.map(str::to_string),
        query: None,
    }
}

fn transport_error() -> ApiError {
    let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    ApiError::Decode {
        context: "test".into(),
        source,
    }
}

fn new_state() -> AppState {
    AppState::new(20, "en")
}

/// Submit a search and return its generation.
fn submit(state: &mut AppState) -> u64 {
    state.submit_search();
    match state.take_effects().pop() {
        Some(Effect::Search { generation, .. }) => generation,
        other => panic!("expected search effect, got {other:?}"),
    }
}

fn state_with_results() -> AppState {
    let mut state = new_state();
    let generation = submit(&mut state);
    assert!(state.on_search_completed(generation, Ok(success(sample_results(), None))));
    state
}

// ===== AppState::new Tests =====

#[test]
fn new_state_is_idle_with_defaults() {
    let state = new_state();
    assert_eq!(state.phase(), &SearchPhase::Idle);
    assert_eq!(state.focus(), Focus::Query);
    assert_eq!(state.form.limit.value(), "20");
    assert_eq!(state.form.language.value(), "en");
    assert!(!state.detail().is_visible());
    assert!(state.pending_effects().is_empty());
}

// ===== Search submission Tests =====

#[test]
fn submit_search_enters_loading_and_queues_effect() {
    let mut state = new_state();
    state.form.query.set(" pizza ");
    state.form.location.set("Seattle");
    state.submit_search();

    assert!(state.is_loading());
    assert!(!state.results_visible());
    assert_eq!(state.error_message(), None);

    let effects = state.take_effects();
    assert_eq!(
        effects,
        vec![Effect::Search {
            generation: 1,
            params: SearchParams {
                query: "pizza".into(),
                location: "Seattle".into(),
                limit: 20,
                language: "en".into(),
            },
        }]
    );
    assert!(state.take_effects().is_empty(), "effects are drained");
}

#[test]
fn submit_search_hides_previous_error() {
    let mut state = new_state();
    let generation = submit(&mut state);
    state.on_search_completed(generation, Ok(failure(Some("nope"))));
    assert_eq!(state.error_message(), Some("nope"));

    state.submit_search();
    assert_eq!(state.error_message(), None);
    assert!(state.is_loading());
}

#[test]
fn successful_search_populates_result_and_view_sets() {
    let mut state = new_state();
    let generation = submit(&mut state);
    assert!(state.on_search_completed(
        generation,
        Ok(success(sample_results(), Some("pizza in Seattle")))
    ));

    assert_eq!(state.phase(), &SearchPhase::Ready);
    assert!(state.results_visible());
    assert_eq!(state.results().len(), 3);
    assert_eq!(state.view_indices(), &[0, 1, 2]);
    assert_eq!(state.view_count(), 3);
    assert_eq!(state.echoed_query(), Some("pizza in Seattle"));
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn success_without_data_yields_empty_results() {
    let mut state = new_state();
    let generation = submit(&mut state);
    let envelope: Envelope<Vec<Business>> = Envelope {
        status: "success".into(),
        data: None,
        message: None,
        query: None,
    };
    state.on_search_completed(generation, Ok(envelope));

    assert_eq!(state.phase(), &SearchPhase::Ready);
    assert_eq!(state.view_count(), 0);
    assert_eq!(state.selected(), None);
}

#[test]
fn failure_envelope_shows_server_message_and_keeps_old_results() {
    let mut state = state_with_results();
    let generation = submit(&mut state);
    state.on_search_completed(generation, Ok(failure(Some("Query is required"))));

    assert!(!state.is_loading());
    assert_eq!(state.error_message(), Some("Query is required"));
    assert!(!state.results_visible());
    assert_eq!(state.results().len(), 3, "Result set retained but hidden");
}

#[test]
fn failure_envelope_without_message_uses_fallback() {
    let mut state = new_state();
    let generation = submit(&mut state);
    state.on_search_completed(generation, Ok(failure(Some("   "))));
    assert_eq!(state.error_message(), Some(SEARCH_FAILED_FALLBACK));
}

#[test]
fn transport_error_shows_network_message() {
    let mut state = new_state();
    let generation = submit(&mut state);
    state.on_search_completed(generation, Err(transport_error()));

    assert!(!state.is_loading());
    assert_eq!(state.error_message(), Some(SEARCH_NETWORK_ERROR));
}

#[test]
fn stale_search_completion_is_discarded() {
    let mut state = new_state();
    let first = submit(&mut state);
    let second = submit(&mut state);

    assert!(!state.on_search_completed(first, Ok(success(sample_results(), None))));
    assert!(state.is_loading(), "newer request still in flight");

    let newer = vec![business(Some("z"), "Zulu", Some(4.0), Some(1))];
    assert!(state.on_search_completed(second, Ok(success(newer, None))));
    assert_eq!(state.results().len(), 1);

    // The older response arriving last must not overwrite.
    assert!(!state.on_search_completed(first, Ok(success(sample_results(), None))));
    assert_eq!(state.results().len(), 1);
}

#[test]
fn new_success_shows_full_copy_in_backend_order() {
    let mut state = new_state();
    state.set_sort(SortKey::Name);
    state.set_min_rating(MinRating::Four);
    let generation = submit(&mut state);
    state.on_search_completed(generation, Ok(success(sample_results(), None)));

    assert_eq!(state.view_indices(), &[0, 1, 2]);
    assert_eq!(state.selected(), Some(0));

    // The held controls take effect on the next change.
    state.set_min_rating(MinRating::Four);
    assert_eq!(state.view_indices(), &[0]);
}

// ===== Refinement Tests =====

#[test]
fn controls_recompute_view_set() {
    let mut state = state_with_results();

    state.set_sort(SortKey::Reviews);
    assert_eq!(state.view_indices(), &[1, 0, 2]);

    state.set_min_rating(MinRating::Three);
    assert_eq!(state.view_indices(), &[1, 0]);

    state.set_filter("alp");
    assert_eq!(state.view_indices(), &[0]);
    assert_eq!(state.view_count(), 1);

    state.set_filter("");
    state.set_min_rating(MinRating::Any);
    state.set_sort(SortKey::Relevance);
    assert_eq!(state.view_indices(), &[0, 1, 2]);
}

#[test]
fn view_records_follow_view_order() {
    let mut state = state_with_results();
    state.set_sort(SortKey::Reviews);
    let names: Vec<_> = state
        .view_records()
        .map(|b| b.name.clone().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Bravo", "Alpha", "Charlie"]);
}

#[test]
fn shrinking_view_clamps_selection() {
    let mut state = state_with_results();
    state.select(2);
    state.set_min_rating(MinRating::FourAndHalf);
    assert_eq!(state.selected(), Some(0));

    state.set_filter("no such business");
    assert_eq!(state.selected(), None);
}

#[test]
fn edit_filter_recomputes() {
    let mut state = state_with_results();
    state.edit_filter(|f| {
        f.insert('b');
        f.insert('r');
    });
    assert_eq!(state.view_indices(), &[1]);
}

// ===== Selection Tests =====

#[test]
fn selection_clamps_at_both_ends() {
    let mut state = state_with_results();
    state.select_prev();
    assert_eq!(state.selected(), Some(0));
    state.select_by(10);
    assert_eq!(state.selected(), Some(2));
    state.select_next();
    assert_eq!(state.selected(), Some(2));
}

#[test]
fn ensure_selection_visible_scrolls_window() {
    let mut state = new_state();
    let generation = submit(&mut state);
    let many: Vec<_> = (0..10)
        .map(|i| business(Some(&format!("id{i}")), &format!("B{i}"), None, None))
        .collect();
    state.on_search_completed(generation, Ok(success(many, None)));

    state.select(7);
    state.ensure_selection_visible(3);
    assert_eq!(state.list_offset(), 5);

    state.select(2);
    state.ensure_selection_visible(3);
    assert_eq!(state.list_offset(), 2);
}

// ===== Detail overlay Tests =====

#[test]
fn open_details_shows_loading_and_queues_lookup() {
    let mut state = state_with_results();
    state.open_details(1);

    assert!(state.detail().is_visible());
    assert_eq!(state.detail().body(), Some(&DetailBody::Loading));
    assert_eq!(state.selected(), Some(1));
    assert_eq!(
        state.take_effects(),
        vec![Effect::Details {
            generation: 1,
            business_id: BusinessId::new("b").unwrap(),
        }]
    );
}

#[test]
fn open_details_uses_view_position_not_result_index() {
    let mut state = state_with_results();
    state.set_sort(SortKey::Reviews);
    state.open_details(0);

    match state.take_effects().as_slice() {
        [Effect::Details { business_id, .. }] => assert_eq!(business_id.as_str(), "b"),
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn open_details_out_of_range_is_noop() {
    let mut state = state_with_results();
    state.open_details(99);
    assert!(!state.detail().is_visible());
    assert!(state.take_effects().is_empty());
}

#[test]
fn record_without_id_opens_failure_without_request() {
    let mut state = new_state();
    let generation = submit(&mut state);
    state.on_search_completed(
        generation,
        Ok(success(vec![business(None, "Anon", None, None)], None)),
    );

    state.open_details(0);
    assert_eq!(
        state.detail().body(),
        Some(&DetailBody::Failed(DetailFailure::Unavailable))
    );
    assert!(state.take_effects().is_empty());
}

#[test]
fn detail_success_renders_loaded_body() {
    let mut state = state_with_results();
    state.open_details(0);
    let generation = match state.take_effects().pop() {
        Some(Effect::Details { generation, .. }) => generation,
        other => panic!("expected detail effect, got {other:?}"),
    };

    let detail = business(Some("a"), "Alpha Full", Some(5.0), Some(10));
    assert!(state.on_detail_completed(generation, Ok(success(detail.clone(), None))));
    assert_eq!(
        state.detail().body(),
        Some(&DetailBody::Loaded(Box::new(detail)))
    );
}

#[test]
fn detail_failure_envelope_and_transport_error_have_distinct_messages() {
    let mut state = state_with_results();
    state.open_details(0);
    state.on_detail_completed(1, Ok(failure(Some("Business not found"))));
    assert_eq!(
        state.detail().body(),
        Some(&DetailBody::Failed(DetailFailure::Unavailable))
    );

    state.open_details(0);
    state.on_detail_completed(2, Err(transport_error()));
    assert_eq!(
        state.detail().body(),
        Some(&DetailBody::Failed(DetailFailure::Network))
    );
    assert!(state.detail().is_visible(), "overlay stays open on failure");
}

#[test]
fn superseded_detail_completion_is_discarded() {
    let mut state = state_with_results();
    state.open_details(0);
    state.open_details(1);

    let stale = business(Some("a"), "Alpha", None, None);
    assert!(!state.on_detail_completed(1, Ok(success(stale, None))));
    assert_eq!(state.detail().body(), Some(&DetailBody::Loading));
}

#[test]
fn completion_after_close_does_not_reopen() {
    let mut state = state_with_results();
    state.open_details(0);
    state.close_details();

    let detail = business(Some("a"), "Alpha", None, None);
    assert!(!state.on_detail_completed(1, Ok(success(detail, None))));
    assert!(!state.detail().is_visible());
}

#[test]
fn apply_completion_routes_by_kind() {
    let mut state = new_state();
    let generation = submit(&mut state);
    assert!(state.apply_completion(Completion::Search {
        generation,
        result: Ok(success(sample_results(), None)),
    }));
    assert!(state.results_visible());

    state.open_details(0);
    assert!(state.apply_completion(Completion::Details {
        generation: 1,
        result: Err(transport_error()),
    }));
    assert_eq!(
        state.detail().body(),
        Some(&DetailBody::Failed(DetailFailure::Network))
    );
}

// ===== Focus Tests =====

#[test]
fn focus_cycles_form_only_before_results() {
    let mut state = new_state();
    let mut seen = vec![state.focus()];
    for _ in 0..4 {
        state.focus_next();
        seen.push(state.focus());
    }
    assert_eq!(
        seen,
        vec![
            Focus::Query,
            Focus::Location,
            Focus::Limit,
            Focus::Language,
            Focus::Query
        ]
    );
    state.focus_prev();
    assert_eq!(state.focus(), Focus::Language);
}

#[test]
fn focus_includes_controls_once_results_are_visible() {
    let mut state = state_with_results();
    state.set_focus(Focus::Language);
    state.focus_next();
    assert_eq!(state.focus(), Focus::Sort);
    state.set_focus(Focus::Results);
    state.focus_next();
    assert_eq!(state.focus(), Focus::Query);
}

#[test]
fn hidden_region_loses_focus_on_new_search() {
    let mut state = state_with_results();
    state.set_focus(Focus::Filter);
    state.submit_search();
    assert_eq!(state.focus(), Focus::Query);
}

#[test]
fn set_focus_ignores_hidden_regions() {
    let mut state = new_state();
    state.set_focus(Focus::Results);
    assert_eq!(state.focus(), Focus::Query);
}

#[test]
fn text_input_regions() {
    assert!(Focus::Query.is_text_input());
    assert!(Focus::Filter.is_text_input());
    assert!(!Focus::Sort.is_text_input());
    assert!(!Focus::Results.is_text_input());
    assert!(Focus::Language.is_form_field());
    assert!(!Focus::Filter.is_form_field());
}
