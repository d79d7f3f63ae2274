//! Tests for filter and sort.

use super::*;

fn business(name: Option<&str>, rating: Option<f64>, reviews: Option<u64>) -> Business {
    Business {
        name: name.map(str::to_string),
        rating,
        review_count: reviews,
        ..Business::default()
    }
}

/// [5.0 (10 reviews), 3.0 (50 reviews), missing (missing)]
fn three_records() -> Vec<Business> {
    vec![
        business(Some("Five"), Some(5.0), Some(10)),
        business(Some("Three"), Some(3.0), Some(50)),
        business(Some("Unknown"), None, None),
    ]
}

fn controls(sort: SortKey, min_rating: MinRating, filter: &str) -> RefineControls {
    RefineControls {
        sort,
        min_rating,
        filter: TextInput::new(filter),
    }
}

#[test]
fn default_controls_pass_everything_through_in_order() {
    let results = three_records();
    assert_eq!(refine(&results, &RefineControls::default()), vec![0, 1, 2]);
}

#[test]
fn min_rating_four_keeps_only_five_star_record() {
    let results = three_records();
    let view = refine(&results, &controls(SortKey::Relevance, MinRating::Four, ""));
    assert_eq!(view, vec![0]);
}

#[test]
fn min_rating_treats_missing_as_zero() {
    let results = three_records();
    let view = refine(&results, &controls(SortKey::Relevance, MinRating::Three, ""));
    assert_eq!(view, vec![0, 1]);
}

#[test]
fn sort_by_reviews_descending_with_missing_last() {
    let results = three_records();
    let view = refine(&results, &controls(SortKey::Reviews, MinRating::Any, ""));
    assert_eq!(view, vec![1, 0, 2]);
}

#[test]
fn sort_by_rating_descending_with_missing_last() {
    let results = three_records();
    let view = refine(&results, &controls(SortKey::Rating, MinRating::Any, ""));
    assert_eq!(view, vec![0, 1, 2]);
}

#[test]
fn sort_by_name_is_case_insensitive() {
    let results = vec![
        business(Some("banana"), None, None),
        business(Some("Apple"), None, None),
        business(Some("cherry"), None, None),
        business(None, None, None),
    ];
    let view = refine(&results, &controls(SortKey::Name, MinRating::Any, ""));
    // Missing name sorts as the empty string.
    assert_eq!(view, vec![3, 1, 0, 2]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let results = vec![
        business(Some("a"), Some(4.0), Some(1)),
        business(Some("b"), Some(5.0), Some(1)),
        business(Some("c"), Some(4.0), Some(1)),
        business(Some("d"), Some(4.0), Some(1)),
    ];
    let view = refine(&results, &controls(SortKey::Rating, MinRating::Any, ""));
    assert_eq!(view, vec![1, 0, 2, 3]);

    let view = refine(&results, &controls(SortKey::Reviews, MinRating::Any, ""));
    assert_eq!(view, vec![0, 1, 2, 3]);
}

#[test]
fn text_filter_matches_type_only() {
    let results = vec![
        Business {
            name: Some("Luigi's".into()),
            full_address: Some("5 Harbor Rd".into()),
            kind: Some("Pizza restaurant".into()),
            ..Business::default()
        },
        Business {
            name: Some("Sushi Bar".into()),
            kind: Some("Japanese restaurant".into()),
            ..Business::default()
        },
    ];
    let view = refine(&results, &controls(SortKey::Relevance, MinRating::Any, "pizza"));
    assert_eq!(view, vec![0]);
}

#[test]
fn text_filter_is_trimmed_and_case_insensitive() {
    let results = vec![business(Some("Tony's PIZZA"), None, None)];
    let view = refine(&results, &controls(SortKey::Relevance, MinRating::Any, "  Pizza "));
    assert_eq!(view, vec![0]);
}

#[test]
fn text_filter_prefers_full_address() {
    let results = vec![Business {
        full_address: Some("1 Main St, Springfield".into()),
        address: Some("1 Main St".into()),
        ..Business::default()
    }];
    let view = refine(&results, &controls(SortKey::Relevance, MinRating::Any, "springfield"));
    assert_eq!(view, vec![0]);
}

#[test]
fn text_filter_falls_back_to_short_address() {
    let results = vec![Business {
        address: Some("12 Elm Street".into()),
        ..Business::default()
    }];
    let view = refine(&results, &controls(SortKey::Relevance, MinRating::Any, "elm"));
    assert_eq!(view, vec![0]);
}

#[test]
fn whitespace_filter_is_ignored() {
    let results = three_records();
    let view = refine(&results, &controls(SortKey::Relevance, MinRating::Any, "   "));
    assert_eq!(view, vec![0, 1, 2]);
}

#[test]
fn filters_compose_before_sort() {
    let mut results = three_records();
    results[1].kind = Some("Cafe".into());
    results[0].kind = Some("Cafe".into());
    let view = refine(&results, &controls(SortKey::Reviews, MinRating::Three, "cafe"));
    assert_eq!(view, vec![1, 0]);
}

#[test]
fn empty_result_set_yields_empty_view() {
    let view = refine(&[], &controls(SortKey::Name, MinRating::Four, "x"));
    assert!(view.is_empty());
}

#[test]
fn refine_is_idempotent() {
    let results = three_records();
    let c = controls(SortKey::Reviews, MinRating::Three, "");
    assert_eq!(refine(&results, &c), refine(&results, &c));
}

#[test]
fn sort_key_cycles_through_all_options() {
    let mut key = SortKey::Relevance;
    let mut seen = vec![key];
    for _ in 0..3 {
        key = key.next();
        seen.push(key);
    }
    assert_eq!(seen, SortKey::ALL.to_vec());
    assert_eq!(key.next(), SortKey::Relevance);
    assert_eq!(SortKey::Relevance.prev(), SortKey::Name);
}

#[test]
fn min_rating_cycles_and_wraps() {
    assert_eq!(MinRating::Any.next(), MinRating::Three);
    assert_eq!(MinRating::FourAndHalf.next(), MinRating::Any);
    assert_eq!(MinRating::Any.prev(), MinRating::FourAndHalf);
    assert_eq!(MinRating::Four.threshold(), 4.0);
}

#[test]
fn locale_cmp_orders_case_variants_lowercase_first() {
    assert_eq!(locale_cmp("apple", "Apple"), Ordering::Less);
    assert_eq!(locale_cmp("Apple", "banana"), Ordering::Less);
    assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
}

#[test]
fn sort_by_name_places_accented_letters_with_their_base() {
    let results = vec![
        business(Some("Zeta Bar"), None, None),
        business(Some("Éclair House"), None, None),
        business(Some("apple"), None, None),
    ];
    let view = refine(&results, &controls(SortKey::Name, MinRating::Any, ""));
    assert_eq!(view, vec![2, 1, 0]);
}

#[test]
fn locale_cmp_orders_unaccented_before_accented() {
    assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
    assert_eq!(locale_cmp("résumé", "resumes"), Ordering::Less);
    assert_eq!(locale_cmp("Ñandu", "nz"), Ordering::Less);
}
