//! Client-side filter and sort over the Result set (pure).
//!
//! The View set is a list of indices into the Result set, recomputed from
//! scratch on every control change. Indices make "View set ⊆ Result set"
//! hold by construction.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::Business;
use crate::state::text_input::TextInput;

/// Sort key selected in the results controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Backend order, untouched.
    #[default]
    Relevance,
    /// Highest rating first, missing as 0.
    Rating,
    /// Most reviews first, missing as 0.
    Reviews,
    /// Name ascending, accent- and case-insensitive first.
    Name,
}

impl SortKey {
    /// Every key in selector order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::Rating,
        SortKey::Reviews,
        SortKey::Name,
    ];

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Rating => "Highest rated",
            SortKey::Reviews => "Most reviewed",
            SortKey::Name => "Name (A-Z)",
        }
    }

    /// Next key, wrapping.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous key, wrapping.
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

/// Minimum-rating filter options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MinRating {
    /// No threshold.
    #[default]
    Any,
    /// 3.0 and up.
    Three,
    /// 3.5 and up.
    ThreeAndHalf,
    /// 4.0 and up.
    Four,
    /// 4.5 and up.
    FourAndHalf,
}

impl MinRating {
    /// Every option in selector order.
    pub const ALL: [MinRating; 5] = [
        MinRating::Any,
        MinRating::Three,
        MinRating::ThreeAndHalf,
        MinRating::Four,
        MinRating::FourAndHalf,
    ];

    /// Minimum rating kept; 0 keeps everything.
    pub fn threshold(self) -> f64 {
        match self {
            MinRating::Any => 0.0,
            MinRating::Three => 3.0,
            MinRating::ThreeAndHalf => 3.5,
            MinRating::Four => 4.0,
            MinRating::FourAndHalf => 4.5,
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            MinRating::Any => "Any rating",
            MinRating::Three => "3.0+",
            MinRating::ThreeAndHalf => "3.5+",
            MinRating::Four => "4.0+",
            MinRating::FourAndHalf => "4.5+",
        }
    }

    /// Next option, wrapping.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous option, wrapping.
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(pos + step) % all.len()]
}

/// State of the results controls panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefineControls {
    /// Sort key.
    pub sort: SortKey,
    /// Rating threshold.
    pub min_rating: MinRating,
    /// Free-text filter as typed.
    pub filter: TextInput,
}

impl RefineControls {
    /// Filter term as matched: trimmed and lowercased.
    pub fn filter_term(&self) -> String {
        self.filter.trimmed().to_lowercase()
    }
}

/// Compute the View set for the given controls.
pub fn refine(results: &[Business], controls: &RefineControls) -> Vec<usize> {
    refine_with(
        results,
        controls.min_rating.threshold(),
        &controls.filter_term(),
        controls.sort,
    )
}

/// Compute the View set from raw criteria.
///
/// Order is fixed: rating filter, then text filter, then a stable sort.
/// `term` must already be trimmed and lowercased.
pub fn refine_with(results: &[Business], min_rating: f64, term: &str, sort: SortKey) -> Vec<usize> {
    let mut view: Vec<usize> = (0..results.len()).collect();

    if min_rating > 0.0 {
        view.retain(|&i| results[i].rating_or_zero() >= min_rating);
    }

    if !term.is_empty() {
        view.retain(|&i| matches_term(&results[i], term));
    }

    // slice::sort_by is stable: equal keys keep Result set order.
    match sort {
        SortKey::Relevance => {}
        SortKey::Rating => view.sort_by(|&a, &b| {
            results[b]
                .rating_or_zero()
                .total_cmp(&results[a].rating_or_zero())
        }),
        SortKey::Reviews => view.sort_by(|&a, &b| {
            results[b]
                .review_count_or_zero()
                .cmp(&results[a].review_count_or_zero())
        }),
        SortKey::Name => view.sort_by(|&a, &b| {
            locale_cmp(
                results[a].name.as_deref().unwrap_or(""),
                results[b].name.as_deref().unwrap_or(""),
            )
        }),
    }

    view
}

/// Substring match of `term` against lowercased name, address and type.
fn matches_term(business: &Business, term: &str) -> bool {
    [
        business.name.as_deref(),
        business.display_address(),
        business.kind.as_deref(),
    ]
    .into_iter()
    .any(|field| field.unwrap_or("").to_lowercase().contains(term))
}

/// Collation-style string ordering.
///
/// Levels are compared in turn: base letters (accents and case ignored),
/// then accents, then case with lowercase first. Equal collation keys fall
/// back to the raw strings so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let base = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<Vec<_>>()
    };
    let accented = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();
    let case = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .map(char::is_uppercase)
            .collect::<Vec<_>>()
    };

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| case(a).cmp(&case(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "refine_tests.rs"]
mod tests;
