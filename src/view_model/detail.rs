//! Detail overlay view model.

use crate::model::Business;
use crate::view_model::card::{text_or, RatingView, UNKNOWN_ADDRESS};
use crate::view_model::sanitize::SafeText;

/// Overlay title when the record has no name.
pub const DETAIL_TITLE_FALLBACK: &str = "Business Details";
/// Overlay body while the lookup runs.
pub const LOADING_DETAILS: &str = "Loading details...";
/// Hours text for a day without hours.
pub const CLOSED_HOURS: &str = "Closed";

/// One labelled contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    /// Field label.
    pub label: &'static str,
    /// Field value.
    pub value: SafeText,
}

/// One weekday row of the opening hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursRow {
    /// Weekday.
    pub day: SafeText,
    /// Hours, or "Closed".
    pub hours: SafeText,
}

/// The About section. At least one field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutView {
    /// Business type.
    pub kind: Option<SafeText>,
    /// Description.
    pub description: Option<SafeText>,
}

/// Sections of a loaded detail record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Name or fallback title.
    pub title: SafeText,
    /// Rating line.
    pub rating: RatingView,
    /// Present fields among Phone, Website, Email, in that order.
    pub contact: Vec<ContactItem>,
    /// Address or placeholder.
    pub location: SafeText,
    /// `None` when the record carries no hours.
    pub hours: Option<Vec<HoursRow>>,
    /// `None` when neither type nor description is present.
    pub about: Option<AboutView>,
}

impl DetailView {
    /// Sections for a loaded record.
    pub fn from_business(business: &Business) -> Self {
        let contact = [
            ("Phone", business.phone_number.as_deref()),
            ("Website", business.website.as_deref()),
            ("Email", business.email.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value.map(|v| ContactItem {
                label,
                value: SafeText::new(v),
            })
        })
        .collect();

        let hours = business
            .working_hours
            .as_ref()
            .filter(|days| !days.is_empty())
            .map(|days| {
                days.iter()
                    .map(|day| HoursRow {
                        day: SafeText::new(&day.day),
                        hours: text_or(day.hours.as_deref(), CLOSED_HOURS),
                    })
                    .collect()
            });

        let kind = business.kind.as_deref().map(SafeText::new);
        let description = business.description.as_deref().map(SafeText::new);
        let about =
            (kind.is_some() || description.is_some()).then_some(AboutView { kind, description });

        Self {
            title: text_or(business.name.as_deref(), DETAIL_TITLE_FALLBACK),
            rating: RatingView::from_business(business),
            contact,
            location: text_or(business.display_address(), UNKNOWN_ADDRESS),
            hours,
            about,
        }
    }
}
