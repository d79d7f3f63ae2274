//! Result card view model.

use crate::model::Business;
use crate::view_model::sanitize::SafeText;
use crate::view_model::stars::{stars, StarGlyph, STAR_COUNT};

/// Placeholder for a missing name.
pub const UNKNOWN_NAME: &str = "Unknown Business";
/// Placeholder for a missing type.
pub const UNKNOWN_TYPE: &str = "Business";
/// Placeholder for a missing address.
pub const UNKNOWN_ADDRESS: &str = "Address not available";
/// Placeholder for a missing phone number.
pub const UNKNOWN_PHONE: &str = "Not available";
/// Shown instead of cards when the View set is empty.
pub const NO_RESULTS: &str = "No businesses found matching your criteria";

/// Open/closed badge. Unknown status has no badge at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    /// Open right now.
    Open,
    /// Closed right now.
    Closed,
}

impl OpenStatus {
    /// Badge for the tri-state flag; `None` when unknown.
    pub fn from_flag(is_open: Option<bool>) -> Option<Self> {
        is_open.map(|open| if open { OpenStatus::Open } else { OpenStatus::Closed })
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            OpenStatus::Open => "Open Now",
            OpenStatus::Closed => "Closed",
        }
    }
}

/// Rating line shared by cards and the detail header.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingView {
    /// Five glyphs, left to right.
    pub stars: [StarGlyph; STAR_COUNT],
    /// One decimal, e.g. `4.5`.
    pub value: String,
    /// e.g. `(120 reviews)`.
    pub reviews: String,
}

impl RatingView {
    /// Rating line for a record, missing values as 0.
    pub fn from_business(business: &Business) -> Self {
        let rating = business.rating_or_zero();
        Self {
            stars: stars(rating),
            value: format!("{rating:.1}"),
            reviews: format!("({} reviews)", business.review_count_or_zero()),
        }
    }
}

/// Everything a card displays, already sanitized and with placeholders
/// substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Name or placeholder.
    pub name: SafeText,
    /// Type or placeholder.
    pub kind: SafeText,
    /// Stars, value and review count.
    pub rating: RatingView,
    /// Address or placeholder.
    pub address: SafeText,
    /// Phone or placeholder.
    pub phone: SafeText,
    /// Website link, when present.
    pub website: Option<SafeText>,
    /// Badge, when the status is known.
    pub status: Option<OpenStatus>,
}

impl CardView {
    /// Card for a record.
    pub fn from_business(business: &Business) -> Self {
        Self {
            name: text_or(business.name.as_deref(), UNKNOWN_NAME),
            kind: text_or(business.kind.as_deref(), UNKNOWN_TYPE),
            rating: RatingView::from_business(business),
            address: text_or(business.display_address(), UNKNOWN_ADDRESS),
            phone: text_or(business.phone_number.as_deref(), UNKNOWN_PHONE),
            website: business.website.as_deref().map(SafeText::new),
            status: OpenStatus::from_flag(business.is_open),
        }
    }
}

/// Sanitized field, or the placeholder when absent.
pub(crate) fn text_or(value: Option<&str>, placeholder: &'static str) -> SafeText {
    value.map_or_else(|| SafeText::literal(placeholder), SafeText::new)
}
