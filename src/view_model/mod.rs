//! View models: display-ready, sanitized projections of records.
//!
//! Every untrusted string passes through [`sanitize::SafeText`] here, once,
//! before any widget sees it.
//!
//! # Module Structure
//!
//! - `sanitize`: SafeText - escape-sequence and control-character stripping
//! - `stars`: StarGlyph - five-glyph rating
//! - `card`: CardView - one result card with placeholders applied
//! - `detail`: DetailView - sections of the detail overlay

pub mod card;
pub mod detail;
pub mod sanitize;
pub mod stars;

pub use card::{CardView, OpenStatus, RatingView, NO_RESULTS};
pub use detail::{AboutView, ContactItem, DetailView, HoursRow, LOADING_DETAILS};
pub use sanitize::{sanitize, SafeText};
pub use stars::{star_string, stars, StarGlyph, STAR_COUNT};
