//! Search form state.

use crate::model::SearchParams;
use crate::state::text_input::TextInput;

/// The four inputs of the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// Search terms.
    pub query: TextInput,
    /// Location.
    pub location: TextInput,
    /// Result limit; parsed on submit.
    pub limit: TextInput,
    /// Language code.
    pub language: TextInput,
}

impl SearchForm {
    /// Form prefilled with the configured limit and language.
    pub fn with_defaults(limit: u32, language: &str) -> Self {
        Self {
            query: TextInput::default(),
            location: TextInput::default(),
            limit: TextInput::new(limit.to_string()),
            language: TextInput::new(language),
        }
    }

    /// Collect request parameters from the inputs.
    ///
    /// Strings are trimmed only. A limit that is not a positive integer is
    /// replaced by `default_limit`.
    pub fn params(&self, default_limit: u32) -> SearchParams {
        SearchParams {
            query: self.query.trimmed().to_string(),
            location: self.location.trimmed().to_string(),
            limit: parse_limit(self.limit.trimmed()).unwrap_or(default_limit),
            language: self.language.trimmed().to_string(),
        }
    }
}

/// Whole positive integers only; no leading-digits prefix parse.
fn parse_limit(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|n| *n > 0)
}
