//! Identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.

use std::fmt;
use thiserror::Error;

/// Backend identifier of a single business.
///
/// Used as the key for detail lookups. The backend treats an empty
/// identifier as a client error, so one can never be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BusinessId(String);

impl BusinessId {
    /// Smart constructor: rejects empty and whitespace-only identifiers.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidBusinessId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidBusinessId);
        }
        Ok(Self(raw))
    }

    /// Raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returned when a business identifier is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("business identifier must not be empty")]
pub struct InvalidBusinessId;
