//! Business records as returned by the search backend.
//!
//! Records are loosely typed upstream: any field may be missing, null, or of
//! an unexpected JSON type. Deserialization never fails because of a single
//! odd field; the field degrades to `None` instead.

use serde::Deserialize;

use super::identifiers::BusinessId;

/// A single business as returned by a search or detail lookup.
///
/// Empty strings are normalized to `None` so that "missing" has exactly one
/// representation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Business {
    /// Backend identifier used for detail lookups.
    #[serde(default, deserialize_with = "lenient::string")]
    pub business_id: Option<String>,

    /// Display name.
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    /// Category label, e.g. "Pizza restaurant".
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub kind: Option<String>,

    /// Average rating on a 0-5 scale.
    #[serde(default, deserialize_with = "lenient::rating")]
    pub rating: Option<f64>,

    /// Number of reviews behind `rating`.
    #[serde(default, deserialize_with = "lenient::count")]
    pub review_count: Option<u64>,

    /// Full postal address.
    #[serde(default, deserialize_with = "lenient::string")]
    pub full_address: Option<String>,

    /// Short address, used when `full_address` is missing.
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: Option<String>,

    /// Phone number as given by the backend.
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone_number: Option<String>,

    /// Website URL.
    #[serde(default, deserialize_with = "lenient::string")]
    pub website: Option<String>,

    /// Contact email.
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,

    /// Tri-state: `None` means the backend does not know.
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_open: Option<bool>,

    /// Free-form description.
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,

    /// Weekday → hours, in the order the backend sent them.
    #[serde(default, deserialize_with = "lenient::hours")]
    pub working_hours: Option<Vec<DayHours>>,
}

/// Opening hours for one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    /// Weekday name as sent by the backend.
    pub day: String,
    /// `None` when the business is closed that day.
    pub hours: Option<String>,
}

impl Business {
    /// Validated identifier for detail lookups.
    pub fn id(&self) -> Option<BusinessId> {
        self.business_id
            .as_deref()
            .and_then(|raw| BusinessId::new(raw).ok())
    }

    /// Full address, falling back to the short address.
    pub fn display_address(&self) -> Option<&str> {
        self.full_address.as_deref().or(self.address.as_deref())
    }

    /// Rating with missing treated as zero.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Review count with missing treated as zero.
    pub fn review_count_or_zero(&self) -> u64 {
        self.review_count.unwrap_or(0)
    }
}

/// Field deserializers that map anything unexpected to `None`.
mod lenient {
    use super::DayHours;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn value<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
        Option::<Value>::deserialize(d)
    }

    /// Non-empty string; numbers are stringified.
    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(value(d)?.and_then(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }))
    }

    /// Finite number, or a numeric string.
    pub fn rating<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(value(d)?
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            })
            .filter(|r| r.is_finite()))
    }

    /// Non-negative integer, or a numeric string.
    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(value(d)?.and_then(|v| match v {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }))
    }

    /// Boolean only.
    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        Ok(value(d)?.and_then(|v| v.as_bool()))
    }

    /// Object of weekday → hours, kept in wire order.
    pub fn hours<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<DayHours>>, D::Error> {
        let Some(Value::Object(map)) = value(d)? else {
            return Ok(None);
        };

        Ok(Some(
            map.into_iter()
                .map(|(day, raw)| DayHours {
                    day,
                    hours: hours_text(raw),
                })
                .collect(),
        ))
    }

    /// Flatten an hours value; null, false and empty strings mean "closed".
    /// Whitespace-only text is kept as sent.
    fn hours_text(raw: Value) -> Option<String> {
        match raw {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Array(parts) => {
                let parts: Vec<String> = parts
                    .into_iter()
                    .filter_map(|p| match p {
                        Value::String(s) if !s.is_empty() => Some(s),
                        _ => None,
                    })
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            _ => None,
        }
    }
}
