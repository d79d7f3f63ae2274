//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod business;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod request;

// Re-export for convenience
pub use business::{Business, DayHours};
pub use error::ApiError;
pub use identifiers::{BusinessId, InvalidBusinessId};
pub use key_action::KeyAction;
pub use request::{DetailRequest, Envelope, HealthStatus, SearchParams};
