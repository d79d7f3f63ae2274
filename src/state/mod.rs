//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod detail_overlay;
pub mod form;
pub mod key_handler;
pub mod mouse_handler;
pub mod refine;
pub mod regions;
pub mod text_input;

// Re-export for convenience
pub use app_state::{AppState, Completion, Effect, Focus, SearchPhase};
pub use detail_overlay::{DetailBody, DetailFailure, DetailOverlay};
pub use form::SearchForm;
pub use key_handler::{handle_key, KeyOutcome};
pub use mouse_handler::handle_mouse;
pub use refine::{refine, MinRating, RefineControls, SortKey};
pub use regions::{CardRegion, Hit, OverlayRegion, ScreenRegions};
pub use text_input::TextInput;
