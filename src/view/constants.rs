//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title bar in lines.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the search form row (border + input line).
pub const SEARCH_FORM_HEIGHT: u16 = 3;

/// Height of the results controls row (border + selector line).
pub const CONTROLS_HEIGHT: u16 = 3;

/// Height of the results count line.
pub const COUNT_LINE_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of one result card: border, rating, address, phone/website,
/// action row, border.
pub const CARD_HEIGHT: u16 = 6;

/// Row of the `[ Details ]` action, relative to the card's top border.
pub const CARD_ACTION_ROW: u16 = 4;

/// Width percentage for the detail overlay.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for the detail overlay.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Label of the per-card detail action.
pub const DETAILS_BUTTON: &str = "[ Details ]";

/// Label of the overlay close control.
pub const CLOSE_BUTTON: &str = "[ Close ]";

/// Label of the form submit control.
pub const SEARCH_BUTTON: &str = "[ Search ]";
