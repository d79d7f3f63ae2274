//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events,
//! hit-tested against the regions recorded by the last render.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::state::app_state::{AppState, Focus};
use crate::state::regions::{Hit, ScreenRegions};

/// Lines scrolled per wheel notch in the detail overlay.
const WHEEL_LINES: u16 = 3;

/// Handle a mouse event and update AppState accordingly.
pub fn handle_mouse(state: &mut AppState, event: MouseEvent, regions: &ScreenRegions) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(state, event.column, event.row, regions)
        }
        MouseEventKind::ScrollUp => handle_wheel(state, -1, event.column, event.row, regions),
        MouseEventKind::ScrollDown => handle_wheel(state, 1, event.column, event.row, regions),
        _ => {}
    }
}

/// Handle a left click at `(column, row)`.
///
/// # Behavior
/// - Overlay open: the close control and the backdrop close it; clicks
///   inside the dialog do nothing.
/// - A field takes focus; clicking a selector also advances it.
/// - "[ Details ]" opens the overlay for that card; elsewhere on a card
///   selects it.
pub fn handle_click(state: &mut AppState, column: u16, row: u16, regions: &ScreenRegions) {
    match regions.hit(column, row) {
        Hit::OverlayClose | Hit::OverlayBackdrop => state.close_details(),
        Hit::OverlayContent | Hit::Nothing => {}
        Hit::Field(focus) => {
            state.set_focus(focus);
            match focus {
                Focus::Sort => {
                    let sort = state.controls().sort.next();
                    state.set_sort(sort);
                }
                Focus::MinRating => {
                    let min_rating = state.controls().min_rating.next();
                    state.set_min_rating(min_rating);
                }
                _ => {}
            }
        }
        Hit::SearchButton => state.submit_search(),
        Hit::DetailsButton(position) => {
            state.set_focus(Focus::Results);
            state.open_details(position);
        }
        Hit::Card(position) => {
            state.set_focus(Focus::Results);
            state.select(position);
        }
    }
}

fn handle_wheel(
    state: &mut AppState,
    direction: isize,
    column: u16,
    row: u16,
    regions: &ScreenRegions,
) {
    if state.detail().is_visible() {
        let max_scroll = regions.overlay.map_or(0, |o| o.max_scroll);
        if direction < 0 {
            state.scroll_details_up(WHEEL_LINES);
        } else {
            state.scroll_details_down(WHEEL_LINES, max_scroll);
        }
        return;
    }

    if regions.over_results(column, row) {
        state.select_by(direction);
        state.ensure_selection_visible(regions.visible_cards);
    }
}

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
