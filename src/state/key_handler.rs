//! Keyboard event handler.
//!
//! Pure function that transforms AppState in response to key events.
//! Routing order: Ctrl+C, then the detail overlay (modal), then the focused
//! text input, then configured bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::app_state::{AppState, Focus};
use crate::state::regions::ScreenRegions;
use crate::state::text_input::TextInput;

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Editing operation on a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Handle one key press.
pub fn handle_key(
    state: &mut AppState,
    key: KeyEvent,
    bindings: &KeyBindings,
    regions: &ScreenRegions,
) -> KeyOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    if state.detail().is_visible() {
        return handle_overlay_key(state, bindings.get(key), regions);
    }

    let focus = state.focus();
    if focus.is_text_input() {
        if let Some(edit) = text_edit(key) {
            apply_text_edit(state, focus, edit);
            return KeyOutcome::Continue;
        }
    }

    match bindings.get(key) {
        Some(action) => dispatch(state, action, regions),
        None => KeyOutcome::Continue,
    }
}

/// Keys while the detail overlay is open. Everything else is swallowed.
fn handle_overlay_key(
    state: &mut AppState,
    action: Option<KeyAction>,
    regions: &ScreenRegions,
) -> KeyOutcome {
    let (max_scroll, page) = regions
        .overlay
        .map_or((0, 1), |o| (o.max_scroll, o.page.max(1)));

    match action {
        Some(KeyAction::Cancel) => state.close_details(),
        Some(KeyAction::MoveUp) => state.scroll_details_up(1),
        Some(KeyAction::MoveDown) => state.scroll_details_down(1, max_scroll),
        Some(KeyAction::PageUp) => state.scroll_details_up(page),
        Some(KeyAction::PageDown) => state.scroll_details_down(page, max_scroll),
        Some(KeyAction::Quit) => return KeyOutcome::Quit,
        _ => {}
    }
    KeyOutcome::Continue
}

fn text_edit(key: KeyEvent) -> Option<TextEdit> {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(TextEdit::Insert(ch))
        }
        KeyCode::Backspace => Some(TextEdit::Backspace),
        KeyCode::Delete => Some(TextEdit::Delete),
        KeyCode::Left => Some(TextEdit::Left),
        KeyCode::Right => Some(TextEdit::Right),
        KeyCode::Home => Some(TextEdit::Home),
        KeyCode::End => Some(TextEdit::End),
        _ => None,
    }
}

fn apply_text_edit(state: &mut AppState, focus: Focus, edit: TextEdit) {
    let apply = |input: &mut TextInput| match edit {
        TextEdit::Insert(ch) => input.insert(ch),
        TextEdit::Backspace => {
            input.backspace();
        }
        TextEdit::Delete => {
            input.delete();
        }
        TextEdit::Left => input.move_left(),
        TextEdit::Right => input.move_right(),
        TextEdit::Home => input.move_home(),
        TextEdit::End => input.move_end(),
    };

    match focus {
        Focus::Query => apply(&mut state.form.query),
        Focus::Location => apply(&mut state.form.location),
        Focus::Limit => apply(&mut state.form.limit),
        Focus::Language => apply(&mut state.form.language),
        Focus::Filter => state.edit_filter(apply),
        Focus::Sort | Focus::MinRating | Focus::Results => {}
    }
}

fn dispatch(state: &mut AppState, action: KeyAction, regions: &ScreenRegions) -> KeyOutcome {
    let focus = state.focus();
    let page = regions.visible_cards.max(1) as isize;

    match action {
        KeyAction::Quit => return KeyOutcome::Quit,
        KeyAction::FocusNext => state.focus_next(),
        KeyAction::FocusPrev => state.focus_prev(),
        KeyAction::Cancel => state.set_focus(Focus::Query),

        KeyAction::Activate if focus.is_form_field() => state.submit_search(),
        KeyAction::Activate if focus == Focus::Results => state.open_selected_details(),
        KeyAction::Activate => {}

        KeyAction::MoveUp | KeyAction::OptionPrev => step_focused(state, focus, -1, regions),
        KeyAction::MoveDown | KeyAction::OptionNext => step_focused(state, focus, 1, regions),
        KeyAction::PageUp => step_focused(state, focus, -page, regions),
        KeyAction::PageDown => step_focused(state, focus, page, regions),
    }
    KeyOutcome::Continue
}

/// Move the selection or cycle the focused selector by `delta`.
fn step_focused(state: &mut AppState, focus: Focus, delta: isize, regions: &ScreenRegions) {
    match focus {
        Focus::Results => {
            state.select_by(delta);
            state.ensure_selection_visible(regions.visible_cards);
        }
        Focus::Sort => {
            let controls = state.controls();
            let sort = if delta > 0 {
                controls.sort.next()
            } else {
                controls.sort.prev()
            };
            state.set_sort(sort);
        }
        Focus::MinRating => {
            let controls = state.controls();
            let min_rating = if delta > 0 {
                controls.min_rating.next()
            } else {
                controls.min_rating.prev()
            };
            state.set_min_rating(min_rating);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
