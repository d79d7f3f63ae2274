//! Loading indicator, error banner, idle hint and status bar.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, Focus};
use crate::view::styles::Palette;
use crate::view_model::SafeText;

/// Loading indicator text.
pub const LOADING_TEXT: &str = "Searching businesses...";
/// Body text before the first search.
pub const IDLE_HINT: &str = "Enter what you are looking for and where, then press Enter.";

/// Render the loading indicator centered in `area`.
pub fn render_loading(frame: &mut Frame, area: Rect, palette: &Palette) {
    render_centered_line(frame, area, Line::styled(LOADING_TEXT, palette.loading));
}

/// Render the idle hint shown before the first search.
pub fn render_idle(frame: &mut Frame, area: Rect, palette: &Palette) {
    render_centered_line(frame, area, Line::styled(IDLE_HINT, palette.muted));
}

/// Render the error banner with a server- or client-supplied message.
pub fn render_error_banner(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let message = SafeText::new(message);
    let height = area.height.min(4);
    let banner_area = Rect { height, ..area };

    let banner = Paragraph::new(Line::from(vec![
        Span::styled("✖ ", palette.error),
        Span::raw(message.into_string()),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(palette.error),
    );
    frame.render_widget(banner, banner_area);
}

fn render_centered_line(frame: &mut Frame, area: Rect, line: Line<'static>) {
    if area.height == 0 {
        return;
    }
    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

/// Key hints for the current context.
pub fn status_hints(state: &AppState) -> &'static str {
    if state.detail().is_visible() {
        return " ↑/↓ scroll · PgUp/PgDn page · Esc close · Ctrl+C quit";
    }
    match state.focus() {
        Focus::Query | Focus::Location | Focus::Limit | Focus::Language => {
            " Enter search · Tab next field · Ctrl+C quit"
        }
        Focus::Sort | Focus::MinRating => {
            " ←/→ change · Tab next · Esc back to search · q quit"
        }
        Focus::Filter => " Type to filter · Tab next · Esc back to search · Ctrl+C quit",
        Focus::Results => " ↑/↓ select · Enter details · Tab next · Esc back to search · q quit",
    }
}

/// Render the one-line status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(Line::styled(status_hints(state), palette.muted)),
        area,
    );
}
