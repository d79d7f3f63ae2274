//! Screen layout.
//!
//! Splits the terminal into title bar, search form, body and status bar, and
//! lays the detail overlay on top when it is open. Every frame produces the
//! `ScreenRegions` the input handlers hit-test against.

use crate::state::{AppState, ScreenRegions, SearchPhase};
use crate::view::constants::{
    CONTROLS_HEIGHT, COUNT_LINE_HEIGHT, SEARCH_FORM_HEIGHT, STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT,
};
use crate::view::detail_modal::render_detail_modal;
use crate::view::results::{render_controls, render_count, render_result_list};
use crate::view::search_form::render_search_form;
use crate::view::status::{render_error_banner, render_idle, render_loading, render_status_bar};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole screen and return the regions it drew.
pub fn render_app(frame: &mut Frame, state: &AppState, palette: &Palette) -> ScreenRegions {
    let mut regions = ScreenRegions::default();

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Length(SEARCH_FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_title_bar(frame, vertical_chunks[0], state, palette);
    render_search_form(frame, vertical_chunks[1], state, palette, &mut regions);
    render_body(frame, vertical_chunks[2], state, palette, &mut regions);
    render_status_bar(frame, vertical_chunks[3], state, palette);

    // Overlay last so it covers everything beneath it
    render_detail_modal(frame, state, palette, &mut regions);

    regions
}

fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut spans = vec![Span::styled(" bizlens ", palette.title)];
    if state.is_loading() {
        spans.push(Span::styled("· searching", palette.loading));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    regions: &mut ScreenRegions,
) {
    match state.phase() {
        SearchPhase::Idle => render_idle(frame, area, palette),
        SearchPhase::Loading => render_loading(frame, area, palette),
        SearchPhase::Failed(message) => render_error_banner(frame, area, message, palette),
        SearchPhase::Ready => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(CONTROLS_HEIGHT),
                    Constraint::Length(COUNT_LINE_HEIGHT),
                    Constraint::Min(0),
                ])
                .split(area);

            render_controls(frame, chunks[0], state, palette, regions);
            render_count(frame, chunks[1], state, palette);
            render_result_list(frame, chunks[2], state, palette, regions);
        }
    }
}
