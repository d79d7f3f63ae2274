//! Search form row: query, location, limit, language and the submit control.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::{AppState, Focus, ScreenRegions};
use crate::view::constants::SEARCH_BUTTON;
use crate::view::helpers::text_input_paragraph;
use crate::view::styles::Palette;

/// Render the form into `area` and record its interactive regions.
pub fn render_search_form(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    regions: &mut ScreenRegions,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Min(12),
        ])
        .split(area);

    let fields = [
        (Focus::Query, "Search", &state.form.query, chunks[0]),
        (Focus::Location, "Location", &state.form.location, chunks[1]),
        (Focus::Limit, "Limit", &state.form.limit, chunks[2]),
        (Focus::Language, "Lang", &state.form.language, chunks[3]),
    ];

    for (focus, title, input, field_area) in fields {
        let focused = state.focus() == focus && !state.detail().is_visible();
        frame.render_widget(
            text_input_paragraph(title, input, focused, field_area, palette),
            field_area,
        );
        regions.fields.push((focus, field_area));
    }

    let button_area = chunks[4];
    let button = Paragraph::new(SEARCH_BUTTON)
        .style(palette.button)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border),
        );
    frame.render_widget(button, button_area);
    regions.search_button = Some(button_area);
}
