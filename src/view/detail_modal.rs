//! Business detail overlay rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, DetailBody, OverlayRegion, ScreenRegions};
use crate::view::constants::{
    CLOSE_BUTTON, DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT,
};
use crate::view::helpers::{centered_rect, empty_line, key_value_line, wrapped_height};
use crate::view::results::rating_spans;
use crate::view::styles::Palette;
use crate::view_model::{DetailView, LOADING_DETAILS};

/// Render the detail overlay centered on the screen.
///
/// Only renders when the overlay is open. The dimmed area around the dialog
/// is the backdrop; the `[ Close ]` control sits on the top border.
pub fn render_detail_modal(
    frame: &mut Frame,
    state: &AppState,
    palette: &Palette,
    regions: &mut ScreenRegions,
) {
    let Some(body) = state.detail().body() else {
        return;
    };

    let area = frame.area();
    let popup_area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        area,
    );

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let lines = body_lines(body, palette);
    let inner_width = popup_area.width.saturating_sub(2);
    let inner_height = popup_area.height.saturating_sub(2);
    let max_scroll = wrapped_height(&lines, inner_width).saturating_sub(inner_height);
    let scroll = state.detail().scroll().min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title_top(" Business Details ")
                .title_top(
                    Line::from(Span::styled(CLOSE_BUTTON, palette.button)).right_aligned(),
                )
                .borders(Borders::ALL)
                .border_style(palette.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll, 0));

    frame.render_widget(paragraph, popup_area);

    regions.overlay = Some(OverlayRegion {
        content: popup_area,
        close_button: close_button_rect(popup_area),
        max_scroll,
        page: inner_height.max(1),
    });
}

/// Where the `[ Close ]` control lands on the dialog's top border.
pub fn close_button_rect(popup_area: Rect) -> Rect {
    let width = (CLOSE_BUTTON.width() as u16).min(popup_area.width.saturating_sub(2));
    Rect {
        x: (popup_area.x + popup_area.width).saturating_sub(1 + width),
        y: popup_area.y,
        width,
        height: 1,
    }
}

fn body_lines(body: &DetailBody, palette: &Palette) -> Vec<Line<'static>> {
    match body {
        DetailBody::Loading => vec![Line::styled(LOADING_DETAILS, palette.loading)],
        DetailBody::Failed(failure) => vec![Line::from(vec![
            Span::styled("✖ ", palette.error),
            Span::styled(failure.message(), palette.error),
        ])],
        DetailBody::Loaded(business) => detail_lines(&DetailView::from_business(business), palette),
    }
}

/// Sections of a loaded record, in display order.
pub fn detail_lines(view: &DetailView, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(view.title.to_string(), palette.title),
        Line::from(rating_spans(&view.rating, palette)),
        empty_line(),
        Line::styled("Contact Information", palette.section_header),
    ];

    for item in &view.contact {
        let value_style = if item.label == "Website" {
            palette.link
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", item.label), palette.muted),
            Span::styled(item.value.to_string(), value_style),
        ]));
    }

    lines.push(empty_line());
    lines.push(Line::styled("Location", palette.section_header));
    lines.push(Line::from(format!("  {}", view.location)));

    if let Some(hours) = &view.hours {
        lines.push(empty_line());
        lines.push(Line::styled("Opening Hours", palette.section_header));
        for row in hours {
            lines.push(key_value_line(
                &format!("  {}", row.day),
                row.hours.as_str(),
                palette.muted,
            ));
        }
    }

    if let Some(about) = &view.about {
        lines.push(empty_line());
        lines.push(Line::styled("About", palette.section_header));
        if let Some(kind) = &about.kind {
            lines.push(key_value_line("  Type", kind.as_str(), palette.muted));
        }
        if let Some(description) = &about.description {
            lines.push(Line::from(format!("  {description}")));
        }
    }

    lines
}
