//! Results controls panel, count line and result card list.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, CardRegion, Focus, ScreenRegions};
use crate::view::constants::{CARD_ACTION_ROW, CARD_HEIGHT, DETAILS_BUTTON};
use crate::view::helpers::{focus_block, text_input_paragraph};
use crate::view::styles::Palette;
use crate::view_model::{CardView, OpenStatus, RatingView, SafeText, NO_RESULTS};

// ===== Controls =====

/// Render the sort selector, min-rating selector and text filter.
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    regions: &mut ScreenRegions,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ])
        .split(area);

    let overlay_open = state.detail().is_visible();
    let focused = |focus: Focus| state.focus() == focus && !overlay_open;
    let controls = state.controls();

    frame.render_widget(
        selector("Sort by", controls.sort.label(), focused(Focus::Sort), palette),
        chunks[0],
    );
    regions.fields.push((Focus::Sort, chunks[0]));

    frame.render_widget(
        selector(
            "Min rating",
            controls.min_rating.label(),
            focused(Focus::MinRating),
            palette,
        ),
        chunks[1],
    );
    regions.fields.push((Focus::MinRating, chunks[1]));

    frame.render_widget(
        text_input_paragraph(
            "Filter",
            &controls.filter,
            focused(Focus::Filter),
            chunks[2],
            palette,
        ),
        chunks[2],
    );
    regions.fields.push((Focus::Filter, chunks[2]));
}

/// Cycling selector. Arrows are shown while focused.
fn selector<'a>(
    title: &'a str,
    value: &'static str,
    focused: bool,
    palette: &Palette,
) -> Paragraph<'a> {
    let line = if focused {
        Line::from(vec![
            Span::styled("◀ ", palette.focused_border),
            Span::raw(value),
            Span::styled(" ▶", palette.focused_border),
        ])
    } else {
        Line::from(value)
    };
    Paragraph::new(line).block(focus_block(title, focused, palette))
}

// ===== Count =====

/// Render the View set size, with the backend's echoed query if any.
pub fn render_count(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let count = state.view_count();
    let noun = if count == 1 { "business" } else { "businesses" };
    let mut spans = vec![
        Span::styled(count.to_string(), palette.title),
        Span::raw(format!(" {noun} found")),
    ];
    if let Some(query) = state.echoed_query() {
        let query = SafeText::new(query);
        if !query.is_empty() {
            spans.push(Span::styled(format!(" for \"{query}\""), palette.muted));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ===== Result list =====

/// First card to draw so that `selected` is inside a window of `visible` cards.
pub fn window_start(offset: usize, selected: usize, visible: usize, len: usize) -> usize {
    let visible = visible.max(1);
    let start = if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    };
    start.min(len.saturating_sub(visible))
}

/// Render the card list (or the empty placeholder) and record card regions.
///
/// Cards are rebuilt from the View set on every frame.
pub fn render_result_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    palette: &Palette,
    regions: &mut ScreenRegions,
) {
    regions.results_list = Some(area);

    if state.view_count() == 0 {
        let placeholder = Paragraph::new(NO_RESULTS)
            .style(palette.muted)
            .alignment(Alignment::Center);
        let y = area.y + area.height / 2;
        let row = Rect {
            y,
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(placeholder, row);
        regions.visible_cards = 0;
        return;
    }

    let visible = usize::from(area.height / CARD_HEIGHT).max(1);
    regions.visible_cards = visible;

    let selected = state.selected().unwrap_or(0);
    let start = window_start(state.list_offset(), selected, visible, state.view_count());
    let list_focused = state.focus() == Focus::Results && !state.detail().is_visible();

    for (slot, (position, business)) in state
        .view_records()
        .enumerate()
        .skip(start)
        .take(visible)
        .enumerate()
    {
        let y = area.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect { y, height, ..area };
        let is_selected = position == selected;

        let card = CardView::from_business(business);
        render_card(frame, card_area, &card, is_selected, list_focused, palette);

        regions.cards.push(CardRegion {
            position,
            area: card_area,
            details_button: details_button_rect(card_area),
        });
    }
}

/// Where the `[ Details ]` action of a card drawn at `card_area` lands.
pub fn details_button_rect(card_area: Rect) -> Rect {
    let row = card_area.y + CARD_ACTION_ROW;
    if row >= card_area.bottom() {
        return Rect::new(card_area.x, card_area.y, 0, 0);
    }
    Rect {
        x: card_area.x + 1,
        y: row,
        width: (DETAILS_BUTTON.width() as u16).min(card_area.width.saturating_sub(2)),
        height: 1,
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &CardView,
    selected: bool,
    list_focused: bool,
    palette: &Palette,
) {
    let border_style = match (selected, list_focused) {
        (true, true) => palette.selected_card,
        (true, false) => palette.focused_border,
        _ => palette.border,
    };
    let title_style = if selected {
        palette.selected_card
    } else {
        palette.title
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", card.name), title_style));

    let mut contact = vec![
        Span::styled("Phone: ", palette.muted),
        Span::raw(card.phone.to_string()),
    ];
    if let Some(website) = &card.website {
        contact.push(Span::styled("   Web: ", palette.muted));
        contact.push(Span::styled(website.to_string(), palette.link));
    }

    let mut action = vec![Span::styled(DETAILS_BUTTON, palette.button)];
    if let Some(status) = card.status {
        let style = match status {
            OpenStatus::Open => palette.badge_open,
            OpenStatus::Closed => palette.badge_closed,
        };
        action.push(Span::raw("   "));
        action.push(Span::styled(status.label(), style));
    }

    let mut rating = rating_spans(&card.rating, palette);
    rating.push(Span::styled(format!("  ·  {}", card.kind), palette.muted));

    let lines = vec![
        Line::from(rating),
        Line::from(vec![
            Span::styled("Address: ", palette.muted),
            Span::raw(card.address.to_string()),
        ]),
        Line::from(contact),
        Line::from(action),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Stars, value and review count.
pub fn rating_spans(rating: &RatingView, palette: &Palette) -> Vec<Span<'static>> {
    let stars: String = rating.stars.iter().map(|g| g.symbol()).collect();
    vec![
        Span::styled(stars, palette.stars),
        Span::raw(format!(" {} ", rating.value)),
        Span::styled(rating.reviews.clone(), palette.muted),
    ]
}
