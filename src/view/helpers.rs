//! Small rendering helpers shared by view modules.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::TextInput;
use crate::view::styles::Palette;

/// Blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `label: value` line with a styled label.
pub fn key_value_line(label: &str, value: &str, label_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(value.to_string()),
    ])
}

/// Bordered block whose border reflects focus.
pub fn focus_block<'a>(title: &'a str, focused: bool, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(palette.border_for(focused))
}

/// Single-line input with the cursor drawn when focused.
///
/// When the value is wider than `width`, the view keeps the cursor in sight by
/// dropping characters from the left.
pub fn text_input_line(
    input: &TextInput,
    focused: bool,
    width: u16,
    palette: &Palette,
) -> Line<'static> {
    if !focused {
        return Line::from(input.value().to_string());
    }

    let (before, at, after) = input.split_at_cursor();
    let cursor = at.map_or_else(|| " ".to_string(), |c| c.to_string());

    // Leave one cell for the cursor itself.
    let budget = usize::from(width).saturating_sub(1);
    let before = tail_within(before, budget);

    Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(cursor, palette.cursor),
        Span::raw(after.to_string()),
    ])
}

/// Input paragraph inside a focus-aware block.
pub fn text_input_paragraph<'a>(
    title: &'a str,
    input: &TextInput,
    focused: bool,
    area: Rect,
    palette: &Palette,
) -> Paragraph<'a> {
    let inner_width = area.width.saturating_sub(2);
    Paragraph::new(text_input_line(input, focused, inner_width, palette))
        .block(focus_block(title, focused, palette))
}

/// Longest suffix of `text` that fits in `width` terminal cells.
fn tail_within(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut start = text.len();
    let mut used = 0;
    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Rect centered in `area` covering the given percentages.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let scale = |len: u16, pct: u16| (u32::from(len) * u32::from(pct.min(100)) / 100) as u16;
    let popup_width = scale(area.width, percent_x);
    let popup_height = scale(area.height, percent_y);
    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Number of rows `lines` occupy when wrapped to `width` cells.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
