//! Screen geometry captured from the last render.
//!
//! Rendering records where interactive elements landed; input handlers use it
//! for hit-testing and page sizes. Handlers stay pure: they read this data,
//! they never query the terminal.

use ratatui::layout::{Position, Rect};

use crate::state::app_state::Focus;

/// Interactive areas of the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenRegions {
    /// Focusable inputs and selectors.
    pub fields: Vec<(Focus, Rect)>,
    /// The "[ Search ]" button.
    pub search_button: Option<Rect>,
    /// The area of the result list, when shown.
    pub results_list: Option<Rect>,
    /// Cards actually drawn, top to bottom.
    pub cards: Vec<CardRegion>,
    /// How many cards fit in the list area.
    pub visible_cards: usize,
    /// Detail overlay geometry, when open.
    pub overlay: Option<OverlayRegion>,
}

/// One drawn card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegion {
    /// Position of the record in the View set.
    pub position: usize,
    /// Whole card.
    pub area: Rect,
    /// The card's details action.
    pub details_button: Rect,
}

/// Detail overlay geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayRegion {
    /// The dialog box including its border.
    pub content: Rect,
    /// The close control on the top border.
    pub close_button: Rect,
    /// Largest useful scroll offset for the current body.
    pub max_scroll: u16,
    /// Lines per page.
    pub page: u16,
}

/// What a click at a point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The overlay close control.
    OverlayClose,
    /// Inside the dialog.
    OverlayContent,
    /// Outside the dialog while it is open.
    OverlayBackdrop,
    /// A focusable field or selector.
    Field(Focus),
    /// The search button.
    SearchButton,
    /// Details action of the card at this View set position.
    DetailsButton(usize),
    /// Body of the card at this View set position.
    Card(usize),
    /// No interactive region.
    Nothing,
}

impl ScreenRegions {
    /// Classify a click at `(column, row)`.
    ///
    /// While the overlay is open it captures every click.
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let point = Position::new(column, row);

        if let Some(overlay) = &self.overlay {
            return if overlay.close_button.contains(point) {
                Hit::OverlayClose
            } else if overlay.content.contains(point) {
                Hit::OverlayContent
            } else {
                Hit::OverlayBackdrop
            };
        }

        if let Some((focus, _)) = self.fields.iter().find(|(_, area)| area.contains(point)) {
            return Hit::Field(*focus);
        }
        if self.search_button.is_some_and(|b| b.contains(point)) {
            return Hit::SearchButton;
        }
        for card in &self.cards {
            if card.details_button.contains(point) {
                return Hit::DetailsButton(card.position);
            }
            if card.area.contains(point) {
                return Hit::Card(card.position);
            }
        }
        Hit::Nothing
    }

    /// Whether `(column, row)` is over the result list.
    pub fn over_results(&self, column: u16, row: u16) -> bool {
        self.results_list
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions_with_overlay() -> ScreenRegions {
        ScreenRegions {
            overlay: Some(OverlayRegion {
                content: Rect::new(10, 5, 40, 20),
                close_button: Rect::new(38, 5, 11, 1),
                max_scroll: 0,
                page: 18,
            }),
            fields: vec![(Focus::Query, Rect::new(0, 0, 30, 3))],
            ..ScreenRegions::default()
        }
    }

    #[test]
    fn overlay_captures_all_clicks() {
        let regions = regions_with_overlay();
        assert_eq!(regions.hit(40, 5), Hit::OverlayClose);
        assert_eq!(regions.hit(20, 10), Hit::OverlayContent);
        // Over the query field, but the overlay is on top.
        assert_eq!(regions.hit(1, 1), Hit::OverlayBackdrop);
    }

    #[test]
    fn details_button_wins_over_card_body() {
        let regions = ScreenRegions {
            cards: vec![CardRegion {
                position: 4,
                area: Rect::new(0, 10, 60, 6),
                details_button: Rect::new(2, 14, 11, 1),
            }],
            ..ScreenRegions::default()
        };
        assert_eq!(regions.hit(5, 14), Hit::DetailsButton(4));
        assert_eq!(regions.hit(30, 12), Hit::Card(4));
        assert_eq!(regions.hit(30, 30), Hit::Nothing);
    }

    #[test]
    fn field_hit_reports_focus() {
        let regions = ScreenRegions {
            fields: vec![
                (Focus::Query, Rect::new(0, 0, 30, 3)),
                (Focus::Location, Rect::new(30, 0, 30, 3)),
            ],
            search_button: Some(Rect::new(60, 1, 10, 1)),
            ..ScreenRegions::default()
        };
        assert_eq!(regions.hit(31, 1), Hit::Field(Focus::Location));
        assert_eq!(regions.hit(62, 1), Hit::SearchButton);
    }
}
