//! Screen regions.
//!
//! Rendering and mouse handling both derive their rectangles from here, so a
//! click is always tested against exactly what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Rows of suggestions shown at once; longer lists scroll with the highlight.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

pub struct AppLayout {
    pub title: Rect,
    pub search: Rect,
    pub results: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(3), // Search box
                Constraint::Min(5),    // Results
                Constraint::Length(2), // Status bar
            ])
            .split(area);

        Self {
            title: chunks[0],
            search: chunks[1],
            results: chunks[2],
            status: chunks[3],
        }
    }

    /// Dropdown directly under the search box, sized for `count` rows plus
    /// borders and clipped to the results area.
    pub fn suggestions(&self, count: usize) -> Rect {
        let rows = count.min(MAX_VISIBLE_SUGGESTIONS) as u16;
        let height = (rows + 2).min(self.results.height);
        Rect::new(self.search.x, self.results.y, self.search.width, height)
    }
}

/// First suggestion row drawn, keeping the highlight in view.
pub fn suggestion_offset(highlight: Option<usize>, count: usize) -> usize {
    let visible = count.min(MAX_VISIBLE_SUGGESTIONS);
    match highlight {
        Some(i) if visible > 0 && i >= visible => i + 1 - visible,
        _ => 0,
    }
}

/// Suggestion index under a terminal cell, if any.
pub fn suggestion_at(area: Rect, offset: usize, count: usize, column: u16, row: u16) -> Option<usize> {
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    // Skip the top and bottom borders
    let inner_top = area.y + 1;
    let inner_bottom = area.y + area.height.saturating_sub(1);
    if row < inner_top || row >= inner_bottom {
        return None;
    }
    let index = offset + (row - inner_top) as usize;
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> AppLayout {
        AppLayout::new(Rect::new(0, 0, 80, 30))
    }

    #[test]
    fn test_regions_stack_vertically() {
        let l = layout();
        assert_eq!(l.title.y, 0);
        assert_eq!(l.search.y, 3);
        assert_eq!(l.results.y, 6);
        assert_eq!(l.status.y, 28);
    }

    #[test]
    fn test_suggestions_area_is_capped() {
        let l = layout();
        assert_eq!(l.suggestions(3).height, 5);
        assert_eq!(
            l.suggestions(100).height,
            MAX_VISIBLE_SUGGESTIONS as u16 + 2
        );
    }

    #[test]
    fn test_suggestion_offset_follows_highlight() {
        assert_eq!(suggestion_offset(None, 20), 0);
        assert_eq!(suggestion_offset(Some(3), 20), 0);
        assert_eq!(suggestion_offset(Some(MAX_VISIBLE_SUGGESTIONS), 20), 1);
        assert_eq!(suggestion_offset(Some(19), 20), 20 - MAX_VISIBLE_SUGGESTIONS);
    }

    #[test]
    fn test_suggestion_at_maps_rows() {
        let area = layout().suggestions(3);
        // Row just below the top border is the first suggestion
        assert_eq!(suggestion_at(area, 0, 3, 5, area.y + 1), Some(0));
        assert_eq!(suggestion_at(area, 0, 3, 5, area.y + 3), Some(2));
        assert_eq!(suggestion_at(area, 2, 5, 5, area.y + 1), Some(2));
        // Borders and outside cells
        assert_eq!(suggestion_at(area, 0, 3, 5, area.y), None);
        assert_eq!(suggestion_at(area, 0, 3, 5, area.y + 4), None);
        assert_eq!(suggestion_at(area, 0, 3, 5, 0), None);
    }
}
