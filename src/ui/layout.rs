use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Padding};

use crate::engine::grid::{
    FOOTER_ROWS, HEADER_ROWS, OUTER_PADDING, SEARCH_BAR_ROWS, TAB_BAR_ROWS,
};

/// Screen regions. The rows here are exactly the chrome the grid engine subtracts,
/// so `grid.height` equals the height pages are packed against.
pub struct AppLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub search: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn outer_block<'a>() -> Block<'a> {
        Block::bordered().padding(Padding::horizontal(OUTER_PADDING))
    }

    pub fn new(area: Rect) -> Self {
        let inner = Self::outer_block().inner(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS),
                Constraint::Length(TAB_BAR_ROWS),
                Constraint::Length(SEARCH_BAR_ROWS),
                Constraint::Min(0),
                Constraint::Length(FOOTER_ROWS),
            ])
            .split(inner);

        Self {
            header: vertical[0],
            tabs: vertical[1],
            search: vertical[2],
            grid: vertical[3],
            footer: vertical[4],
        }
    }
}

/// Pad or cut `text` to exactly `width` characters, marking cuts with an ellipsis.
pub fn fit_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:<width$}");
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('\u{2026}'); // …
    out
}
