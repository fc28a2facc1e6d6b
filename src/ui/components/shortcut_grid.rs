use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::engine::DisplayGroup;
use crate::engine::grid::{BOX_GAP, GridLayout};
use crate::ui::components::shortcut_box::ShortcutBox;
use crate::ui::theme::Theme;

/// One page of shortcut boxes, placed row by row as the grid engine packed them.
pub struct ShortcutGrid<'a> {
    page: &'a [DisplayGroup],
    grid: &'a GridLayout,
    empty_message: &'a str,
    theme: &'a Theme,
}

impl<'a> ShortcutGrid<'a> {
    pub fn new(page: &'a [DisplayGroup], grid: &'a GridLayout, theme: &'a Theme) -> Self {
        Self {
            page,
            grid,
            empty_message: "",
            theme,
        }
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }
}

fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl Widget for ShortcutGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.page.is_empty() {
            Paragraph::new(Line::from(self.empty_message))
                .style(Style::default().fg(self.theme.muted()))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let box_width = cells(self.grid.box_width);
        let stride = cells(self.grid.box_width + BOX_GAP);
        let mut y = area.y;

        for row in self.grid.rows(self.page) {
            if y >= area.bottom() {
                break;
            }
            let mut row_height = 0;
            for (col, group) in row.iter().enumerate() {
                let height = cells(group.box_height());
                row_height = row_height.max(height);
                let x = area.x.saturating_add(stride.saturating_mul(cells(col)));
                let rect = Rect::new(x, y, box_width, height).intersection(area);
                if rect.is_empty() {
                    continue;
                }
                ShortcutBox::new(group, self.theme).render(rect, buf);
            }
            y = y.saturating_add(row_height).saturating_add(cells(BOX_GAP));
        }
    }
}
