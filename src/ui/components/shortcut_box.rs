use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use crate::engine::DisplayGroup;
use crate::ui::layout::fit_text;
use crate::ui::theme::Theme;

const MAX_KEY_COLUMN: usize = 20;
const KEY_GAP: usize = 2;

/// A bordered box: group title on the first line, then one `keys  description`
/// row per shortcut.
pub struct ShortcutBox<'a> {
    group: &'a DisplayGroup,
    theme: &'a Theme,
}

impl<'a> ShortcutBox<'a> {
    pub fn new(group: &'a DisplayGroup, theme: &'a Theme) -> Self {
        Self { group, theme }
    }
}

/// Width of the keys column: the longest key, capped so descriptions keep at
/// least half of the row.
fn key_column_width(group: &DisplayGroup, interior: usize) -> usize {
    let longest = group
        .shortcuts
        .iter()
        .map(|s| s.keys.chars().count())
        .max()
        .unwrap_or(0);
    longest.min(MAX_KEY_COLUMN).min(interior / 2)
}

impl Widget for ShortcutBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(self.theme.border()))
            .style(Style::default().bg(self.theme.background()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let interior = inner.width as usize;
        let key_width = key_column_width(self.group, interior);
        let desc_width = interior.saturating_sub(key_width + KEY_GAP);

        let mut lines = Vec::with_capacity(self.group.shortcuts.len() + 1);
        lines.push(Line::from(Span::styled(
            fit_text(&self.group.name, interior),
            Style::default()
                .fg(self.theme.secondary())
                .add_modifier(Modifier::BOLD),
        )));
        for shortcut in &self.group.shortcuts {
            lines.push(Line::from(vec![
                Span::styled(
                    fit_text(&shortcut.keys, key_width),
                    Style::default()
                        .fg(self.theme.primary())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(KEY_GAP)),
                Span::styled(
                    fit_text(&shortcut.description, desc_width),
                    Style::default().fg(self.theme.text()),
                ),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Shortcut;

    fn stash() -> DisplayGroup {
        DisplayGroup::new(
            "Stash",
            vec![
                Shortcut::new("git stash", "Stash changes"),
                Shortcut::new("git stash pop", "Apply & remove stash"),
            ],
        )
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn key_column_fits_longest_key() {
        assert_eq!(key_column_width(&stash(), 46), 13);
    }

    #[test]
    fn key_column_is_capped() {
        let group = DisplayGroup::new(
            "Long",
            vec![Shortcut::new("a key combination far too long to show", "x")],
        );
        assert_eq!(key_column_width(&group, 46), MAX_KEY_COLUMN);
        assert_eq!(key_column_width(&group, 16), 8);
    }

    #[test]
    fn renders_title_and_rows_inside_border() {
        let theme = Theme::default();
        let group = stash();
        let area = Rect::new(0, 0, 40, group.box_height() as u16);
        let mut buf = Buffer::empty(area);
        ShortcutBox::new(&group, &theme).render(area, &mut buf);

        assert!(row(&buf, 0).starts_with('┌'));
        assert_eq!(row(&buf, 1).trim_end_matches(['│', ' ']), "│ Stash");
        assert!(row(&buf, 2).starts_with("│ git stash      Stash changes"));
        assert!(row(&buf, 3).starts_with("│ git stash pop  Apply & remove stash"));
        assert!(row(&buf, 4).starts_with('└'));
    }

    #[test]
    fn long_descriptions_are_cut() {
        let theme = Theme::default();
        let group = DisplayGroup::new(
            "G",
            vec![Shortcut::new("k", "a description that cannot possibly fit")],
        );
        let area = Rect::new(0, 0, 16, 4);
        let mut buf = Buffer::empty(area);
        ShortcutBox::new(&group, &theme).render(area, &mut buf);
        // Interior is 12: 1 key cell, 2 gap cells, 9 description cells.
        assert_eq!(row(&buf, 2), "│ k  a descri\u{2026} │");
    }
}
