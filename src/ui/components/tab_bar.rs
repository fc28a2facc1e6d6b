use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::catalog::Category;
use crate::ui::theme::Theme;

pub struct TabBar<'a> {
    categories: &'a [Category],
    active: usize,
    /// Dim every tab while search results span all categories.
    dimmed: bool,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(categories: &'a [Category], active: usize, theme: &'a Theme) -> Self {
        Self {
            categories,
            active,
            dimmed: false,
            theme,
        }
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

/// Index of the first tab to draw so the active tab ends inside `width` cells.
/// Scrolled bars spend one cell on the `‹` marker.
fn first_visible(labels: &[String], active: usize, width: usize) -> usize {
    const GAP: usize = 1;
    let mut first = 0;
    loop {
        let marker = usize::from(first > 0);
        let used: usize = labels[first..=active]
            .iter()
            .map(|l| l.chars().count() + GAP)
            .sum::<usize>()
            + marker;
        if used <= width || first == active {
            return first;
        }
        first += 1;
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.categories.is_empty() || area.height == 0 {
            return;
        }

        let labels: Vec<String> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| c.tab_label(i))
            .collect();
        let active = self.active.min(labels.len() - 1);
        let first = first_visible(&labels, active, area.width as usize);

        let mut spans: Vec<Span> = Vec::new();
        if first > 0 {
            spans.push(Span::styled("\u{2039}", Style::default().fg(self.theme.muted()))); // ‹
        }
        for (i, label) in labels.into_iter().enumerate().skip(first) {
            let style = if i == active && !self.dimmed {
                let fg = self.categories[i]
                    .color
                    .as_deref()
                    .map(Theme::parse_color)
                    .unwrap_or_else(|| self.theme.primary());
                Style::default()
                    .fg(fg)
                    .bg(self.theme.highlight())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted())
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn all_tabs_fit() {
        let l = labels(&["aaaa", "bbbb", "cccc"]);
        assert_eq!(first_visible(&l, 2, 80), 0);
    }

    #[test]
    fn scrolls_until_active_tab_fits() {
        // Each tab takes 5 cells with its gap, plus 1 for the marker once scrolled.
        let l = labels(&["aaaa", "bbbb", "cccc", "dddd"]);
        assert_eq!(first_visible(&l, 3, 11), 2);
        assert_eq!(first_visible(&l, 3, 10), 3);
        assert_eq!(first_visible(&l, 1, 10), 0);
    }

    #[test]
    fn scrolled_bar_keeps_active_label_whole() {
        let categories: Vec<Category> = ["Git", "Tmux", "Docker"]
            .iter()
            .map(|name| Category {
                name: name.to_string(),
                icon: None,
                color: None,
                groups: Vec::new(),
            })
            .collect();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(&categories, 2, &theme).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert_eq!(row.trim_end(), "\u{2039} 3:Docker");
    }

    #[test]
    fn active_tab_wider_than_bar_is_first() {
        let l = labels(&["aa", "a very long category name"]);
        assert_eq!(first_visible(&l, 1, 5), 1);
    }

    #[test]
    fn renders_labels_into_buffer() {
        let categories = vec![
            Category {
                name: "Git".to_string(),
                icon: None,
                color: None,
                groups: Vec::new(),
            },
            Category {
                name: "Tmux".to_string(),
                icon: None,
                color: Some("#9ece6a".to_string()),
                groups: Vec::new(),
            },
        ];
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(&categories, 1, &theme).render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.starts_with(" 1:Git   2:Tmux "));
        assert_eq!(buf[(8, 0)].fg, Theme::parse_color("#9ece6a"));
    }
}
