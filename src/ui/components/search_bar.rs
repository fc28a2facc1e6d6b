use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct SearchBar<'a> {
    pub active: bool,
    pub query: &'a str,
    /// Number of matching shortcuts, shown once a query is typed.
    pub matches: Option<usize>,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.active {
            let mut spans = vec![
                Span::styled("/ ", Style::default().fg(self.theme.primary())),
                Span::styled(self.query, Style::default().fg(self.theme.text())),
                Span::styled(
                    "_",
                    Style::default()
                        .fg(self.theme.primary())
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
            ];
            if let Some(count) = self.matches {
                let noun = if count == 1 { "match" } else { "matches" };
                spans.push(Span::styled(
                    format!("  {count} {noun}"),
                    Style::default().fg(self.theme.muted()),
                ));
            }
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                "Press / to search: ",
                Style::default().fg(self.theme.muted()),
            ))
        };

        Paragraph::new(line).render(area, buf);
    }
}
