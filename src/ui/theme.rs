use std::ops::Range;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub muted: String,
    pub border: String,
    pub highlight: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#7aa2f7".to_string(),
            secondary: "#9ece6a".to_string(),
            background: "#1a1b26".to_string(),
            text: "#c0caf5".to_string(),
            muted: "#565f89".to_string(),
            border: "#3b4261".to_string(),
            highlight: "#33467c".to_string(),
        }
    }
}

/// Partial theme as written in a user config file. Every slot is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub border: Option<String>,
    pub highlight: Option<String>,
}

impl ThemeOverrides {
    /// Build a complete theme: each slot comes from the override when set, else from `base`.
    pub fn resolve(&self, base: &Theme) -> Theme {
        let pick = |slot: &Option<String>, fallback: &String| {
            slot.clone().unwrap_or_else(|| fallback.clone())
        };
        Theme {
            primary: pick(&self.primary, &base.primary),
            secondary: pick(&self.secondary, &base.secondary),
            background: pick(&self.background, &base.background),
            text: pick(&self.text, &base.text),
            muted: pick(&self.muted, &base.muted),
            border: pick(&self.border, &base.border),
            highlight: pick(&self.highlight, &base.highlight),
        }
    }
}

impl Theme {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }
        let channel = |range: Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
            _ => Color::White,
        }
    }

    pub fn primary(&self) -> Color { Self::parse_color(&self.primary) }
    pub fn secondary(&self) -> Color { Self::parse_color(&self.secondary) }
    pub fn background(&self) -> Color { Self::parse_color(&self.background) }
    pub fn text(&self) -> Color { Self::parse_color(&self.text) }
    pub fn muted(&self) -> Color { Self::parse_color(&self.muted) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn highlight(&self) -> Color { Self::parse_color(&self.highlight) }
}
