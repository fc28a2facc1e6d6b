use crate::catalog::{Shortcut, ShortcutGroup};

/// Title line plus top and bottom border.
const BOX_CHROME_ROWS: usize = 3;

/// A titled list of shortcuts, the unit the grid paginates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayGroup {
    pub name: String,
    pub shortcuts: Vec<Shortcut>,
}

impl DisplayGroup {
    pub fn new(name: impl Into<String>, shortcuts: Vec<Shortcut>) -> Self {
        Self {
            name: name.into(),
            shortcuts,
        }
    }

    /// Rendered height of this group's box. Every shortcut is assumed to take one row.
    pub fn box_height(&self) -> usize {
        self.shortcuts.len() + BOX_CHROME_ROWS
    }
}

impl From<&ShortcutGroup> for DisplayGroup {
    fn from(group: &ShortcutGroup) -> Self {
        Self {
            name: group.name.clone(),
            shortcuts: group.shortcuts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_height_counts_chrome() {
        assert_eq!(DisplayGroup::new("Empty", Vec::new()).box_height(), 3);
        let group = DisplayGroup::new(
            "Two",
            vec![Shortcut::new("a", "first"), Shortcut::new("b", "second")],
        );
        assert_eq!(group.box_height(), 5);
    }

    #[test]
    fn from_shortcut_group_keeps_name_and_order() {
        let group = ShortcutGroup {
            name: "Stash".to_string(),
            shortcuts: vec![
                Shortcut::new("git stash", "Stash changes"),
                Shortcut::new("git stash pop", "Apply & remove stash"),
            ],
        };
        let display = DisplayGroup::from(&group);
        assert_eq!(display.name, "Stash");
        assert_eq!(display.shortcuts, group.shortcuts);
    }
}
