use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub keys: String,
    pub description: String,
}

impl Shortcut {
    pub fn new(keys: &str, description: &str) -> Self {
        Self {
            keys: keys.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutGroup {
    pub name: String,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub groups: Vec<ShortcutGroup>,
}

impl Category {
    /// Tab label as shown in the tab bar, e.g. `1: Git` or `1:  Git` with an icon.
    pub fn tab_label(&self, index: usize) -> String {
        match self.icon.as_deref().filter(|icon| !icon.is_empty()) {
            Some(icon) => format!(" {}:{icon} {} ", index + 1, self.name),
            None => format!(" {}:{} ", index + 1, self.name),
        }
    }

    pub fn shortcut_count(&self) -> usize {
        self.groups.iter().map(|g| g.shortcuts.len()).sum()
    }
}
