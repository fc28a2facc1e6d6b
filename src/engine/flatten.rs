use crate::catalog::Category;

/// One shortcut with the names of the category and group it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatShortcut {
    pub category: String,
    pub group: String,
    pub keys: String,
    pub description: String,
}

impl FlatShortcut {
    /// Text the fuzzy matcher sees: keys and description joined by a space.
    pub fn match_key(&self) -> String {
        format!("{} {}", self.keys, self.description)
    }

    /// Regroup key, `category/group`.
    pub fn group_key(&self) -> String {
        format!("{}/{}", self.category, self.group)
    }
}

/// Walk categories, groups and shortcuts in source order.
pub fn flatten(categories: &[Category]) -> Vec<FlatShortcut> {
    categories
        .iter()
        .flat_map(|category| {
            category.groups.iter().flat_map(move |group| {
                group.shortcuts.iter().map(move |shortcut| FlatShortcut {
                    category: category.name.clone(),
                    group: group.name.clone(),
                    keys: shortcut.keys.clone(),
                    description: shortcut.description.clone(),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Shortcut, ShortcutGroup};
    use crate::config::Config;

    fn group(name: &str, keys: &[&str]) -> ShortcutGroup {
        ShortcutGroup {
            name: name.to_string(),
            shortcuts: keys.iter().map(|k| Shortcut::new(k, "desc")).collect(),
        }
    }

    fn category(name: &str, groups: Vec<ShortcutGroup>) -> Category {
        Category {
            name: name.to_string(),
            icon: None,
            color: None,
            groups,
        }
    }

    #[test]
    fn flatten_preserves_nested_order() {
        let categories = vec![
            category("A", vec![group("g1", &["a1", "a2"]), group("g2", &["a3"])]),
            category("B", vec![group("g1", &["b1"])]),
        ];
        let flat = flatten(&categories);
        let keys: Vec<&str> = flat.iter().map(|r| r.keys.as_str()).collect();
        assert_eq!(keys, vec!["a1", "a2", "a3", "b1"]);
        assert_eq!(flat[2].category, "A");
        assert_eq!(flat[2].group, "g2");
        assert_eq!(flat[3].group_key(), "B/g1");
    }

    #[test]
    fn flatten_skips_nothing_in_builtin_catalog() {
        let config = Config::builtin();
        let flat = flatten(&config.categories);
        let expected: usize = config.categories.iter().map(|c| c.shortcut_count()).sum();
        assert_eq!(flat.len(), expected);
        assert_eq!(flat.first().map(|r| r.keys.as_str()), Some("git status"));
    }

    #[test]
    fn flatten_of_empty_groups_is_empty() {
        let categories = vec![category("A", vec![group("g", &[])]), category("B", vec![])];
        assert!(flatten(&categories).is_empty());
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn match_key_joins_with_space() {
        let record = FlatShortcut {
            category: "Git".to_string(),
            group: "Branches".to_string(),
            keys: "git checkout -b".to_string(),
            description: "Create & switch branch".to_string(),
        };
        assert_eq!(record.match_key(), "git checkout -b Create & switch branch");
        assert_eq!(record.group_key(), "Git/Branches");
    }
}
