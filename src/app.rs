use crate::catalog::Category;
use crate::config::{Config, ConfigSource};
use crate::engine::flatten::flatten;
use crate::engine::grid::{self, GridLayout};
use crate::engine::search::search;
use crate::engine::DisplayGroup;
use crate::nav::{Flow, NavInput, NavState};
use crate::ui::theme::Theme;

/// One frame's worth of derived data. Rebuilt from scratch on every render.
pub struct View {
    pub groups: Vec<DisplayGroup>,
    pub grid: GridLayout,
    /// Already clamped to an existing page.
    pub page: usize,
}

impl View {
    pub fn page_groups(&self) -> &[DisplayGroup] {
        self.grid.page(&self.groups, self.page)
    }
}

pub struct App {
    pub config: Config,
    pub source: ConfigSource,
    pub nav: NavState,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, source: ConfigSource) -> Self {
        Self {
            config,
            source,
            nav: NavState::default(),
            should_quit: false,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub fn category_count(&self) -> usize {
        self.config.categories.len()
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.config.categories.get(self.nav.active_tab)
    }

    /// Start on the named category. Returns false when no category has that name.
    pub fn select_category(&mut self, name: &str) -> bool {
        match self.config.category_index(name) {
            Some(index) => {
                self.nav.jump_to_tab(index, self.category_count());
                true
            }
            None => false,
        }
    }

    pub fn handle_input(&mut self, input: NavInput) {
        if self.nav.apply(input, self.category_count()) == Flow::Quit {
            self.should_quit = true;
        }
    }

    /// Search results while filtering, otherwise the active category's groups.
    pub fn visible_groups(&self) -> Vec<DisplayGroup> {
        if self.nav.is_filtering() {
            let records = flatten(&self.config.categories);
            return search(&self.nav.search_query, &records);
        }
        self.active_category()
            .map(|category| category.groups.iter().map(DisplayGroup::from).collect())
            .unwrap_or_default()
    }

    /// Lay out the visible groups for a `width` x `height` terminal and pull the
    /// current page back into range, persisting the corrected index.
    pub fn view(&mut self, width: u16, height: u16) -> View {
        let groups = self.visible_groups();
        let grid = grid::layout(&groups, width, height);
        let page = self.nav.clamp_page(grid.total_pages());
        View { groups, grid, page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Shortcut, ShortcutGroup};

    fn single_group_config() -> Config {
        Config {
            theme: Theme::default(),
            categories: vec![Category {
                name: "Git".to_string(),
                icon: None,
                color: None,
                groups: vec![ShortcutGroup {
                    name: "Basics".to_string(),
                    shortcuts: vec![
                        Shortcut::new("git status", "Check repository status"),
                        Shortcut::new("git add .", "Stage all changes"),
                        Shortcut::new("git push", "Push to remote"),
                    ],
                }],
            }],
        }
    }

    fn builtin_app() -> App {
        App::new(Config::builtin(), ConfigSource::Builtin)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_input(NavInput::Char(ch));
        }
    }

    #[test]
    fn single_group_on_80x24_is_one_page_one_box() {
        let mut app = App::new(single_group_config(), ConfigSource::Builtin);
        let view = app.view(80, 24);
        assert_eq!(view.grid.total_pages(), 1);
        assert!(view.grid.boxes_per_row >= 1);
        assert_eq!(view.page_groups().len(), 1);
        assert_eq!(view.page_groups()[0].shortcuts.len(), 3);
    }

    #[test]
    fn visible_groups_follow_active_tab() {
        let mut app = builtin_app();
        assert_eq!(app.visible_groups()[0].name, "Basics");
        app.handle_input(NavInput::NextTab);
        assert_eq!(app.active_category().map(|c| c.name.as_str()), Some("Neovim"));
        assert_eq!(app.visible_groups()[0].name, "Navigation");
    }

    #[test]
    fn search_mode_without_query_shows_category() {
        let mut app = builtin_app();
        app.handle_input(NavInput::Char('/'));
        assert_eq!(app.visible_groups()[0].name, "Basics");
    }

    #[test]
    fn search_spans_all_categories() {
        let mut app = builtin_app();
        type_text(&mut app, "/docker ps");
        let groups = app.visible_groups();
        assert!(groups.iter().any(|g| g.name == "Docker/Containers"));
        assert!(groups.iter().all(|g| g.name.contains('/')));
    }

    #[test]
    fn no_matches_render_one_empty_page() {
        let mut app = builtin_app();
        type_text(&mut app, "/qqqqzzzzxxxx");
        let view = app.view(120, 40);
        assert!(view.groups.is_empty());
        assert_eq!(view.grid.total_pages(), 1);
        assert!(view.page_groups().is_empty());
    }

    #[test]
    fn shrinking_terminal_adds_pages_and_clamps() {
        let mut app = builtin_app();
        let tall = app.view(200, 200);
        assert_eq!(tall.grid.total_pages(), 1);

        for _ in 0..20 {
            app.handle_input(NavInput::Char('j'));
        }
        let short = app.view(80, 24);
        assert!(short.grid.total_pages() > 1);
        assert_eq!(short.page, short.grid.total_pages() - 1);
        assert_eq!(app.nav.current_page, short.page);

        let tall_again = app.view(200, 200);
        assert_eq!(tall_again.page, 0);
        assert_eq!(app.nav.current_page, 0);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = builtin_app();
        app.handle_input(NavInput::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_in_search_does_not_quit() {
        let mut app = builtin_app();
        type_text(&mut app, "/git");
        app.handle_input(NavInput::Escape);
        assert!(!app.should_quit);
        app.handle_input(NavInput::Escape);
        assert!(app.should_quit);
    }

    #[test]
    fn select_category_by_name() {
        let mut app = builtin_app();
        assert!(app.select_category("docker"));
        assert_eq!(app.nav.active_tab, 4);
        assert!(!app.select_category("emacs"));
        assert_eq!(app.nav.active_tab, 4);
    }

    #[test]
    fn empty_catalog_renders_single_empty_page() {
        let config = Config {
            theme: Theme::default(),
            categories: Vec::new(),
        };
        let mut app = App::new(config, ConfigSource::Builtin);
        app.handle_input(NavInput::NextTab);
        assert!(app.active_category().is_none());
        let view = app.view(80, 24);
        assert_eq!(view.grid.total_pages(), 1);
        assert!(view.page_groups().is_empty());
    }
}
