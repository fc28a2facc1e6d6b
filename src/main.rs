use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{Frame, Terminal};

use shortcuts_tui::app::{App, View};
use shortcuts_tui::config::{self, Config};
use shortcuts_tui::event::{AppEvent, EventHandler};
use shortcuts_tui::logging;
use shortcuts_tui::nav::NavInput;
use shortcuts_tui::ui::components::search_bar::SearchBar;
use shortcuts_tui::ui::components::shortcut_grid::ShortcutGrid;
use shortcuts_tui::ui::components::tab_bar::TabBar;
use shortcuts_tui::ui::layout::AppLayout;

const FOOTER_HINTS: &str =
    "Tab: Next | Shift+Tab: Prev | 1-9: Jump | j/k: Page | /: Search | ESC/q: Quit";

#[derive(Parser)]
#[command(name = "shortcuts-tui", version, about = "Terminal cheatsheet browser with fuzzy search")]
struct Cli {
    #[arg(short, long, help = "Config file to load instead of the default locations")]
    config: Option<PathBuf>,

    #[arg(short = 't', long, help = "Category to open first (case-insensitive name)")]
    category: Option<String>,

    #[arg(long, help = "Directory for log files")]
    log_dir: Option<PathBuf>,

    #[arg(long, help = "Print the built-in catalog as YAML and exit")]
    dump_default: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump_default {
        let yaml = Config::builtin_yaml().unwrap_or_default();
        io::stdout().write_all(yaml.as_bytes())?;
        return Ok(());
    }

    let log_dir = cli.log_dir.clone().unwrap_or_else(config::default_log_dir);
    // Must live for the whole of main so buffered log lines get flushed
    let _log_guard = match logging::init(&log_dir) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!(
                "warning: logging disabled, cannot write to {}: {err:#}",
                log_dir.display()
            );
            None
        }
    };
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting shortcuts-tui");

    let candidates = match cli.config {
        Some(path) => vec![path],
        None => config::candidate_paths(),
    };
    let (config, source) = Config::load(&candidates);
    tracing::info!(%source, categories = config.categories.len(), "config ready");

    let mut app = App::new(config, source);
    if let Some(name) = cli.category.as_deref() {
        if !app.select_category(name) {
            tracing::warn!(category = name, "unknown category, starting on the first tab");
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(250));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "exited with error");
        eprintln!("Error: {err:?}");
    }
    tracing::info!("bye");

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => {
                if let Some(input) = NavInput::from_key(key) {
                    app.handle_input(input);
                }
            }
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let view = app.view(area.width, area.height);
    let theme = app.theme();

    let outer = AppLayout::outer_block()
        .border_style(Style::default().fg(theme.border()))
        .style(Style::default().bg(theme.background()));
    frame.render_widget(outer, area);

    let layout = AppLayout::new(area);

    render_header(frame, app, &view, layout.header);

    let tabs = TabBar::new(&app.config.categories, app.nav.active_tab, theme)
        .dimmed(app.nav.is_filtering());
    frame.render_widget(tabs, layout.tabs);

    let matches = app
        .nav
        .is_filtering()
        .then(|| view.groups.iter().map(|g| g.shortcuts.len()).sum());
    frame.render_widget(
        SearchBar {
            active: app.nav.search_mode,
            query: &app.nav.search_query,
            matches,
            theme,
        },
        layout.search,
    );

    let empty_message = if app.nav.is_filtering() {
        "No shortcuts match"
    } else if app.config.categories.is_empty() {
        "No categories configured"
    } else {
        "This category has no shortcuts"
    };
    let grid = ShortcutGrid::new(view.page_groups(), &view.grid, theme).empty_message(empty_message);
    frame.render_widget(grid, layout.grid);

    let footer = Paragraph::new(Line::from(Span::styled(
        FOOTER_HINTS,
        Style::default().fg(theme.muted()),
    )))
    .block(
        Block::bordered()
            .border_style(Style::default().fg(theme.border()))
            .padding(ratatui::widgets::Padding::horizontal(1)),
    );
    frame.render_widget(footer, layout.footer);
}

fn render_header(frame: &mut Frame, app: &App, view: &View, area: ratatui::layout::Rect) {
    let theme = app.theme();

    let mut spans = vec![
        Span::styled(
            "Shortcuts TUI",
            Style::default()
                .fg(theme.primary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" - Press ESC or q to quit", Style::default().fg(theme.muted())),
    ];
    let total_pages = view.grid.total_pages();
    if total_pages > 1 {
        spans.push(Span::styled(
            format!("  page {}/{total_pages}", view.page + 1),
            Style::default().fg(theme.secondary()),
        ));
    }
    spans.push(Span::styled(
        format!("  [{}]", app.source),
        Style::default().fg(theme.muted()),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
