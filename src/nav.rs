use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Logical input, already stripped of modifier combinations the browser ignores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavInput {
    Escape,
    /// Ctrl+C, quits from any mode.
    Interrupt,
    NextTab,
    PrevTab,
    Up,
    Down,
    Backspace,
    Char(char),
}

impl NavInput {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        // Only process Press events; Release/Repeat arrive with keyboard enhancement
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let meta = key
            .modifiers
            .intersects(KeyModifiers::ALT | KeyModifiers::META | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char('c') if ctrl => Some(NavInput::Interrupt),
            KeyCode::Esc => Some(NavInput::Escape),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(NavInput::PrevTab),
            KeyCode::Tab => Some(NavInput::NextTab),
            KeyCode::BackTab => Some(NavInput::PrevTab),
            KeyCode::Up => Some(NavInput::Up),
            KeyCode::Down => Some(NavInput::Down),
            KeyCode::Backspace | KeyCode::Delete => Some(NavInput::Backspace),
            KeyCode::Char(_) if ctrl || meta => None,
            KeyCode::Char(ch) if !ch.is_control() => Some(NavInput::Char(ch)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the browser remembers between frames.
///
/// `current_page` may point past the last page after paging forward or after the
/// visible groups shrink; [`NavState::clamp_page`] corrects it on every render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active_tab: usize,
    pub search_mode: bool,
    pub search_query: String,
    pub current_page: usize,
}

impl NavState {
    /// Search results replace the active category only once something is typed.
    pub fn is_filtering(&self) -> bool {
        self.search_mode && !self.search_query.is_empty()
    }

    pub fn apply(&mut self, input: NavInput, category_count: usize) -> Flow {
        if input == NavInput::Interrupt {
            return Flow::Quit;
        }
        if self.search_mode {
            self.apply_search(input);
            Flow::Continue
        } else {
            self.apply_browse(input, category_count)
        }
    }

    fn apply_search(&mut self, input: NavInput) {
        match input {
            NavInput::Escape => {
                self.search_mode = false;
                self.search_query.clear();
                tracing::debug!("search closed");
            }
            NavInput::Backspace => {
                self.search_query.pop();
            }
            NavInput::Char(ch) => self.search_query.push(ch),
            NavInput::Down => self.next_page(),
            NavInput::Up => self.prev_page(),
            _ => {}
        }
    }

    fn apply_browse(&mut self, input: NavInput, category_count: usize) -> Flow {
        match input {
            NavInput::Escape | NavInput::Char('q') => return Flow::Quit,
            NavInput::Char('/') => {
                self.search_mode = true;
                tracing::debug!("search opened");
            }
            NavInput::NextTab => self.next_tab(category_count),
            NavInput::PrevTab => self.prev_tab(category_count),
            NavInput::Down | NavInput::Char('j') => self.next_page(),
            NavInput::Up | NavInput::Char('k') => self.prev_page(),
            NavInput::Char(ch @ '1'..='9') => {
                let index = ch as usize - '1' as usize;
                self.jump_to_tab(index, category_count);
            }
            _ => {}
        }
        Flow::Continue
    }

    pub fn next_tab(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.select_tab((self.active_tab + 1) % category_count);
    }

    pub fn prev_tab(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.select_tab((self.active_tab + category_count - 1) % category_count);
    }

    /// Select tab `index` if it exists; out-of-range indices are ignored.
    pub fn jump_to_tab(&mut self, index: usize, category_count: usize) {
        if index < category_count {
            self.select_tab(index);
        }
    }

    fn select_tab(&mut self, index: usize) {
        self.active_tab = index;
        self.current_page = 0;
        tracing::debug!(tab = index, "tab selected");
    }

    /// Tentative; the next render clamps against the real page count.
    pub fn next_page(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    /// Pull `current_page` back into `[0, total_pages - 1]` and return it.
    pub fn clamp_page(&mut self, total_pages: usize) -> usize {
        let last = total_pages.saturating_sub(1);
        if self.current_page > last {
            self.current_page = last;
        }
        self.current_page
    }
}
