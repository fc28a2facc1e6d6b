pub mod search_bar;
pub mod shortcut_box;
pub mod shortcut_grid;
pub mod tab_bar;
