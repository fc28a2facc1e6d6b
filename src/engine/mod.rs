pub mod display_group;
pub mod flatten;
pub mod grid;
pub mod search;

pub use display_group::DisplayGroup;
pub use flatten::{FlatShortcut, flatten};
pub use grid::{GridLayout, layout};
pub use search::search;
