//! TUI pane rendering modules
//!
//! - [`bars`]: the working array as role-colored vertical bars
//! - [`info`]: algorithm, status, live counters, complexity header
//! - [`status`]: bottom status bar with keybindings

pub mod bars;
pub mod info;
pub mod status;

pub use bars::render_bars_pane;
pub use info::render_info_pane;
pub use status::render_status_bar;
