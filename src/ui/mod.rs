//! Terminal user interface
//!
//! Ratatui front end: an [`App`] owning the run controller, an event
//! receiver it drains once per tick, and the pane renderers. Not part of
//! the stable library API.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
