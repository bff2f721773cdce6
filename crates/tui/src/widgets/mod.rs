//! Widget components for the volley TUI.
//!
//! Widgets are drawn straight into a [`Buffer`](ratatui::buffer::Buffer).
//! None of them decide geometry: panes and overlays receive the size the
//! layout engine computed and only fill it.
//!
//! - [`pane`]: Bordered panes for the sidebar lists, editor, and responses
//! - [`overlay`]: History, environment, and theme pickers
//! - [`status_bar`]: Status line and key hints
//! - [`help`]: Key binding overlay

pub mod help;
pub mod overlay;
pub mod pane;
pub mod status_bar;

pub use help::render_help_overlay;
pub use overlay::render_overlay;
pub use pane::{PaneWidget, Panes};
pub use status_bar::{render_command_bar, render_status_bar};
