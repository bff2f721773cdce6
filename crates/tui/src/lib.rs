//! Terminal UI for the volley workbench.
//!
//! This crate draws the panes whose sizes the
//! [`volley_layout::LayoutEngine`] computes, and turns key presses into
//! engine commands.
//!
//! # Overview
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: UI state that is not geometry (help, overlay cursor, notices)
//! - [`layout`]: Chrome bars and placement of the engine's boxes on screen
//! - [`widgets`]: Panes, pickers, bars, and help
//! - [`event`]: Event handling and key mappings
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//!
//! # Example
//!
//! ```no_run
//! use volley_config::Config;
//! use volley_protocol::dummy::dummy_workspace;
//! use volley_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Config::default(), dummy_workspace());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Notice};
