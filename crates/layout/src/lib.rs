//! Adaptive multi-pane layout engine for the volley workbench.
//!
//! Given a terminal size, the chrome drawn around the body, and the user's
//! layout state, the engine computes a [`RegionBox`](volley_protocol::RegionBox)
//! for every visible region. It is deterministic and free of I/O: the same
//! inputs always give the same boxes.
//!
//! # Overview
//!
//! - [`geometry`]: Clamping and the two-way span split every splitter uses
//! - [`sidebar`]: Files / requests / workflows heights
//! - [`main_split`]: Editor / response division
//! - [`response_split`]: Compare view panes
//! - [`focus`]: Focus order, emphasis, and collapse fallback
//! - [`state`]: Immutable layout state and collapse flags
//! - [`boxes`]: The derived boxes
//! - [`engine`]: The pure [`recompute`] pass and the owning [`LayoutEngine`]
//!
//! # Examples
//!
//! ```
//! use volley_config::LayoutConfig;
//! use volley_layout::LayoutEngine;
//! use volley_protocol::{Chrome, FocusDirection, RegionId, TerminalFrame};
//!
//! let mut engine = LayoutEngine::new(LayoutConfig::default());
//! engine.set_chrome(Chrome::new(1, 1, 1));
//! engine.resize(TerminalFrame::new(120, 60));
//!
//! assert_eq!(engine.cycle_focus(FocusDirection::Forward), RegionId::Response);
//! assert!(engine.toggle_collapsed(RegionId::Response));
//! assert_eq!(engine.state().focus(), RegionId::Requests);
//! ```

pub mod boxes;
pub mod engine;
pub mod focus;
pub mod geometry;
pub mod main_split;
pub mod response_split;
pub mod sidebar;
pub mod state;

// Re-export primary types at crate root for convenience
pub use boxes::LayoutBoxes;
pub use engine::{AdjustOutcome, LayoutEngine, Recomputed, recompute};
pub use focus::{Emphasis, FocusController};
pub use geometry::Degrade;
pub use state::{CollapseState, LayoutState};
