//! Shared protocol types for the volley application.
//!
//! This crate defines the types shared by the layout engine, the
//! configuration layer and the terminal UI: region identifiers and boxes,
//! terminal and chrome measurements, UI messages, and workspace contents.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`region`]: Region identifiers, region boxes, and orientation
//! - [`frame`]: Terminal frame and chrome measurements
//! - [`message`]: TUI event messages and the enums they carry
//! - [`workspace`]: Entries listed by the panes and pickers
//! - [`dummy`]: A sample workspace for demos and tests
//!
//! # Examples
//!
//! ```
//! use volley_protocol::{Chrome, RegionBox, RegionId, TerminalFrame};
//!
//! let frame = TerminalFrame::new(120, 40);
//! let chrome = Chrome::new(1, 1, 1);
//! assert_eq!(frame.height - chrome.total(), 37);
//!
//! let editor = RegionBox::new(60, 37);
//! assert_eq!(format!("{}: {editor}", RegionId::Editor), "editor: 60x37");
//! ```

pub mod dummy;
pub mod frame;
pub mod message;
pub mod region;
pub mod workspace;

// Re-export primary types at crate root for convenience
pub use frame::{Chrome, TerminalFrame};
pub use message::{FocusDirection, Message, OrientationTarget, SplitTarget};
pub use region::{Orientation, RegionBox, RegionId};
pub use workspace::{RequestSummary, Workspace};
