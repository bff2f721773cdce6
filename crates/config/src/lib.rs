//! Configuration management for the volley application.
//!
//! This crate handles loading, validating, and persisting the layout
//! configuration and the user's saved layout preferences.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`layout`]: Ratio bounds, minimum sizes, and overlay sizing
//! - [`preferences`]: Layout state saved between runs
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./volley.json5` or `./volley.json`)
//! 2. User config (`~/.config/volley/config.json5` or `~/.config/volley/config.json`)
//! 3. Built-in defaults
//!
//! Preferences are kept separately in `~/.config/volley/layout.json`.
//!
//! # Examples
//!
//! ```no_run
//! use volley_config::{Config, LayoutPreferences};
//!
//! # async fn example() -> volley_config::Result<()> {
//! let config = Config::load().await?;
//! let prefs = LayoutPreferences::load()?.clamped(&config.layout);
//! println!("Editor split: {:?}", prefs.editor_split);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod persistence;
pub mod preferences;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use layout::{LayoutConfig, OverlayConfig, OverlaySize, RatioBounds};
pub use preferences::LayoutPreferences;
