//! Layout bounds and minimum sizes.
//!
//! This module provides [`LayoutConfig`], the tunable constants the layout
//! engine works from: the bounds of every split ratio, minimum pane sizes,
//! border and separator cells, the adjustment step, and overlay sizing.
//!
//! All minimum widths are outer columns. Minimum pane heights are content
//! rows; the engine adds [`LayoutConfig::pane_border`] rows per pane.

use serde::{Deserialize, Serialize};
use volley_protocol::{Chrome, RegionId, SplitTarget};

use crate::error::{ConfigError, Result};

/// Largest accepted adjustment step.
pub const MAX_ADJUST_STEP: f64 = 0.5;

/// Default, minimum and maximum of one split ratio.
///
/// # Examples
///
/// ```
/// use volley_config::RatioBounds;
///
/// let bounds = RatioBounds::new(0.5, 0.2, 0.8);
/// assert_eq!(bounds.clamp(0.95), 0.8);
/// assert_eq!(bounds.clamp(f64::NAN), 0.2);
/// assert!(bounds.contains(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioBounds {
    /// Ratio used on first layout.
    pub default: f64,
    /// Smallest allowed ratio.
    pub min: f64,
    /// Largest allowed ratio.
    pub max: f64,
}

impl RatioBounds {
    /// Creates ratio bounds.
    #[must_use]
    pub const fn new(default: f64, min: f64, max: f64) -> Self {
        Self { default, min, max }
    }

    /// Clamps a ratio into these bounds.
    ///
    /// Non-finite values collapse to `min`, and so does everything when the
    /// bounds are degenerate (`min > max`).
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() || self.min > self.max || value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks `0 < min <= default <= max < 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRatio`] naming the offending setting.
    pub fn validate(&self, name: &'static str) -> Result<()> {
        let finite = self.default.is_finite() && self.min.is_finite() && self.max.is_finite();
        if !finite {
            return Err(ConfigError::InvalidRatio {
                name,
                reason: "bounds must be finite".to_string(),
            });
        }
        if self.min <= 0.0 || self.max >= 1.0 {
            return Err(ConfigError::InvalidRatio {
                name,
                reason: format!(
                    "bounds [{}, {}] must lie strictly between 0 and 1",
                    self.min, self.max
                ),
            });
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRatio {
                name,
                reason: format!("min {} is greater than max {}", self.min, self.max),
            });
        }
        if !self.contains(self.default) {
            return Err(ConfigError::InvalidRatio {
                name,
                reason: format!(
                    "default {} is outside [{}, {}]",
                    self.default, self.min, self.max
                ),
            });
        }
        Ok(())
    }
}

/// Size of one overlay relative to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlaySize {
    /// Share of the terminal width.
    pub width_ratio: f64,
    /// Share of the body height.
    pub height_ratio: f64,
    /// Minimum width in columns, capped by the terminal width.
    pub min_width: u16,
    /// Minimum height in rows, capped by the body height.
    pub min_height: u16,
}

impl OverlaySize {
    /// Creates an overlay size.
    #[must_use]
    pub const fn new(width_ratio: f64, height_ratio: f64, min_width: u16, min_height: u16) -> Self {
        Self {
            width_ratio,
            height_ratio,
            min_width,
            min_height,
        }
    }

    fn validate(&self, name: &'static str) -> Result<()> {
        for ratio in [self.width_ratio, self.height_ratio] {
            if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
                return Err(ConfigError::InvalidRatio {
                    name,
                    reason: format!("overlay ratio {ratio} must lie in (0, 1]"),
                });
            }
        }
        if self.min_width == 0 || self.min_height == 0 {
            return Err(ConfigError::InvalidMinimum {
                name,
                reason: "overlay minimums must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Sizing of the three overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Request history list.
    pub history: OverlaySize,
    /// Environment picker.
    pub environment_picker: OverlaySize,
    /// Theme picker.
    pub theme_picker: OverlaySize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            history: OverlaySize::new(0.70, 0.70, 40, 10),
            environment_picker: OverlaySize::new(0.50, 0.50, 30, 8),
            theme_picker: OverlaySize::new(0.40, 0.60, 28, 8),
        }
    }
}

impl OverlayConfig {
    /// Returns the sizing of an overlay region, or `None` for panes.
    #[must_use]
    pub fn get(&self, region: RegionId) -> Option<&OverlaySize> {
        match region {
            RegionId::History => Some(&self.history),
            RegionId::EnvironmentPicker => Some(&self.environment_picker),
            RegionId::ThemePicker => Some(&self.theme_picker),
            _ => None,
        }
    }
}

/// Tunable constants of the layout engine.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides:
///
/// ```json5
/// {
///   layout: {
///     sidebar_width: { default: 0.25, min: 0.15, max: 0.40 },
///     min_editor_width: 30,
///   }
/// }
/// ```
///
/// # Examples
///
/// ```
/// use volley_config::LayoutConfig;
/// use volley_protocol::SplitTarget;
///
/// let config = LayoutConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.bounds(SplitTarget::SidebarWidth).default, 0.20);
/// assert_eq!(config.min_layout_width(), 67);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Share of the terminal width given to the sidebar.
    pub sidebar_width: RatioBounds,
    /// Share of the sidebar content rows given to the file browser.
    pub sidebar_split: RatioBounds,
    /// Share of the request/workflow budget given to the request list.
    pub workflow_split: RatioBounds,
    /// Share of the main area given to the editor.
    pub editor_split: RatioBounds,
    /// Share of the response area given to the primary response pane.
    pub response_split: RatioBounds,

    /// Minimum sidebar width in columns.
    pub min_sidebar_width: u16,
    /// Minimum editor width in columns.
    pub min_editor_width: u16,
    /// Minimum response width in columns.
    pub min_response_width: u16,

    /// Minimum file browser content rows.
    pub min_files_height: u16,
    /// Minimum request list content rows.
    pub min_requests_height: u16,
    /// Minimum workflow list content rows.
    pub min_workflow_height: u16,
    /// Minimum editor content rows when stacked.
    pub min_editor_height: u16,
    /// Minimum response content rows when stacked.
    pub min_response_height: u16,

    /// Minimum width of each compare pane when side by side.
    pub min_response_split_width: u16,
    /// Minimum height of each compare pane when stacked.
    pub min_response_split_height: u16,

    /// Rows (or columns) taken by a pane's border, both sides together.
    pub pane_border: u16,
    /// Separator columns between editor and response when side by side.
    pub main_gap: u16,
    /// Separator cells between the two compare panes.
    pub response_separator: u16,
    /// Body height used when the chrome leaves less than this.
    pub min_body_height: u16,
    /// Ratio change applied by one adjustment command.
    pub adjust_step: f64,

    /// Overlay sizing.
    pub overlays: OverlayConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let even = RatioBounds::new(0.50, 0.20, 0.80);
        Self {
            sidebar_width: RatioBounds::new(0.20, 0.12, 0.45),
            sidebar_split: even,
            workflow_split: even,
            editor_split: even,
            response_split: even,
            min_sidebar_width: 18,
            min_editor_width: 24,
            min_response_width: 24,
            min_files_height: 2,
            min_requests_height: 2,
            min_workflow_height: 2,
            min_editor_height: 3,
            min_response_height: 3,
            min_response_split_width: 10,
            min_response_split_height: 3,
            pane_border: 2,
            main_gap: 1,
            response_separator: 1,
            min_body_height: 4,
            adjust_step: 0.05,
            overlays: OverlayConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Returns the bounds of the ratio named by `target`.
    #[must_use]
    pub fn bounds(&self, target: SplitTarget) -> &RatioBounds {
        match target {
            SplitTarget::SidebarWidth => &self.sidebar_width,
            SplitTarget::SidebarSplit => &self.sidebar_split,
            SplitTarget::WorkflowSplit => &self.workflow_split,
            SplitTarget::EditorSplit => &self.editor_split,
            SplitTarget::ResponseSplit => &self.response_split,
        }
    }

    /// Smallest terminal width at which every width minimum fits.
    #[must_use]
    pub fn min_layout_width(&self) -> u16 {
        self.min_sidebar_width
            .saturating_add(self.min_editor_width)
            .saturating_add(self.min_response_width)
            .saturating_add(self.main_gap)
    }

    /// Smallest body height at which every height minimum fits.
    ///
    /// This is the larger of the full sidebar stack (three bordered panes)
    /// and the stacked editor/response pair.
    #[must_use]
    pub fn min_body_rows(&self) -> u16 {
        let sidebar = self
            .pane_border
            .saturating_mul(3)
            .saturating_add(self.min_files_height)
            .saturating_add(self.min_requests_height)
            .saturating_add(self.min_workflow_height);
        let stacked = self
            .pane_border
            .saturating_mul(2)
            .saturating_add(self.min_editor_height)
            .saturating_add(self.min_response_height);
        self.min_body_height.max(sidebar).max(stacked)
    }

    /// Smallest terminal height at which every height minimum fits, given
    /// the chrome drawn around the body.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_config::LayoutConfig;
    /// use volley_protocol::Chrome;
    ///
    /// let config = LayoutConfig::default();
    /// assert_eq!(config.min_layout_height(Chrome::new(1, 1, 1)), 15);
    /// ```
    #[must_use]
    pub fn min_layout_height(&self, chrome: Chrome) -> u16 {
        chrome.total().saturating_add(self.min_body_rows())
    }

    /// Validates every bound and minimum.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.sidebar_width.validate("sidebar_width")?;
        self.sidebar_split.validate("sidebar_split")?;
        self.workflow_split.validate("workflow_split")?;
        self.editor_split.validate("editor_split")?;
        self.response_split.validate("response_split")?;

        let positive = [
            ("min_sidebar_width", self.min_sidebar_width),
            ("min_editor_width", self.min_editor_width),
            ("min_response_width", self.min_response_width),
            ("min_response_split_width", self.min_response_split_width),
            ("min_response_split_height", self.min_response_split_height),
            ("min_body_height", self.min_body_height),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidMinimum {
                    name,
                    reason: "must be at least 1".to_string(),
                });
            }
        }

        if !self.adjust_step.is_finite()
            || self.adjust_step <= 0.0
            || self.adjust_step > MAX_ADJUST_STEP
        {
            return Err(ConfigError::InvalidStep {
                reason: format!(
                    "step {} must lie in (0, {MAX_ADJUST_STEP}]",
                    self.adjust_step
                ),
            });
        }

        self.overlays.history.validate("overlays.history")?;
        self.overlays
            .environment_picker
            .validate("overlays.environment_picker")?;
        self.overlays.theme_picker.validate("overlays.theme_picker")?;
        Ok(())
    }
}
