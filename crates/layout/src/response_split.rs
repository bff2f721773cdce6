//! Primary/secondary division of the response area for the compare view.

use tracing::trace;
use volley_config::LayoutConfig;
use volley_protocol::{Orientation, RegionBox};

use crate::geometry::{Degrade, settle_ratio, split_span};

/// Compare panes plus the settled response ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseSplit {
    /// Primary response pane.
    pub primary: RegionBox,
    /// Secondary response pane.
    pub secondary: RegionBox,
    /// Primary share, settled against the realized split.
    pub response_split: f64,
}

impl ResponseSplit {
    /// The split used while the compare view is off: both panes cover the
    /// whole response box.
    #[must_use]
    pub const fn mirrored(response: RegionBox, ratio: f64) -> Self {
        Self {
            primary: response,
            secondary: response,
            response_split: ratio,
        }
    }
}

/// Divides the response box into the two compare panes.
///
/// One separator cell sits between the panes. Side by side, each pane keeps
/// [`LayoutConfig::min_response_split_width`] columns and degrades
/// proportionally; stacked, each keeps
/// [`LayoutConfig::min_response_split_height`] rows and degrades to halves.
///
/// # Examples
///
/// ```
/// use volley_config::LayoutConfig;
/// use volley_layout::response_split::split_response;
/// use volley_protocol::{Orientation, RegionBox};
///
/// let config = LayoutConfig::default();
/// let split = split_response(&config, RegionBox::new(47, 57), 0.5, Orientation::SideBySide);
/// assert_eq!(split.primary, RegionBox::new(23, 57));
/// assert_eq!(split.secondary, RegionBox::new(23, 57));
/// ```
#[must_use]
pub fn split_response(
    config: &LayoutConfig,
    response: RegionBox,
    ratio: f64,
    orientation: Orientation,
) -> ResponseSplit {
    let separator = config.response_separator;
    match orientation {
        Orientation::SideBySide => {
            let avail = response.width.saturating_sub(separator);
            let min = config.min_response_split_width;
            let (primary, secondary) = split_span(avail, ratio, min, min, Degrade::Proportional);
            trace!(avail, primary, secondary, "response split side by side");
            ResponseSplit {
                primary: RegionBox::new(primary, response.height),
                secondary: RegionBox::new(secondary, response.height),
                response_split: settle_ratio(ratio, &config.response_split, avail, primary),
            }
        }
        Orientation::Stacked => {
            let avail = response.height.saturating_sub(separator);
            let min = config.min_response_split_height;
            let (primary, secondary) = split_span(avail, ratio, min, min, Degrade::Even);
            trace!(avail, primary, secondary, "response split stacked");
            ResponseSplit {
                primary: RegionBox::new(response.width, primary),
                secondary: RegionBox::new(response.width, secondary),
                response_split: settle_ratio(ratio, &config.response_split, avail, primary),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_by_side_reserves_separator() {
        let config = LayoutConfig::default();
        let split = split_response(&config, RegionBox::new(61, 30), 0.6, Orientation::SideBySide);
        assert_eq!(split.primary, RegionBox::new(36, 30));
        assert_eq!(split.secondary, RegionBox::new(24, 30));
        assert_eq!(
            split.primary.width + split.secondary.width + config.response_separator,
            61
        );
        assert_eq!(split.response_split, 0.6);
    }

    #[test]
    fn side_by_side_honors_minimum() {
        let split = split_response(
            &LayoutConfig::default(),
            RegionBox::new(31, 30),
            0.8,
            Orientation::SideBySide,
        );
        assert_eq!(split.primary.width, 20);
        assert_eq!(split.secondary.width, 10);
        assert!((split.response_split - 20.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn side_by_side_degrades_proportionally() {
        let split = split_response(
            &LayoutConfig::default(),
            RegionBox::new(13, 5),
            0.25,
            Orientation::SideBySide,
        );
        assert_eq!(split.primary.width, 3);
        assert_eq!(split.secondary.width, 9);
    }

    #[test]
    fn stacked_reserves_separator() {
        let split = split_response(
            &LayoutConfig::default(),
            RegionBox::new(47, 57),
            0.5,
            Orientation::Stacked,
        );
        assert_eq!(split.primary, RegionBox::new(47, 28));
        assert_eq!(split.secondary, RegionBox::new(47, 28));
    }

    #[test]
    fn stacked_degrades_evenly() {
        let split = split_response(
            &LayoutConfig::default(),
            RegionBox::new(47, 6),
            0.8,
            Orientation::Stacked,
        );
        assert_eq!(split.primary.height, 2);
        assert_eq!(split.secondary.height, 3);
    }

    #[test]
    fn tiny_box_floors_at_one() {
        let split = split_response(
            &LayoutConfig::default(),
            RegionBox::new(1, 1),
            0.5,
            Orientation::SideBySide,
        );
        assert_eq!(split.primary, RegionBox::new(1, 1));
        assert_eq!(split.secondary, RegionBox::new(1, 1));
    }

    #[test]
    fn mirrored_covers_response() {
        let response = RegionBox::new(47, 57);
        let split = ResponseSplit::mirrored(response, 0.5);
        assert_eq!(split.primary, response);
        assert_eq!(split.secondary, response);
    }
}
