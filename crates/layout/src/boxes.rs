//! Derived region boxes.

use std::fmt;

use volley_protocol::{Orientation, RegionBox, RegionId};

/// The sizes produced by one recompute.
///
/// A region without a box is collapsed, not present, or (for overlays)
/// closed.
///
/// # Examples
///
/// ```
/// use volley_layout::LayoutBoxes;
/// use volley_protocol::{RegionBox, RegionId};
///
/// let mut boxes = LayoutBoxes::default();
/// boxes.set(RegionId::Editor, RegionBox::new(48, 57));
/// assert_eq!(boxes.get(RegionId::Editor), Some(RegionBox::new(48, 57)));
/// assert_eq!(boxes.get(RegionId::Files), None);
/// assert_eq!(boxes.to_string(), "editor: 48x57\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutBoxes {
    regions: [Option<RegionBox>; RegionId::COUNT],
    /// Rows between the chrome bars.
    pub body_height: u16,
    /// Columns given to the sidebar (0 when no sidebar pane is visible).
    pub sidebar_width: u16,
    /// Columns right of the sidebar.
    pub main_width: u16,
    /// The whole response viewer before the compare split.
    pub response_area: Option<RegionBox>,
    /// Orientation of the compare view, when it is drawn.
    pub compare: Option<Orientation>,
}

impl LayoutBoxes {
    /// Returns the box of `region`, if it has one.
    #[must_use]
    pub const fn get(&self, region: RegionId) -> Option<RegionBox> {
        self.regions[region.index()]
    }

    /// Returns `true` if `region` has a box.
    #[must_use]
    pub const fn contains(&self, region: RegionId) -> bool {
        self.get(region).is_some()
    }

    /// Sets the box of `region`.
    pub fn set(&mut self, region: RegionId, region_box: RegionBox) {
        self.regions[region.index()] = Some(region_box);
    }

    /// Sets or clears the box of `region`.
    pub fn set_opt(&mut self, region: RegionId, region_box: Option<RegionBox>) {
        self.regions[region.index()] = region_box;
    }

    /// Iterates over the regions that have a box, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, RegionBox)> + '_ {
        RegionId::ALL
            .into_iter()
            .filter_map(|region| self.get(region).map(|b| (region, b)))
    }
}

impl fmt::Display for LayoutBoxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (region, region_box) in self.iter() {
            writeln!(f, "{region}: {region_box}")?;
        }
        Ok(())
    }
}
