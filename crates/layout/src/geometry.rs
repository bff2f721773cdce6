//! Clamping and two-way span splitting.
//!
//! Every splitter in the engine reduces to [`split_span`]: divide a span of
//! cells in two by a ratio, honoring a minimum on each side, and degrade in
//! a defined way when both minimums cannot fit. The helpers here never
//! panic and never underflow.

use volley_config::RatioBounds;

/// How [`split_span`] divides a span too small for both minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degrade {
    /// Keep the ratio, but leave at least one cell on each side.
    Proportional,
    /// Halve the span.
    Even,
}

/// Clamps `value` into `[min, max]`.
///
/// If the range is degenerate (`min > max`) the result is `min`.
///
/// # Examples
///
/// ```
/// use volley_layout::geometry::clamp;
///
/// assert_eq!(clamp(5, 1, 10), 5);
/// assert_eq!(clamp(0, 1, 10), 1);
/// assert_eq!(clamp(7, 9, 3), 9);
/// ```
#[must_use]
pub const fn clamp(value: u16, min: u16, max: u16) -> u16 {
    if min > max || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a ratio into `[min, max]`.
///
/// Same contract as [`clamp`]; non-finite input collapses to `min`.
#[must_use]
pub fn clamp_ratio(value: f64, min: f64, max: f64) -> f64 {
    RatioBounds::new(min, min, max).clamp(value)
}

/// Floors a size that is about to be rendered.
#[must_use]
pub const fn at_least_one(value: u16) -> u16 {
    if value == 0 { 1 } else { value }
}

/// Returns `round(total × ratio)`, kept within `[0, total]`.
///
/// Halves round away from zero.
#[must_use]
pub fn scaled(total: u16, ratio: f64) -> u16 {
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    let raw = (f64::from(total) * ratio).round();
    if raw >= f64::from(total) {
        total
    } else {
        // in range: 0 <= raw < total
        raw as u16
    }
}

/// Splits `total` cells in two by `ratio`.
///
/// The two parts always sum to `total`. When both minimums fit, the first
/// part is `round(total × ratio)` clamped into
/// `[min_first, total − min_second]`. Otherwise `degrade` decides. Spans
/// shorter than two cells cannot be divided and go entirely to the first
/// part.
///
/// # Examples
///
/// ```
/// use volley_layout::geometry::{split_span, Degrade};
///
/// assert_eq!(split_span(95, 0.5, 24, 24, Degrade::Proportional), (48, 47));
/// assert_eq!(split_span(50, 0.2, 24, 24, Degrade::Proportional), (24, 26));
/// assert_eq!(split_span(20, 0.2, 24, 24, Degrade::Proportional), (4, 16));
/// assert_eq!(split_span(5, 0.2, 3, 3, Degrade::Even), (2, 3));
/// assert_eq!(split_span(1, 0.5, 3, 3, Degrade::Even), (1, 0));
/// ```
#[must_use]
pub fn split_span(
    total: u16,
    ratio: f64,
    min_first: u16,
    min_second: u16,
    degrade: Degrade,
) -> (u16, u16) {
    if total < 2 {
        return (total, 0);
    }
    let raw = scaled(total, ratio);
    let fits = u32::from(min_first) + u32::from(min_second) <= u32::from(total);
    let first = if fits {
        clamp(raw, min_first, total - min_second)
    } else {
        match degrade {
            Degrade::Proportional => clamp(raw, 1, total - 1),
            Degrade::Even => total / 2,
        }
    };
    (first, total - first)
}

/// Returns `part / total`, or `0.0` for an empty span.
#[must_use]
pub fn realized_ratio(part: u16, total: u16) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(total)
    }
}

/// Reconciles a stored ratio with the split it produced.
///
/// The ratio is kept when `round(total × stored)` already equals the
/// realized first part. When a minimum or a degrade policy moved the split
/// away from the plain rounding, the ratio is replaced by the realized
/// proportion, clamped into `bounds`. Repeating the call on its own output
/// is stable.
///
/// # Examples
///
/// ```
/// use volley_config::RatioBounds;
/// use volley_layout::geometry::settle_ratio;
///
/// let bounds = RatioBounds::new(0.5, 0.2, 0.8);
/// assert_eq!(settle_ratio(0.5, &bounds, 95, 48), 0.5);
/// assert_eq!(settle_ratio(0.55, &bounds, 48, 24), 0.5);
/// ```
#[must_use]
pub fn settle_ratio(stored: f64, bounds: &RatioBounds, total: u16, first: u16) -> f64 {
    if total == 0 || scaled(total, stored) == first {
        stored
    } else {
        bounds.clamp(realized_ratio(first, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_basics() {
        assert_eq!(clamp(0, 0, 0), 0);
        assert_eq!(clamp(u16::MAX, 1, 80), 80);
        assert_eq!(clamp(3, 3, 3), 3);
    }

    #[test]
    fn clamp_ratio_non_finite() {
        assert_eq!(clamp_ratio(f64::NAN, 0.2, 0.8), 0.2);
        assert_eq!(clamp_ratio(f64::NEG_INFINITY, 0.2, 0.8), 0.2);
        assert_eq!(clamp_ratio(0.9, 0.2, 0.8), 0.8);
        assert_eq!(clamp_ratio(0.5, 0.8, 0.2), 0.8);
    }

    #[test]
    fn at_least_one_floors_zero() {
        assert_eq!(at_least_one(0), 1);
        assert_eq!(at_least_one(1), 1);
        assert_eq!(at_least_one(42), 42);
    }

    #[test]
    fn scaled_rounds_half_away_from_zero() {
        assert_eq!(scaled(95, 0.5), 48);
        assert_eq!(scaled(53, 0.5), 27);
        assert_eq!(scaled(120, 0.2), 24);
        assert_eq!(scaled(10, 0.0), 0);
        assert_eq!(scaled(10, 2.0), 10);
        assert_eq!(scaled(10, f64::NAN), 0);
    }

    #[test]
    fn split_respects_minimums() {
        assert_eq!(split_span(100, 0.1, 20, 20, Degrade::Proportional), (20, 80));
        assert_eq!(split_span(100, 0.9, 20, 20, Degrade::Proportional), (80, 20));
        assert_eq!(split_span(100, 0.5, 20, 20, Degrade::Even), (50, 50));
    }

    #[test]
    fn split_degrades_proportionally() {
        assert_eq!(split_span(10, 0.0, 24, 24, Degrade::Proportional), (1, 9));
        assert_eq!(split_span(10, 1.0, 24, 24, Degrade::Proportional), (9, 1));
        assert_eq!(split_span(2, 0.5, 24, 24, Degrade::Proportional), (1, 1));
    }

    #[test]
    fn split_degrades_evenly() {
        assert_eq!(split_span(5, 0.8, 3, 3, Degrade::Even), (2, 3));
        assert_eq!(split_span(4, 0.8, 3, 3, Degrade::Even), (2, 2));
    }

    #[test]
    fn split_tiny_spans() {
        assert_eq!(split_span(0, 0.5, 1, 1, Degrade::Even), (0, 0));
        assert_eq!(split_span(1, 0.5, 1, 1, Degrade::Proportional), (1, 0));
    }

    #[test]
    fn realized_ratio_handles_empty() {
        assert_eq!(realized_ratio(0, 0), 0.0);
        assert_eq!(realized_ratio(24, 48), 0.5);
    }

    #[test]
    fn settle_replaces_clamped_ratio() {
        let bounds = RatioBounds::new(0.2, 0.12, 0.45);
        // 67 * 0.2 rounds to 13, but the sidebar minimum forced 18
        let settled = settle_ratio(0.2, &bounds, 67, 18);
        assert!((settled - 18.0 / 67.0).abs() < 1e-12);
        assert_eq!(settle_ratio(settled, &bounds, 67, 18), settled);
    }

    #[test]
    fn settle_clamps_into_bounds() {
        let bounds = RatioBounds::new(0.5, 0.2, 0.8);
        assert_eq!(settle_ratio(0.5, &bounds, 10, 9), 0.8);
    }
}
