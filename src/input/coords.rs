//! Coordinate conversion utilities.
//!
//! Centralizes the snap/clamp/round formulas so the same math is not
//! duplicated across the two engines. Snapping and clamping are independent
//! operations and are always applied in that order by callers.

use crate::config::TimelineConfig;
use crate::constants::{COMMIT_MARGIN, COORD_SCALE, GRID_MINUTES};
use crate::types::{Point, Rect};

/// Round a time value to the nearest multiple of the scheduling grid.
pub fn snap_to_grid(minutes: f64) -> i32 {
    (minutes / f64::from(GRID_MINUTES)).round() as i32 * GRID_MINUTES
}

/// Clamp a block start time into the visible day window, leaving room for
/// a minimum-length block before the window closes. The lower bound wins
/// for a degenerate window narrower than one grid step.
pub fn clamp_start_minute(minute: i32, config: &TimelineConfig) -> i32 {
    minute.min(config.last_start_minute()).max(config.day_start)
}

/// Convert a vertical pixel delta into minutes. A non-positive scale is
/// degenerate geometry and yields no movement.
pub fn delta_to_minutes(dy: f64, pixels_per_minute: f64) -> f64 {
    if pixels_per_minute <= 0.0 {
        return 0.0;
    }
    dy / pixels_per_minute
}

/// Vertical offset of a minute from the top of the day window, px.
pub fn minute_to_offset(minute: i32, config: &TimelineConfig) -> f64 {
    f64::from(minute - config.day_start) * config.pixels_per_minute
}

/// Round a fractional coordinate to 4 decimal places for commit.
pub fn round_coord(v: f64) -> f64 {
    (v * COORD_SCALE).round() / COORD_SCALE
}

/// Loose clamp applied during drag for responsive visual feedback.
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Tight clamp applied at commit so items never rest flush against an edge.
pub fn clamp_margin(v: f64) -> f64 {
    v.clamp(COMMIT_MARGIN, 1.0 - COMMIT_MARGIN)
}

/// Convert a surface-relative center in pixels to fractional coordinates.
/// Returns `None` for degenerate geometry.
pub fn center_to_fraction(center: Point, rect: &Rect) -> Option<(f64, f64)> {
    if rect.is_degenerate() {
        return None;
    }
    Some((center.x / rect.width, center.y / rect.height))
}

/// Convert a stored fractional position to a surface-relative center, px.
pub fn fraction_to_center(x: f64, y: f64, rect: &Rect) -> Point {
    Point::new(x * rect.width, y * rect.height)
}
