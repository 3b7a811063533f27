//! Interaction constants.
//!
//! Centralizes the magic numbers shared by the gesture machines so the
//! thresholds live in one place.

// ============================================================================
// Click vs. drag
// ============================================================================

/// Screen-pixel displacement (per axis) beyond which a pointer-down/up pair
/// counts as a drag rather than a click.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

// ============================================================================
// Spatial surface
// ============================================================================

/// Margin kept between a committed item center and the surface edge, in
/// fractional coordinates. Commits are clamped into
/// `[COMMIT_MARGIN, 1.0 - COMMIT_MARGIN]` on both axes.
pub const COMMIT_MARGIN: f64 = 0.02;

/// Scale used to round committed fractional coordinates to 4 decimal places.
pub const COORD_SCALE: f64 = 10_000.0;

// ============================================================================
// Timeline
// ============================================================================

/// Scheduling grid step in minutes. Snapped times and durations are always
/// a multiple of this.
pub const GRID_MINUTES: i32 = 15;

/// Minimum duration of a scheduled block in minutes.
pub const MIN_BLOCK_MINUTES: i32 = GRID_MINUTES;
