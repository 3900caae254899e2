//! Construction-grid alignment for 3-D points.
//!
//! X and Y snap to the grid; Z is deliberately left untouched (vertical
//! placement is not grid-bound). These are pure per-point helpers for the
//! host application; nothing here reads or writes parameter state.

/// Default grid spacing in millimetres.
pub const GRID_SPACING: f64 = 25.0;

/// Tolerance used when validating existing alignment.
pub const GRID_EPSILON: f64 = 1e-6;

/// Rounds a single coordinate to the nearest multiple of `spacing`.
#[inline]
pub fn round_to_grid(value: f64, spacing: f64) -> f64 {
    (value / spacing).round() * spacing
}

/// Whether a single coordinate sits on a multiple of `spacing`, within
/// [`GRID_EPSILON`].
///
/// Measured as distance to the nearest multiple, so values a hair below a
/// grid line and negative coordinates validate correctly.
#[inline]
pub fn is_value_aligned(value: f64, spacing: f64) -> bool {
    (value - round_to_grid(value, spacing)).abs() <= GRID_EPSILON
}

/// Returns a copy of `points` with X and Y snapped to the grid and Z
/// passed through unchanged.
pub fn align_to_grid(points: &[[f64; 3]], spacing: f64) -> Vec<[f64; 3]> {
    points
        .iter()
        .map(|p| [round_to_grid(p[0], spacing), round_to_grid(p[1], spacing), p[2]])
        .collect()
}

/// Whether every point's X and Y already sit on the grid. Z is ignored.
pub fn is_grid_aligned(points: &[[f64; 3]], spacing: f64) -> bool {
    points
        .iter()
        .all(|p| is_value_aligned(p[0], spacing) && is_value_aligned(p[1], spacing))
}
