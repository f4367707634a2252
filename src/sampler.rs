//! Bilinear sampling of single-channel fields at fractional coordinates.
//!
//! Coordinates are `(x, y)` = `(col, row)`. Every lookup is routed through a
//! [`BoundaryPolicy`] first, so no sample can index outside the grid.

use crate::field::Field2;
use serde::Deserialize;

/// Gap kept between a clamped coordinate and the last cell index.
pub const EDGE_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Clamp into `[0, n - 1 - EDGE_EPSILON]`.
    #[default]
    Clamp,
    /// Mirror once about the first/last cell, then clamp.
    Reflect,
}

impl BoundaryPolicy {
    /// Maps an arbitrary coordinate on an axis of `n` cells into sampling range.
    pub fn resolve(self, coord: f32, n: usize) -> f32 {
        let last = (n - 1) as f32;
        let coord = match self {
            BoundaryPolicy::Clamp => coord,
            BoundaryPolicy::Reflect => {
                if coord < 0.0 {
                    -coord
                } else if coord > last {
                    2.0 * last - coord
                } else {
                    coord
                }
            }
        };
        // a single reflection can still overshoot when |displacement| > n - 1
        coord.clamp(0.0, (last - EDGE_EPSILON).max(0.0))
    }
}

/// Interpolation weights `(w0, w1)` for `coord` relative to its base cell.
pub fn bilinear_weights(coord: f32, base: usize) -> (f32, f32) {
    let w1 = coord - base as f32;
    (1.0 - w1, w1)
}

pub fn sample_bilinear(field: &Field2, x: f32, y: f32, policy: BoundaryPolicy) -> f32 {
    let n = field.grid().n();
    let x = policy.resolve(x, n);
    let y = policy.resolve(y, n);
    // NaN floors to index 0 through the saturating cast
    let x0 = (x.floor() as usize).min(n - 1);
    let y0 = (y.floor() as usize).min(n - 1);
    let x1 = (x0 + 1).min(n - 1);
    let y1 = (y0 + 1).min(n - 1);
    let (wx0, wx1) = bilinear_weights(x, x0);
    let (wy0, wy1) = bilinear_weights(y, y0);
    field.get(y0, x0) * wy0 * wx0
        + field.get(y0, x1) * wy0 * wx1
        + field.get(y1, x0) * wy1 * wx0
        + field.get(y1, x1) * wy1 * wx1
}
