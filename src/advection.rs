//! Semi-Lagrangian transport: every destination cell traces one step
//! upstream and resamples the source field there.

use crate::{BoundaryPolicy, Field2, VecField2, Vec2};

/// Upstream point `(x, y)` of cell `(row, col)` under `velocity` after `dt`.
pub fn backtrace(row: usize, col: usize, velocity: Vec2, dt: f32) -> (f32, f32) {
    let offset = velocity * dt;
    (col as f32 - offset.x, row as f32 - offset.y)
}

pub fn advect_scalar(
    field: &Field2,
    velocity: &VecField2,
    dt: f32,
    policy: BoundaryPolicy,
) -> Field2 {
    let mut out = Field2::new(field.grid(), 0.0);
    advect_scalar_into(&mut out, field, velocity, dt, policy);
    out
}

/// `out` must be a separate buffer; the stencil reads `field` unmodified.
pub fn advect_scalar_into(
    out: &mut Field2,
    field: &Field2,
    velocity: &VecField2,
    dt: f32,
    policy: BoundaryPolicy,
) {
    field.assert_same_grid(out);
    if dt == 0.0 {
        out.clone_from(field);
        return;
    }
    out.fill_with_index(|row, col| {
        let (x, y) = backtrace(row, col, velocity.get(row, col), dt);
        field.sample(x, y, policy)
    });
}

pub fn advect_velocity(
    field: &VecField2,
    velocity: &VecField2,
    dt: f32,
    policy: BoundaryPolicy,
) -> VecField2 {
    let mut out = VecField2::zeros(field.grid());
    advect_velocity_into(&mut out, field, velocity, dt, policy);
    out
}

/// Advects both channels of `field`; each backtrace uses `velocity` as it was
/// before this call, so the vertical pass never sees the advected horizontal one.
pub fn advect_velocity_into(
    out: &mut VecField2,
    field: &VecField2,
    velocity: &VecField2,
    dt: f32,
    policy: BoundaryPolicy,
) {
    advect_scalar_into(out.vx_mut(), field.vx(), velocity, dt, policy);
    advect_scalar_into(out.vy_mut(), field.vy(), velocity, dt, policy);
}
