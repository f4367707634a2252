//! External acceleration, uniform damping and the solid-wall clamp.

use crate::{SimParams, VecField2};

pub fn apply_gravity(velocity: &mut VecField2, gravity: f32, dt: f32) {
    if dt == 0.0 || gravity == 0.0 {
        return;
    }
    velocity.vy_mut().add_in_place(gravity * dt);
}

pub fn apply_damping(velocity: &mut VecField2, factor: f32) {
    velocity.scale_in_place(factor);
}

/// Forbids flow into the walls: the floor (last row) keeps `vy <= 0`, the
/// ceiling keeps `vy >= 0`, and with `side_walls` the left column keeps
/// `vx >= 0` and the right column `vx <= 0`.
pub fn apply_wall_clamp(velocity: &mut VecField2, side_walls: bool) {
    let last = velocity.grid().n() - 1;
    velocity.vy_mut().update_with_index(|row, _col, vy| {
        let into_floor = row == last && vy > 0.0;
        let into_ceiling = row == 0 && vy < 0.0;
        if into_floor || into_ceiling {
            0.0
        } else {
            vy
        }
    });
    if !side_walls {
        return;
    }
    velocity.vx_mut().update_with_index(|_row, col, vx| {
        if (col == 0 && vx < 0.0) || (col == last && vx > 0.0) {
            0.0
        } else {
            vx
        }
    });
}

/// Gravity, then damping, then the wall clamp, so the clamp is the last
/// write to boundary velocity.
pub fn apply_forces(velocity: &mut VecField2, params: &SimParams) {
    apply_gravity(velocity, params.gravity, params.dt);
    apply_damping(velocity, params.damping);
    apply_wall_clamp(velocity, params.side_walls);
}
