//! Pressure projection on interior cells.
//!
//! The divergence is negated (`div = -0.5 * (du/dx + dv/dy)` in central
//! differences), relaxed into a pressure field with a fixed number of sweeps,
//! and the central pressure gradient is subtracted from the velocity. The
//! boundary ring is never read as an unknown and never written.

use crate::{Field2, Grid2, VecField2};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelaxationScheme {
    /// Double-buffered: every sweep reads only the previous sweep.
    #[default]
    Jacobi,
    /// Single buffer updated in row-major order.
    GaussSeidel,
}

/// Reusable buffers for [`project_in_place`].
#[derive(Clone, Debug)]
pub struct PressureScratch {
    pub divergence: Field2,
    pub pressure: Field2,
    previous: Field2,
}

impl PressureScratch {
    pub fn new(grid: Grid2) -> Self {
        Self {
            divergence: Field2::new(grid, 0.0),
            pressure: Field2::new(grid, 0.0),
            previous: Field2::new(grid, 0.0),
        }
    }
}

pub fn divergence(velocity: &VecField2) -> Field2 {
    let mut out = Field2::new(velocity.grid(), 0.0);
    divergence_into(&mut out, velocity);
    out
}

/// Writes the negated central-difference divergence; boundary cells get zero.
pub fn divergence_into(out: &mut Field2, velocity: &VecField2) {
    let grid = velocity.grid();
    let vx = velocity.vx();
    let vy = velocity.vy();
    out.fill_with_index(|row, col| {
        if grid.is_boundary(row, col) {
            return 0.0;
        }
        let dvx = vx.get(row, col + 1) - vx.get(row, col - 1);
        let dvy = vy.get(row + 1, col) - vy.get(row - 1, col);
        -0.5 * (dvx + dvy)
    });
}

/// Summed `|div|` over interior cells.
pub fn divergence_magnitude(velocity: &VecField2) -> f32 {
    divergence(velocity).abs_sum()
}

fn relaxed_value(source: &Field2, divergence: &Field2, row: usize, col: usize) -> f32 {
    (divergence.get(row, col)
        + source.get(row - 1, col)
        + source.get(row + 1, col)
        + source.get(row, col - 1)
        + source.get(row, col + 1))
        / 4.0
}

/// Resets `pressure` to zero and runs `iterations` relaxation sweeps.
/// `previous` is only used by [`RelaxationScheme::Jacobi`].
pub fn relax_pressure(
    pressure: &mut Field2,
    previous: &mut Field2,
    divergence: &Field2,
    iterations: usize,
    scheme: RelaxationScheme,
) {
    pressure.assert_same_grid(divergence);
    pressure.fill(0.0);
    let grid = pressure.grid();
    for _ in 0..iterations {
        match scheme {
            RelaxationScheme::Jacobi => {
                previous.clone_from(pressure);
                for row in grid.interior() {
                    for col in grid.interior() {
                        let value = relaxed_value(previous, divergence, row, col);
                        pressure.set(row, col, value);
                    }
                }
            }
            RelaxationScheme::GaussSeidel => {
                for row in grid.interior() {
                    for col in grid.interior() {
                        let value = relaxed_value(pressure, divergence, row, col);
                        pressure.set(row, col, value);
                    }
                }
            }
        }
    }
}

/// Subtracts the central pressure gradient from interior velocities.
pub fn apply_pressure_gradient(velocity: &mut VecField2, pressure: &Field2) {
    let grid = velocity.grid();
    for row in grid.interior() {
        for col in grid.interior() {
            let dpx = pressure.get(row, col + 1) - pressure.get(row, col - 1);
            let dpy = pressure.get(row + 1, col) - pressure.get(row - 1, col);
            let vx = velocity.vx().get(row, col) - 0.5 * dpx;
            let vy = velocity.vy().get(row, col) - 0.5 * dpy;
            velocity.vx_mut().set(row, col, vx);
            velocity.vy_mut().set(row, col, vy);
        }
    }
}

pub fn project(velocity: &VecField2, iterations: usize, scheme: RelaxationScheme) -> VecField2 {
    let mut out = velocity.clone();
    let mut scratch = PressureScratch::new(velocity.grid());
    project_in_place(&mut out, iterations, scheme, &mut scratch);
    out
}

pub fn project_in_place(
    velocity: &mut VecField2,
    iterations: usize,
    scheme: RelaxationScheme,
    scratch: &mut PressureScratch,
) {
    divergence_into(&mut scratch.divergence, velocity);
    relax_pressure(
        &mut scratch.pressure,
        &mut scratch.previous,
        &scratch.divergence,
        iterations,
        scheme,
    );
    apply_pressure_gradient(velocity, &scratch.pressure);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;

    fn assert_close(a: f32, b: f32, tol: f32) {
        assert!(
            (a - b).abs() <= tol,
            "expected {a} to be within {tol} of {b}"
        );
    }

    fn rotation(n: usize) -> VecField2 {
        let c = (n as f32 - 1.0) * 0.5;
        VecField2::from_fn(Grid2::new(n), |row, col| {
            Vec2::new(-(row as f32 - c), col as f32 - c)
        })
    }

    fn expansion(n: usize) -> VecField2 {
        let c = (n as f32 - 1.0) * 0.5;
        VecField2::from_fn(Grid2::new(n), |row, col| {
            Vec2::new(col as f32 - c, row as f32 - c)
        })
    }

    fn wavy(n: usize) -> VecField2 {
        VecField2::from_fn(Grid2::new(n), |row, col| {
            Vec2::new((col as f32 * 0.7).sin(), (row as f32 * 0.4).cos())
        })
    }

    #[test]
    fn solid_body_rotation_is_divergence_free() {
        let div = divergence(&rotation(10));
        for row in 1..9 {
            for col in 1..9 {
                assert_close(div.get(row, col), 0.0, 1e-6);
            }
        }
    }

    #[test]
    fn uniform_flow_is_divergence_free() {
        let velocity = VecField2::new(Grid2::new(6), Vec2::new(3.0, -2.0));
        assert_close(divergence_magnitude(&velocity), 0.0, 1e-6);
    }

    #[test]
    fn expansion_has_negative_divergence_inside_only() {
        let div = divergence(&expansion(6));
        assert_close(div.get(2, 3), -2.0, 1e-6);
        assert_eq!(div.get(0, 3), 0.0);
        assert_eq!(div.get(5, 5), 0.0);
        assert_close(div.sum(), -2.0 * 16.0, 1e-4);
    }

    #[test]
    fn first_jacobi_sweep_is_quarter_divergence() {
        let grid = Grid2::new(5);
        let div = Field2::from_fn(grid, |row, col| {
            if grid.is_boundary(row, col) {
                0.0
            } else {
                (row + col) as f32
            }
        });
        let mut pressure = Field2::new(grid, 9.0);
        let mut previous = Field2::new(grid, 0.0);
        relax_pressure(&mut pressure, &mut previous, &div, 1, RelaxationScheme::Jacobi);
        assert_close(pressure.get(2, 3), 5.0 / 4.0, 1e-6);
        assert_close(pressure.get(1, 1), 0.5, 1e-6);
        assert_eq!(pressure.get(0, 2), 0.0);
    }

    #[test]
    fn gauss_seidel_reuses_fresh_neighbors() {
        let grid = Grid2::new(5);
        let div = Field2::from_fn(grid, |row, col| if (row, col) == (1, 1) { 4.0 } else { 0.0 });
        let mut pressure = Field2::new(grid, 0.0);
        let mut previous = Field2::new(grid, 0.0);
        relax_pressure(&mut pressure, &mut previous, &div, 1, RelaxationScheme::GaussSeidel);
        assert_close(pressure.get(1, 1), 1.0, 1e-6);
        assert_close(pressure.get(1, 2), 0.25, 1e-6);
        relax_pressure(&mut pressure, &mut previous, &div, 1, RelaxationScheme::Jacobi);
        assert_eq!(pressure.get(1, 2), 0.0);
    }

    #[test]
    fn projection_reduces_interior_divergence() {
        for scheme in [RelaxationScheme::Jacobi, RelaxationScheme::GaussSeidel] {
            for velocity in [expansion(16), wavy(16)] {
                let before = divergence_magnitude(&velocity);
                let projected = project(&velocity, 10, scheme);
                let after = divergence_magnitude(&projected);
                assert!(
                    after < before,
                    "{scheme:?}: divergence {before} did not shrink (got {after})"
                );
            }
        }
    }

    #[test]
    fn divergence_free_input_is_left_alone() {
        let velocity = rotation(8);
        let projected = project(&velocity, 10, RelaxationScheme::Jacobi);
        assert_eq!(projected, velocity);
    }

    #[test]
    fn zero_iterations_is_a_no_op() {
        let velocity = wavy(8);
        let projected = project(&velocity, 0, RelaxationScheme::GaussSeidel);
        assert_eq!(projected, velocity);
    }

    #[test]
    fn boundary_velocity_is_untouched() {
        let velocity = expansion(8);
        let projected = project(&velocity, 10, RelaxationScheme::Jacobi);
        for i in 0..8 {
            assert_eq!(projected.get(0, i), velocity.get(0, i));
            assert_eq!(projected.get(7, i), velocity.get(7, i));
            assert_eq!(projected.get(i, 0), velocity.get(i, 0));
            assert_eq!(projected.get(i, 7), velocity.get(i, 7));
        }
    }

    #[test]
    fn tiny_grids_have_nothing_to_project() {
        for n in 1..3 {
            let velocity = VecField2::new(Grid2::new(n), Vec2::new(1.0, 2.0));
            assert_eq!(project(&velocity, 10, RelaxationScheme::Jacobi), velocity);
        }
    }
}
