use crate::{
    advect_scalar, advect_scalar_into, advect_velocity, advect_velocity_into, apply_forces,
    project, project_in_place, BoundaryPolicy, Field2, Grid2, PressureScratch, RelaxationScheme,
    VecField2,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Simulated seconds advanced by one frame.
    pub dt: f32,
    /// Vertical acceleration in cells/s², positive toward the floor.
    pub gravity: f32,
    /// Per-frame velocity multiplier in `(0, 1]`.
    pub damping: f32,
    pub pressure_iters: usize,
    pub relaxation: RelaxationScheme,
    pub boundary: BoundaryPolicy,
    pub side_walls: bool,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            gravity: 50.0,
            damping: 0.99,
            pressure_iters: 10,
            relaxation: RelaxationScheme::Jacobi,
            boundary: BoundaryPolicy::Clamp,
            side_walls: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimState {
    pub density: Field2,
    pub velocity: VecField2,
}

impl SimState {
    pub fn new(grid: Grid2) -> Self {
        Self::with_density(Field2::new(grid, 0.0))
    }

    pub fn with_density(density: Field2) -> Self {
        let velocity = VecField2::zeros(density.grid());
        Self { density, velocity }
    }

    pub fn grid(&self) -> Grid2 {
        self.density.grid()
    }
}

/// Scratch buffers reused by [`step_in_place`] across frames.
#[derive(Clone, Debug)]
pub struct SimWorkspace {
    velocity: VecField2,
    density: Field2,
    pressure: PressureScratch,
}

impl SimWorkspace {
    pub fn new(grid: Grid2) -> Self {
        Self {
            velocity: VecField2::zeros(grid),
            density: Field2::new(grid, 0.0),
            pressure: PressureScratch::new(grid),
        }
    }

    pub fn grid(&self) -> Grid2 {
        self.density.grid()
    }

    /// Pressure solved during the last [`step_in_place`].
    pub fn pressure(&self) -> &Field2 {
        &self.pressure.pressure
    }
}

/// Square of `value` with side `size` and its top-left cell at `(top, left)`,
/// zero elsewhere. Cells past the grid edge are dropped.
pub fn seeded_block(grid: Grid2, top: usize, left: usize, size: usize, value: f32) -> Field2 {
    let rows = top..top.saturating_add(size);
    let cols = left..left.saturating_add(size);
    Field2::from_fn(grid, |row, col| {
        if rows.contains(&row) && cols.contains(&col) {
            value
        } else {
            0.0
        }
    })
}

pub fn centered_block(grid: Grid2, size: usize, value: f32) -> Field2 {
    let size = size.min(grid.n());
    let start = (grid.n() - size) / 2;
    seeded_block(grid, start, start, size, value)
}

/// Advances one frame: self-advect velocity, apply gravity/damping/walls,
/// project, then carry density along the projected velocity.
pub fn step(state: &SimState, params: SimParams) -> SimState {
    let mut velocity = advect_velocity(&state.velocity, &state.velocity, params.dt, params.boundary);
    apply_forces(&mut velocity, &params);
    let velocity = project(&velocity, params.pressure_iters, params.relaxation);
    let density = advect_scalar(&state.density, &velocity, params.dt, params.boundary);
    SimState { density, velocity }
}

pub fn step_in_place(state: &mut SimState, params: SimParams, scratch: &mut SimWorkspace) {
    debug_assert_eq!(scratch.grid(), state.grid(), "workspace grid mismatch");
    advect_velocity_into(
        &mut scratch.velocity,
        &state.velocity,
        &state.velocity,
        params.dt,
        params.boundary,
    );
    std::mem::swap(&mut state.velocity, &mut scratch.velocity);
    apply_forces(&mut state.velocity, &params);
    project_in_place(
        &mut state.velocity,
        params.pressure_iters,
        params.relaxation,
        &mut scratch.pressure,
    );
    advect_scalar_into(
        &mut scratch.density,
        &state.density,
        &state.velocity,
        params.dt,
        params.boundary,
    );
    std::mem::swap(&mut state.density, &mut scratch.density);
}
