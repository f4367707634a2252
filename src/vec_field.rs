use crate::{BoundaryPolicy, Field2, Grid2, Vec2};

/// Collocated velocity field: one horizontal and one vertical channel per cell.
#[derive(Clone, Debug, PartialEq)]
pub struct VecField2 {
    vx: Field2,
    vy: Field2,
}

impl VecField2 {
    pub fn new(grid: Grid2, fill: Vec2) -> Self {
        Self {
            vx: Field2::new(grid, fill.x),
            vy: Field2::new(grid, fill.y),
        }
    }

    pub fn zeros(grid: Grid2) -> Self {
        Self::new(grid, Vec2::ZERO)
    }

    pub fn from_fn(grid: Grid2, f: impl Fn(usize, usize) -> Vec2) -> Self {
        let vx = Field2::from_fn(grid, |row, col| f(row, col).x);
        let vy = Field2::from_fn(grid, |row, col| f(row, col).y);
        Self { vx, vy }
    }

    pub fn from_components(vx: Field2, vy: Field2) -> Self {
        vx.assert_same_grid(&vy);
        Self { vx, vy }
    }

    pub fn grid(&self) -> Grid2 {
        self.vx.grid()
    }

    pub fn get(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(self.vx.get(row, col), self.vy.get(row, col))
    }

    pub fn set(&mut self, row: usize, col: usize, value: Vec2) {
        self.vx.set(row, col, value.x);
        self.vy.set(row, col, value.y);
    }

    pub fn vx(&self) -> &Field2 {
        &self.vx
    }

    pub fn vy(&self) -> &Field2 {
        &self.vy
    }

    pub fn vx_mut(&mut self) -> &mut Field2 {
        &mut self.vx
    }

    pub fn vy_mut(&mut self) -> &mut Field2 {
        &mut self.vy
    }

    pub fn sample(&self, x: f32, y: f32, policy: BoundaryPolicy) -> Vec2 {
        Vec2::new(self.vx.sample(x, y, policy), self.vy.sample(x, y, policy))
    }

    pub fn scale_in_place(&mut self, scale: f32) {
        self.vx.scale_in_place(scale);
        self.vy.scale_in_place(scale);
    }

    pub fn max_speed(&self) -> f32 {
        self.vx
            .as_slice()
            .iter()
            .zip(self.vy.as_slice())
            .map(|(x, y)| Vec2::new(*x, *y).length())
            .filter(|speed| speed.is_finite())
            .fold(0.0, f32::max)
    }
}
