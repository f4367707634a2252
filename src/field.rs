use crate::grid::Grid2;
use crate::sampler::{sample_bilinear, BoundaryPolicy};

/// Single-channel N×N field stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2 {
    grid: Grid2,
    data: Vec<f32>,
}

impl Field2 {
    pub fn new(grid: Grid2, fill: f32) -> Self {
        let data = vec![fill; grid.size()];
        Self { grid, data }
    }

    pub fn from_fn(grid: Grid2, f: impl Fn(usize, usize) -> f32) -> Self {
        let data = (0..grid.size())
            .map(|i| {
                let (row, col) = grid.coords(i);
                f(row, col)
            })
            .collect();
        Self { grid, data }
    }

    pub fn grid(&self) -> Grid2 {
        self.grid
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[self.grid.idx(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.grid.idx(row, col);
        self.data[idx] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn sample(&self, x: f32, y: f32, policy: BoundaryPolicy) -> f32 {
        sample_bilinear(self, x, y, policy)
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    pub fn fill_with_index(&mut self, f: impl Fn(usize, usize) -> f32) {
        let grid = self.grid;
        for (i, value) in self.data.iter_mut().enumerate() {
            let (row, col) = grid.coords(i);
            *value = f(row, col);
        }
    }

    pub fn update_with_index(&mut self, f: impl Fn(usize, usize, f32) -> f32) {
        let grid = self.grid;
        for (i, value) in self.data.iter_mut().enumerate() {
            let (row, col) = grid.coords(i);
            *value = f(row, col, *value);
        }
    }

    pub fn scale_in_place(&mut self, scale: f32) {
        for value in &mut self.data {
            *value *= scale;
        }
    }

    pub fn add_in_place(&mut self, offset: f32) {
        for value in &mut self.data {
            *value += offset;
        }
    }

    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    pub fn abs_sum(&self) -> f32 {
        self.data.iter().map(|value| value.abs()).sum()
    }

    pub fn min_max(&self) -> (f32, f32) {
        let mut iter = self.data.iter().filter(|value| value.is_finite());
        let Some(first) = iter.next() else {
            return (0.0, 0.0);
        };
        iter.fold((*first, *first), |(lo, hi), value| (lo.min(*value), hi.max(*value)))
    }

    pub(crate) fn assert_same_grid(&self, other: &Self) {
        assert_eq!(self.grid, other.grid, "field grid mismatch");
    }
}
