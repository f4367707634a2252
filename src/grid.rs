/// Square lattice of unit-spaced cells addressed as `(row, col)`.
///
/// Rows grow downward, so row `n - 1` is the floor of the domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid2 {
    n: usize,
}

impl Grid2 {
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "grid size must be > 0");
        Self { n }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn size(&self) -> usize {
        self.n * self.n
    }

    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.n && col < self.n);
        row * self.n + col
    }

    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.n, idx % self.n)
    }

    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.n || col + 1 == self.n
    }

    /// Rows (or columns) excluded from the boundary ring, `1..n-1`.
    pub fn interior(&self) -> std::ops::Range<usize> {
        1..self.n.saturating_sub(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_is_row_major() {
        let grid = Grid2::new(4);
        assert_eq!(grid.idx(0, 3), 3);
        assert_eq!(grid.idx(2, 1), 9);
        assert_eq!(grid.coords(9), (2, 1));
    }

    #[test]
    fn boundary_ring_is_detected() {
        let grid = Grid2::new(4);
        assert!(grid.is_boundary(0, 2));
        assert!(grid.is_boundary(3, 1));
        assert!(grid.is_boundary(2, 0));
        assert!(grid.is_boundary(1, 3));
        assert!(!grid.is_boundary(1, 2));
    }

    #[test]
    fn interior_is_empty_on_tiny_grids() {
        assert_eq!(Grid2::new(1).interior().count(), 0);
        assert_eq!(Grid2::new(2).interior().count(), 0);
        assert_eq!(Grid2::new(3).interior().collect::<Vec<_>>(), vec![1]);
        assert_eq!(Grid2::new(5).interior().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "grid size must be > 0")]
    fn zero_size_panics() {
        let _ = Grid2::new(0);
    }
}
