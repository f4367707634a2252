use crate::{divergence_magnitude, SimState};

/// Scalar summary of a simulation state, logged by the frame driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    /// Total density over the grid.
    pub mass: f32,
    pub max_speed: f32,
    /// Summed `|div|` over interior cells.
    pub divergence: f32,
}

impl FrameStats {
    pub fn measure(state: &SimState) -> Self {
        Self {
            mass: state.density.sum(),
            max_speed: state.velocity.max_speed(),
            divergence: divergence_magnitude(&state.velocity),
        }
    }

    /// Relative mass change against `initial`; zero when `initial` is massless.
    pub fn mass_drift(&self, initial: &FrameStats) -> f32 {
        if initial.mass == 0.0 {
            return 0.0;
        }
        (self.mass - initial.mass) / initial.mass
    }
}
