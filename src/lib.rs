mod advection;
mod config;
mod diagnostics;
mod field;
mod forces;
mod grid;
mod pressure;
mod render;
mod sampler;
mod sim;
mod vec2;
mod vec_field;

pub use advection::{advect_scalar, advect_scalar_into, advect_velocity, advect_velocity_into, backtrace};
pub use config::{Config, ConfigError, DisplayConfig, PhysicsConfig, DEFAULT_CONFIG_PATH};
pub use diagnostics::FrameStats;
pub use field::Field2;
pub use forces::{apply_damping, apply_forces, apply_gravity, apply_wall_clamp};
pub use grid::Grid2;
pub use pressure::{
    apply_pressure_gradient, divergence, divergence_into, divergence_magnitude, project,
    project_in_place, relax_pressure, PressureScratch, RelaxationScheme,
};
pub use render::{ascii_frame, density_to_intensity, density_to_luma, density_to_rgb};
pub use sampler::{bilinear_weights, sample_bilinear, BoundaryPolicy, EDGE_EPSILON};
pub use sim::{centered_block, seeded_block, step, step_in_place, SimParams, SimState, SimWorkspace};
pub use vec2::Vec2;
pub use vec_field::VecField2;
