//! Solver tuning knobs.
//!
//! Neither knob has a single correct value: more sweeps buy accuracy at
//! the cost of latency, and the advection scaling decides whether
//! non-square grids move material at the same rate along both axes.

use swirl_core::GridDims;

/// Relaxation sweeps for large, interactive grids.
pub const INTERACTIVE_ITERATIONS: u32 = 10;

/// Relaxation sweeps for small grids where accuracy matters more.
pub const PRECISE_ITERATIONS: u32 = 20;

/// How advection converts normalised velocity into a grid displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdvectionScaling {
    /// `dt * width` along x and `dt * height` along y.
    #[default]
    PerAxis,
    /// `dt * width` along both axes.
    Shared,
}

impl AdvectionScaling {
    /// Displacement factors `(dtx, dty)` for a step of `dt`.
    pub fn factors(self, dims: GridDims, dt: f32) -> (f32, f32) {
        let dtx = dt * dims.width() as f32;
        match self {
            Self::PerAxis => (dtx, dt * dims.height() as f32),
            Self::Shared => (dtx, dtx),
        }
    }
}

/// Tuning shared by diffusion, projection, and advection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverSettings {
    /// Gauss-Seidel sweeps per diffusion and per pressure solve. Must be >= 1.
    pub iterations: u32,
    /// Advection displacement scaling.
    pub advection: AdvectionScaling,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            iterations: INTERACTIVE_ITERATIONS,
            advection: AdvectionScaling::PerAxis,
        }
    }
}

impl SolverSettings {
    /// Settings for small grids: [`PRECISE_ITERATIONS`] sweeps.
    pub fn precise() -> Self {
        Self {
            iterations: PRECISE_ITERATIONS,
            ..Self::default()
        }
    }
}
