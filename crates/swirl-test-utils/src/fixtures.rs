//! Canned grid scenarios shared by integration tests and benchmarks.
//!
//! Each [`Scenario`] holds the raw construction parameters; callers turn
//! them into a grid configuration themselves.

/// Construction parameters for a test grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub width: u32,
    pub height: u32,
    pub diffusion: f32,
    pub viscosity: f32,
    pub dt: f32,
}

/// 5×5 grid used for the single-impulse projection check.
pub const IMPULSE_5X5: Scenario = Scenario {
    width: 5,
    height: 5,
    diffusion: 0.1,
    viscosity: 0.0,
    dt: 1.0,
};

/// 10×10 grid with no diffusion; density must be conserved while still.
pub const STILL_10X10: Scenario = Scenario {
    width: 10,
    height: 10,
    diffusion: 0.0,
    viscosity: 0.0,
    dt: 1.0,
};

/// A wide canvas with viscosity and a sub-unit time step.
pub const VISCOUS_96X48: Scenario = Scenario {
    width: 96,
    height: 48,
    diffusion: 0.0001,
    viscosity: 0.0001,
    dt: 0.1,
};
