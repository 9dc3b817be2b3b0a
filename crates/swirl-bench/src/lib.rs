//! Benchmark profiles and utilities for the swirl fluid solver.
//!
//! Provides pre-built [`FluidConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 128x128 RGB canvas (16K cells), interactive settings
//! - [`stress_profile`]: 512x512 RGB canvas (~262K cells), precise settings
//! - [`seed_impulses`]: deterministic ink and velocity splats via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use swirl_core::InjectError;
use swirl_engine::{FluidConfig, FluidGrid};
use swirl_solver::SolverSettings;

/// Build the reference benchmark profile: 128x128 RGB canvas.
///
/// Default solver settings (10 sweeps, per-axis advection), dt = 1.
pub fn reference_profile() -> FluidConfig {
    FluidConfig::rgb(128, 128)
}

/// Build the stress benchmark profile: 512x512 RGB canvas.
///
/// Same channels as [`reference_profile`] at 16x the cell count, with the
/// precise solver (20 sweeps) and a sub-unit time step.
pub fn stress_profile() -> FluidConfig {
    FluidConfig {
        dt: 0.1,
        viscosity: 0.00001,
        ..FluidConfig::rgb(512, 512)
    }
    .with_solver(SolverSettings::precise())
}

/// Scatter `n` ink and velocity splats across `grid`.
///
/// Positions, colours, and impulses come from a ChaCha8 stream seeded with
/// `seed`, so the same seed always produces the same scene. Each splat
/// writes one value per channel in `[0, 255)`.
///
/// # Errors
///
/// Propagates [`InjectError`] from the grid.
pub fn seed_impulses(grid: &mut FluidGrid, n: usize, seed: u64) -> Result<(), InjectError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dims = grid.dims();
    let (w, h) = (dims.width() as f32, dims.height() as f32);
    let channels = grid.channels().len();
    let mut colour = vec![0.0; channels];

    for _ in 0..n {
        let x = rng.random_range(1.0..w + 1.0);
        let y = rng.random_range(1.0..h + 1.0);
        for c in colour.iter_mut() {
            *c = rng.random_range(0.0..255.0);
        }
        grid.inject_scalar(x, y, None, &colour)?;
        let vx = rng.random_range(-0.5..0.5);
        let vy = rng.random_range(-0.5..0.5);
        grid.inject_velocity(x, y, None, vx, vy)?;
    }
    Ok(())
}
