//! Test utilities for swirl development.
//!
//! Seeded random fields, divergence and mass measurements, and the
//! canned grid scenarios in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use swirl_core::{BoundaryKind, GridDims};
use swirl_field::set_wall;
use swirl_solver::divergence;

/// A field with interior cells drawn uniformly from `[-amplitude, amplitude)`
/// and ghosts derived for `kind`.
///
/// The same `seed` always produces the same field.
pub fn random_field(dims: GridDims, kind: BoundaryKind, amplitude: f32, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut field = vec![0.0; dims.len()];
    for y in 1..=dims.height() {
        for x in 1..=dims.width() {
            field[dims.index(x, y)] = rng.random_range(-amplitude..amplitude);
        }
    }
    set_wall(dims, kind, &mut field);
    field
}

/// A non-negative field, e.g. a density, drawn from `[0, max)`.
pub fn random_density(dims: GridDims, max: f32, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut field = vec![0.0; dims.len()];
    for y in 1..=dims.height() {
        for x in 1..=dims.width() {
            field[dims.index(x, y)] = rng.random::<f32>() * max;
        }
    }
    set_wall(dims, BoundaryKind::Scalar, &mut field);
    field
}

/// A random velocity field `(u, v)` with wall ghosts applied.
pub fn random_velocity(dims: GridDims, amplitude: f32, seed: u64) -> (Vec<f32>, Vec<f32>) {
    (
        random_field(dims, BoundaryKind::HorizontalVelocity, amplitude, seed),
        random_field(
            dims,
            BoundaryKind::VerticalVelocity,
            amplitude,
            seed.wrapping_add(1),
        ),
    )
}

/// Sum of the interior cells in `f64`.
pub fn interior_mass(dims: GridDims, field: &[f32]) -> f64 {
    let mut total = 0.0;
    for y in 1..=dims.height() {
        for x in 1..=dims.width() {
            total += field[dims.index(x, y)] as f64;
        }
    }
    total
}

/// Sum of squared interior divergence.
pub fn sum_sq_divergence(dims: GridDims, u: &[f32], v: &[f32]) -> f64 {
    let mut out = vec![0.0; dims.len()];
    divergence(dims, u, v, &mut out);
    out.iter().map(|&d| d as f64 * d as f64).sum()
}

/// Panic with the first offending index if any cell is NaN or infinite.
pub fn assert_all_finite(what: &str, field: &[f32]) {
    if let Some(k) = field.iter().position(|v| !v.is_finite()) {
        panic!("{what}: cell {k} is {}", field[k]);
    }
}
