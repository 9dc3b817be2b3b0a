//! Implicit diffusion.

use swirl_core::{BoundaryKind, GridDims};

use crate::relax::relax;

/// Diffuse `source` into `field` at `rate` over `dt`.
///
/// Solves the implicit heat-equation step with `a = dt * rate * width²`
/// by `iterations` Gauss-Seidel sweeps (see [`relax`]). A rate of zero
/// copies the interior of `source` into `field` exactly.
pub fn diffuse(
    dims: GridDims,
    kind: BoundaryKind,
    field: &mut [f32],
    source: &[f32],
    rate: f32,
    dt: f32,
    iterations: u32,
) {
    let w = dims.width() as f32;
    let a = dt * rate * w * w;
    relax(dims, kind, field, source, a, 1.0 + 4.0 * a, iterations);
}
