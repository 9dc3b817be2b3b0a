//! Semi-Lagrangian advection.

use swirl_core::{BoundaryKind, GridDims};
use swirl_field::set_wall;

use crate::settings::AdvectionScaling;

/// Transport `src` along `(vel_u, vel_v)` into `dest`.
///
/// Each interior cell traces backward by the scaled velocity, clamps the
/// departure point into `[0.5, dim + 0.5]`, and samples `src` bilinearly
/// at the four surrounding lattice points. Stable for any `dt`; smooths
/// the field somewhat.
#[allow(clippy::too_many_arguments)]
pub fn advect(
    dims: GridDims,
    kind: BoundaryKind,
    dest: &mut [f32],
    src: &[f32],
    vel_u: &[f32],
    vel_v: &[f32],
    dt: f32,
    scaling: AdvectionScaling,
) {
    debug_assert_eq!(dest.len(), dims.len());
    debug_assert_eq!(src.len(), dims.len());
    let (dtx, dty) = scaling.factors(dims, dt);
    let max_x = dims.width() as f32 + 0.5;
    let max_y = dims.height() as f32 + 0.5;

    for i in 1..=dims.width() {
        for j in 1..=dims.height() {
            let k = dims.index(i, j);
            let x = clamp_departure(i as f32 - dtx * vel_u[k], max_x);
            let y = clamp_departure(j as f32 - dty * vel_v[k], max_y);

            let i0 = x as usize;
            let i1 = i0 + 1;
            let j0 = y as usize;
            let j1 = j0 + 1;

            let s1 = x - i0 as f32;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f32;
            let t0 = 1.0 - t1;

            dest[k] = s0 * (t0 * src[dims.index(i0, j0)] + t1 * src[dims.index(i0, j1)])
                + s1 * (t0 * src[dims.index(i1, j0)] + t1 * src[dims.index(i1, j1)]);
        }
    }
    set_wall(dims, kind, dest);
}

/// Clamp a departure coordinate into `[0.5, max]`.
///
/// NaN maps to the lower bound so sampling indices stay in range.
#[inline]
fn clamp_departure(v: f32, max: f32) -> f32 {
    if v >= 0.5 {
        v.min(max)
    } else {
        0.5
    }
}
