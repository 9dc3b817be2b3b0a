//! Pressure projection: removes divergence from a velocity field.

use swirl_core::{BoundaryKind, GridDims};
use swirl_field::set_wall;

use crate::relax::relax;

/// Make `(u, v)` approximately divergence-free.
///
/// 1. Central-difference divergence into `div`, zero `pressure`.
/// 2. Solve `∇²pressure = div` with `iterations` Gauss-Seidel sweeps.
/// 3. Subtract the pressure gradient from the velocity.
///
/// `pressure` and `div` are scratch buffers; their contents on entry are
/// ignored. Grid spacing is `1 / width` on both axes.
pub fn project(
    dims: GridDims,
    u: &mut [f32],
    v: &mut [f32],
    pressure: &mut [f32],
    div: &mut [f32],
    iterations: u32,
) {
    let h = 1.0 / dims.width() as f32;
    let stride = dims.stride();

    for i in 1..=dims.width() {
        for j in 1..=dims.height() {
            let k = dims.index(i, j);
            div[k] = -0.5 * h * (u[k + 1] - u[k - 1] + v[k + stride] - v[k - stride]);
            pressure[k] = 0.0;
        }
    }
    set_wall(dims, BoundaryKind::Scalar, div);
    set_wall(dims, BoundaryKind::Scalar, pressure);

    relax(dims, BoundaryKind::Scalar, pressure, div, 1.0, 4.0, iterations);

    for i in 1..=dims.width() {
        for j in 1..=dims.height() {
            let k = dims.index(i, j);
            u[k] -= 0.5 * (pressure[k + 1] - pressure[k - 1]) / h;
            v[k] -= 0.5 * (pressure[k + stride] - pressure[k - stride]) / h;
        }
    }
    set_wall(dims, BoundaryKind::HorizontalVelocity, u);
    set_wall(dims, BoundaryKind::VerticalVelocity, v);
}

/// Write the central-difference divergence of `(u, v)` into `out`.
///
/// Same stencil as [`project`] with a positive sign:
/// `out = 0.5 * h * ((u[i+1,j] - u[i-1,j]) + (v[i,j+1] - v[i,j-1]))` on
/// the interior, zero on the ghost border.
pub fn divergence(dims: GridDims, u: &[f32], v: &[f32], out: &mut [f32]) {
    let h = 1.0 / dims.width() as f32;
    let stride = dims.stride();
    out.fill(0.0);
    for i in 1..=dims.width() {
        for j in 1..=dims.height() {
            let k = dims.index(i, j);
            out[k] = 0.5 * h * (u[k + 1] - u[k - 1] + v[k + stride] - v[k - stride]);
        }
    }
}

/// Largest absolute interior divergence of `(u, v)`.
pub fn max_abs_divergence(dims: GridDims, u: &[f32], v: &[f32]) -> f32 {
    let mut out = vec![0.0; dims.len()];
    divergence(dims, u, v, &mut out);
    out.iter().fold(0.0f32, |m, &d| m.max(d.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_sq_divergence(dims: GridDims, u: &[f32], v: &[f32]) -> f64 {
        let mut out = vec![0.0; dims.len()];
        divergence(dims, u, v, &mut out);
        out.iter().map(|&d| (d as f64) * (d as f64)).sum()
    }

    /// A source-like velocity blob: outward flow around the centre.
    fn radial_blob(dims: GridDims) -> (Vec<f32>, Vec<f32>) {
        let mut u = vec![0.0; dims.len()];
        let mut v = vec![0.0; dims.len()];
        let cx = (dims.width() + 1) as f32 / 2.0;
        let cy = (dims.height() + 1) as f32 / 2.0;
        for y in 1..=dims.height() {
            for x in 1..=dims.width() {
                let k = dims.index(x, y);
                u[k] = (x as f32 - cx) * 0.01;
                v[k] = (y as f32 - cy) * 0.01;
            }
        }
        set_wall(dims, BoundaryKind::HorizontalVelocity, &mut u);
        set_wall(dims, BoundaryKind::VerticalVelocity, &mut v);
        (u, v)
    }

    #[test]
    fn reduces_divergence_substantially() {
        let dims = GridDims::new(16, 16).unwrap();
        let (mut u, mut v) = radial_blob(dims);
        let before = sum_sq_divergence(dims, &u, &v);
        let mut p = vec![0.0; dims.len()];
        let mut div = vec![0.0; dims.len()];
        project(dims, &mut u, &mut v, &mut p, &mut div, 20);
        let after = sum_sq_divergence(dims, &u, &v);
        assert!(before > 0.0);
        assert!(after < 0.5 * before, "before={before} after={after}");
    }

    #[test]
    fn zero_field_stays_zero() {
        let dims = GridDims::new(5, 5).unwrap();
        let mut u = vec![0.0; dims.len()];
        let mut v = vec![0.0; dims.len()];
        let mut p = vec![9.0; dims.len()];
        let mut div = vec![9.0; dims.len()];
        project(dims, &mut u, &mut v, &mut p, &mut div, 10);
        assert!(u.iter().chain(&v).all(|&x| x == 0.0));
        assert!(p.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn divergence_of_point_impulse() {
        let dims = GridDims::new(5, 5).unwrap();
        let mut u = vec![0.0; dims.len()];
        let v = vec![0.0; dims.len()];
        u[dims.index(3, 3)] = 1.0;
        let mut out = vec![0.0; dims.len()];
        divergence(dims, &u, &v, &mut out);
        assert!((out[dims.index(2, 3)] - 0.1).abs() < 1e-6);
        assert!((out[dims.index(4, 3)] + 0.1).abs() < 1e-6);
        assert!((max_abs_divergence(dims, &u, &v) - 0.1).abs() < 1e-6);
    }
}
