//! Gauss-Seidel relaxation shared by diffusion and the pressure solve.

use swirl_core::{BoundaryKind, GridDims};
use swirl_field::set_wall;

/// Run `iterations` in-place sweeps of
/// `x[i,j] = (x0[i,j] + a * (x[i-1,j] + x[i+1,j] + x[i,j-1] + x[i,j+1])) / c`
/// over the interior, enforcing `kind` boundaries on `x` after each sweep.
///
/// Updates within a sweep read neighbours already updated in the same
/// sweep. Cells are visited column by column (x outer, y inner).
pub fn relax(
    dims: GridDims,
    kind: BoundaryKind,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    iterations: u32,
) {
    debug_assert_eq!(x.len(), dims.len());
    debug_assert_eq!(x0.len(), dims.len());
    let stride = dims.stride();
    for _ in 0..iterations {
        for i in 1..=dims.width() {
            for j in 1..=dims.height() {
                let k = dims.index(i, j);
                x[k] = (x0[k] + a * (x[k - 1] + x[k + 1] + x[k - stride] + x[k + stride])) / c;
            }
        }
        set_wall(dims, kind, x);
    }
}
