//! Ghost-cell boundary enforcement.
//!
//! Every relaxation sweep and every advection reads neighbours that may
//! be ghost cells, so [`set_wall`] must run after each of them. Stale
//! ghosts silently corrupt the next sweep.

use swirl_core::{BoundaryKind, GridDims};

/// Derive all ghost cells of `field` from its interior according to `kind`.
///
/// Edge ghosts copy the adjacent interior cell, negated on the walls that
/// `kind` is normal to. Corners are then set to the average of their two
/// adjacent edge ghosts.
pub fn set_wall(dims: GridDims, kind: BoundaryKind, field: &mut [f32]) {
    debug_assert_eq!(field.len(), dims.len());
    let w = dims.width();
    let h = dims.height();
    let sx = if kind.negates_x() { -1.0 } else { 1.0 };
    let sy = if kind.negates_y() { -1.0 } else { 1.0 };

    for j in 1..=h {
        field[dims.index(0, j)] = sx * field[dims.index(1, j)];
        field[dims.index(w + 1, j)] = sx * field[dims.index(w, j)];
    }
    for i in 1..=w {
        field[dims.index(i, 0)] = sy * field[dims.index(i, 1)];
        field[dims.index(i, h + 1)] = sy * field[dims.index(i, h)];
    }

    field[dims.index(0, 0)] = 0.5 * (field[dims.index(1, 0)] + field[dims.index(0, 1)]);
    field[dims.index(0, h + 1)] = 0.5 * (field[dims.index(1, h + 1)] + field[dims.index(0, h)]);
    field[dims.index(w + 1, 0)] = 0.5 * (field[dims.index(w, 0)] + field[dims.index(w + 1, 1)]);
    field[dims.index(w + 1, h + 1)] =
        0.5 * (field[dims.index(w, h + 1)] + field[dims.index(w + 1, h)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = BoundaryKind> {
        prop_oneof![
            Just(BoundaryKind::Scalar),
            Just(BoundaryKind::HorizontalVelocity),
            Just(BoundaryKind::VerticalVelocity),
        ]
    }

    /// A field with distinct interior values and garbage ghosts.
    fn seeded(dims: GridDims, values: &[f32]) -> Vec<f32> {
        let mut f = vec![999.0; dims.len()];
        let mut k = 0;
        for y in 1..=dims.height() {
            for x in 1..=dims.width() {
                f[dims.index(x, y)] = values[k % values.len()];
                k += 1;
            }
        }
        f
    }

    #[test]
    fn scalar_mirrors_single_cell() {
        let dims = GridDims::new(1, 1).unwrap();
        let mut f = seeded(dims, &[3.0]);
        set_wall(dims, BoundaryKind::Scalar, &mut f);
        assert!(f.iter().all(|&v| v == 3.0));
    }

    #[test]
    fn horizontal_velocity_corners_average_mixed_signs() {
        let dims = GridDims::new(1, 1).unwrap();
        let mut f = seeded(dims, &[2.0]);
        set_wall(dims, BoundaryKind::HorizontalVelocity, &mut f);
        assert_eq!(f[dims.index(0, 1)], -2.0);
        assert_eq!(f[dims.index(2, 1)], -2.0);
        assert_eq!(f[dims.index(1, 0)], 2.0);
        assert_eq!(f[dims.index(1, 2)], 2.0);
        assert_eq!(f[dims.index(0, 0)], 0.0);
        assert_eq!(f[dims.index(2, 2)], 0.0);
    }

    proptest! {
        #[test]
        fn edges_follow_kind(
            w in 1u32..8,
            h in 1u32..8,
            kind in arb_kind(),
            values in prop::collection::vec(-100.0f32..100.0, 1..16),
        ) {
            let dims = GridDims::new(w, h).unwrap();
            let mut f = seeded(dims, &values);
            set_wall(dims, kind, &mut f);
            let (w, h) = (dims.width(), dims.height());
            let sx = if kind == BoundaryKind::HorizontalVelocity { -1.0 } else { 1.0 };
            let sy = if kind == BoundaryKind::VerticalVelocity { -1.0 } else { 1.0 };
            for j in 1..=h {
                prop_assert_eq!(f[dims.index(0, j)], sx * f[dims.index(1, j)]);
                prop_assert_eq!(f[dims.index(w + 1, j)], sx * f[dims.index(w, j)]);
            }
            for i in 1..=w {
                prop_assert_eq!(f[dims.index(i, 0)], sy * f[dims.index(i, 1)]);
                prop_assert_eq!(f[dims.index(i, h + 1)], sy * f[dims.index(i, h)]);
            }
        }

        #[test]
        fn corners_average_edge_neighbours(
            w in 1u32..8,
            h in 1u32..8,
            kind in arb_kind(),
            values in prop::collection::vec(-100.0f32..100.0, 1..16),
        ) {
            let dims = GridDims::new(w, h).unwrap();
            let mut f = seeded(dims, &values);
            set_wall(dims, kind, &mut f);
            let (w, h) = (dims.width(), dims.height());
            let at = |x: usize, y: usize| f[dims.index(x, y)];
            prop_assert_eq!(at(0, 0), 0.5 * (at(1, 0) + at(0, 1)));
            prop_assert_eq!(at(0, h + 1), 0.5 * (at(1, h + 1) + at(0, h)));
            prop_assert_eq!(at(w + 1, 0), 0.5 * (at(w, 0) + at(w + 1, 1)));
            prop_assert_eq!(at(w + 1, h + 1), 0.5 * (at(w, h + 1) + at(w + 1, h)));
        }

        #[test]
        fn interior_untouched(
            w in 1u32..8,
            h in 1u32..8,
            kind in arb_kind(),
            values in prop::collection::vec(-100.0f32..100.0, 1..16),
        ) {
            let dims = GridDims::new(w, h).unwrap();
            let before = seeded(dims, &values);
            let mut f = before.clone();
            set_wall(dims, kind, &mut f);
            for y in 1..=dims.height() {
                for x in 1..=dims.width() {
                    prop_assert_eq!(f[dims.index(x, y)], before[dims.index(x, y)]);
                }
            }
        }
    }
}
