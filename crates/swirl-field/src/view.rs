//! Read-only field views.

use swirl_core::GridDims;

/// A read-only borrow of one bordered field buffer.
///
/// Views are handed out by `&self` methods on the grid, so the borrow
/// checker guarantees the values stay put until the next `step()`.
#[derive(Clone, Copy, Debug)]
pub struct FieldView<'a> {
    dims: GridDims,
    data: &'a [f32],
}

impl<'a> FieldView<'a> {
    /// Wrap a bordered buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != dims.len()`.
    pub fn new(dims: GridDims, data: &'a [f32]) -> Self {
        assert_eq!(
            data.len(),
            dims.len(),
            "field length {} does not match {}x{} bordered grid",
            data.len(),
            dims.width(),
            dims.height()
        );
        Self { dims, data }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The full bordered buffer, addressable by [`GridDims::index`].
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Flat index of `(x, y)`.
    pub fn index(&self, x: usize, y: usize) -> usize {
        self.dims.index(x, y)
    }

    /// Value at `(x, y)`, ghost cells included. `None` outside the border.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.dims.stride() && y < self.dims.height() + 2 {
            Some(self.data[self.dims.index(x, y)])
        } else {
            None
        }
    }

    /// Interior rows, top to bottom, each `width` cells long.
    pub fn interior_rows(&self) -> impl Iterator<Item = &'a [f32]> + 'a {
        let dims = self.dims;
        let data = self.data;
        (1..=dims.height()).map(move |y| {
            let start = dims.index(1, y);
            &data[start..start + dims.width()]
        })
    }

    /// Sum over interior cells, accumulated in `f64`.
    pub fn interior_sum(&self) -> f64 {
        self.interior_rows()
            .flat_map(|row| row.iter())
            .map(|&v| v as f64)
            .sum()
    }

    /// Largest absolute interior value.
    pub fn interior_max_abs(&self) -> f32 {
        self.interior_rows()
            .flat_map(|row| row.iter())
            .fold(0.0f32, |m, &v| m.max(v.abs()))
    }
}
