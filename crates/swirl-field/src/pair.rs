//! Double-buffered field pair with explicit role swapping.
//!
//! Every transported quantity lives in two buffers. One plays the
//! "current" role (the value the renderer sees after a step), the other
//! the "source" role (injected impulses before a step, the relaxation
//! input or solver scratch during one). Solver stages hand results back
//! and forth by swapping the roles:
//!
//! ```text
//! slot_a: Vec<f32>  ←─── current (b_is_current = false) / source (true)
//! slot_b: Vec<f32>  ←─── source  (b_is_current = false) / current (true)
//! ```
//!
//! [`FieldPair::swap`] flips the flag; no cell is copied.

use swirl_core::GridDims;

use crate::view::FieldView;

/// A current/source buffer pair of one bordered field.
#[derive(Clone, Debug)]
pub struct FieldPair {
    dims: GridDims,
    slot_a: Vec<f32>,
    slot_b: Vec<f32>,
    /// Which slot holds the current field (false = A, true = B).
    b_is_current: bool,
}

impl FieldPair {
    /// Allocate a zero-filled pair for `dims`.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            slot_a: vec![0.0; dims.len()],
            slot_b: vec![0.0; dims.len()],
            b_is_current: false,
        }
    }

    /// Grid dimensions shared by both buffers.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The current field.
    pub fn current(&self) -> &[f32] {
        if self.b_is_current {
            &self.slot_b
        } else {
            &self.slot_a
        }
    }

    /// The current field, mutably.
    pub fn current_mut(&mut self) -> &mut [f32] {
        if self.b_is_current {
            &mut self.slot_b
        } else {
            &mut self.slot_a
        }
    }

    /// The source field.
    pub fn source(&self) -> &[f32] {
        if self.b_is_current {
            &self.slot_a
        } else {
            &self.slot_b
        }
    }

    /// The source field, mutably.
    pub fn source_mut(&mut self) -> &mut [f32] {
        if self.b_is_current {
            &mut self.slot_a
        } else {
            &mut self.slot_b
        }
    }

    /// Borrow both buffers at once as `(current, source)`.
    pub fn split_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        if self.b_is_current {
            (&mut self.slot_b, &mut self.slot_a)
        } else {
            (&mut self.slot_a, &mut self.slot_b)
        }
    }

    /// Exchange the current and source roles.
    #[inline]
    pub fn swap(&mut self) {
        self.b_is_current = !self.b_is_current;
    }

    /// Zero the source buffer.
    pub fn clear_source(&mut self) {
        self.source_mut().fill(0.0);
    }

    /// Read-only view of the current field.
    pub fn view(&self) -> FieldView<'_> {
        FieldView::new(self.dims, self.current())
    }
}
