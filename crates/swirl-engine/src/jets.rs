//! Opposing edge emitters.

use swirl_core::InjectError;

use crate::grid::FluidGrid;
use crate::palette::Stop;

/// Impulse used by [`TwinJets::blue_red`].
pub const DEFAULT_STRENGTH: f32 = 0.15;

const JET_RADIUS: f32 = 1.0;

/// Two jets facing each other across the grid's horizontal midline.
///
/// The left jet sits at `(1, H/2)` and pushes right; the right jet sits at
/// `(W, H/2)` and pushes left. Call [`emit`](TwinJets::emit) once per frame
/// before stepping.
#[derive(Clone, Debug)]
pub struct TwinJets {
    left: Stop,
    right: Stop,
    strength: f32,
}

impl TwinJets {
    /// Jets with the given ink colours and impulse.
    pub fn new(left: &[f32], right: &[f32], strength: f32) -> Self {
        Self {
            left: Stop::from_slice(left),
            right: Stop::from_slice(right),
            strength,
        }
    }

    /// Blue from the left, red from the right, at [`DEFAULT_STRENGTH`].
    pub fn blue_red() -> Self {
        Self::new(&[0.0, 0.0, 255.0], &[255.0, 0.0, 0.0], DEFAULT_STRENGTH)
    }

    /// Horizontal impulse of each jet.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Stamp both jets' ink and velocity into `grid`'s sources.
    ///
    /// # Errors
    ///
    /// Propagates [`InjectError`], e.g. when a colour's component count
    /// differs from the grid's channel count.
    pub fn emit(&self, grid: &mut FluidGrid) -> Result<(), InjectError> {
        let dims = grid.dims();
        let mid = (dims.height() / 2) as f32;
        let right = dims.width() as f32;

        grid.inject_scalar(1.0, mid, Some(JET_RADIUS), &self.left)?;
        grid.inject_velocity(1.0, mid, Some(JET_RADIUS), self.strength, 0.0)?;
        grid.inject_scalar(right, mid, Some(JET_RADIUS), &self.right)?;
        grid.inject_velocity(right, mid, Some(JET_RADIUS), -self.strength, 0.0)?;
        Ok(())
    }
}

impl Default for TwinJets {
    fn default() -> Self {
        Self::blue_red()
    }
}
