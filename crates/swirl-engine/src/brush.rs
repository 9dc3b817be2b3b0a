//! Pointer-driven ink strokes.

use swirl_core::InjectError;

use crate::grid::FluidGrid;
use crate::palette::Palette;

/// Velocity gain applied to the pointer delta.
pub const DEFAULT_GAIN: f32 = 2.0 / 50.0;

/// Palette phase advance per stroke point.
pub const DEFAULT_SPEED: f32 = 0.005;

/// Turns successive pointer positions into ink and velocity injections.
///
/// Positions are grid coordinates. Each point after the first pushes the
/// fluid along the pointer's motion; every point drops ink in the current
/// palette colour, which slowly cycles as the stroke continues.
#[derive(Clone, Debug)]
pub struct Brush {
    palette: Palette,
    gain: f32,
    speed: f32,
    phase: f32,
    last: Option<(f32, f32)>,
}

impl Brush {
    /// A brush cycling through `palette` with default gain and speed.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            gain: DEFAULT_GAIN,
            speed: DEFAULT_SPEED,
            phase: 0.0,
            last: None,
        }
    }

    /// Set the velocity gain.
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Set the palette phase advance per point.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Current palette phase.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Whether a previous point is held.
    pub fn is_down(&self) -> bool {
        self.last.is_some()
    }

    /// Extend the stroke to `(x, y)`.
    ///
    /// # Errors
    ///
    /// Propagates [`InjectError`] from the grid, e.g. when the palette's
    /// component count differs from the grid's channel count. The brush
    /// state is left unchanged on error.
    pub fn stroke_to(&mut self, grid: &mut FluidGrid, x: f32, y: f32) -> Result<(), InjectError> {
        if let Some((px, py)) = self.last {
            grid.inject_velocity(x, y, None, (x - px) * self.gain, (y - py) * self.gain)?;
        }
        let phase = self.phase + self.speed;
        grid.inject_scalar(x, y, None, &self.palette.sample(phase))?;
        self.phase = phase;
        self.last = Some((x, y));
        Ok(())
    }

    /// End the stroke; the next point injects no velocity.
    pub fn lift(&mut self) {
        self.last = None;
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Palette::pastel())
    }
}
