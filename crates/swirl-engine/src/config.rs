//! Grid configuration and validation.
//!
//! [`FluidConfig`] is the construction input for a [`FluidGrid`](crate::FluidGrid).
//! [`validate()`](FluidConfig::validate) checks every invariant up front;
//! a grid is never built from a configuration that fails it.

use swirl_core::{ChannelDef, ChannelSet, ConfigError, GridDims};
use swirl_solver::SolverSettings;

/// Diffusion rate used by the presets.
pub const DEFAULT_DIFFUSION: f32 = 0.00001;

/// Per-frame fade of the colour presets.
pub const COLOR_DECAY: f32 = 0.005;

/// Construction parameters for a fluid grid.
///
/// All parameters are fixed for the grid's lifetime.
#[derive(Clone, Debug)]
pub struct FluidConfig {
    /// Interior columns. Must be >= 1.
    pub width: u32,
    /// Interior rows. Must be >= 1.
    pub height: u32,
    /// Scalar diffusion rate. Must be finite and >= 0.
    pub diffusion: f32,
    /// Velocity viscosity. Must be finite and >= 0.
    pub viscosity: f32,
    /// Time step. Must be finite and > 0.
    pub dt: f32,
    /// Relaxation sweeps and advection scaling.
    pub solver: SolverSettings,
    /// Scalar channels, in id order. At least one.
    pub channels: Vec<ChannelDef>,
}

impl FluidConfig {
    /// A single-channel (`"density"`) grid with default solver settings.
    pub fn new(width: u32, height: u32, diffusion: f32, viscosity: f32, dt: f32) -> Self {
        Self {
            width,
            height,
            diffusion,
            viscosity,
            dt,
            solver: SolverSettings::default(),
            channels: vec![ChannelDef::new("density")],
        }
    }

    /// A red/green/blue grid whose channels fade by [`COLOR_DECAY`] per frame.
    pub fn rgb(width: u32, height: u32) -> Self {
        Self {
            channels: ["red", "green", "blue"]
                .into_iter()
                .map(|name| ChannelDef::new(name).with_decay(COLOR_DECAY))
                .collect(),
            ..Self::new(width, height, DEFAULT_DIFFUSION, 0.0, 1.0)
        }
    }

    /// Replace the channel list.
    pub fn with_channels(mut self, channels: Vec<ChannelDef>) -> Self {
        self.channels = channels;
        self
    }

    /// Replace the solver settings.
    pub fn with_solver(mut self, solver: SolverSettings) -> Self {
        self.solver = solver;
        self
    }

    /// Check every configuration invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Validate and resolve into grid dimensions and a channel set.
    pub(crate) fn resolve(&self) -> Result<(GridDims, ChannelSet), ConfigError> {
        let dims = GridDims::new(self.width, self.height)?;
        check_rate("diffusion", self.diffusion)?;
        check_rate("viscosity", self.viscosity)?;
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        if self.solver.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        let channels = ChannelSet::new(self.channels.clone())?;
        Ok((dims, channels))
    }
}

fn check_rate(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(ConfigError::InvalidRate { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_valid_single_channel() {
        let c = FluidConfig::new(8, 8, 0.1, 0.0, 1.0);
        assert!(c.validate().is_ok());
        assert_eq!(c.channels.len(), 1);
        assert_eq!(c.channels[0].name, "density");
        assert_eq!(c.solver.iterations, 10);
    }

    #[test]
    fn rgb_preset() {
        let c = FluidConfig::rgb(32, 16);
        assert!(c.validate().is_ok());
        let names: Vec<_> = c.channels.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["red", "green", "blue"]);
        assert!(c.channels.iter().all(|d| d.decay == COLOR_DECAY));
        assert_eq!(c.diffusion, DEFAULT_DIFFUSION);
    }

    #[test]
    fn rejects_bad_dimensions() {
        let err = FluidConfig::new(0, 4, 0.0, 0.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGrid { .. }));
    }

    #[test]
    fn rejects_negative_or_nan_rates() {
        let err = FluidConfig::new(4, 4, -0.1, 0.0, 1.0).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidRate {
                name: "diffusion",
                value: -0.1
            }
        );
        let err = FluidConfig::new(4, 4, 0.0, f32::NAN, 1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRate {
                name: "viscosity",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_positive_dt() {
        for dt in [0.0, -1.0, f32::INFINITY, f32::NAN] {
            let err = FluidConfig::new(4, 4, 0.0, 0.0, dt).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeStep { .. }), "dt={dt}");
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = FluidConfig::new(4, 4, 0.0, 0.0, 1.0).with_solver(SolverSettings {
            iterations: 0,
            ..SolverSettings::default()
        });
        assert_eq!(c.validate().unwrap_err(), ConfigError::ZeroIterations);
    }

    #[test]
    fn rejects_channel_problems() {
        let c = FluidConfig::new(4, 4, 0.0, 0.0, 1.0).with_channels(vec![]);
        assert_eq!(c.validate().unwrap_err(), ConfigError::NoChannels);
        let c = FluidConfig::new(4, 4, 0.0, 0.0, 1.0)
            .with_channels(vec![ChannelDef::new("a"), ChannelDef::new("a")]);
        assert!(matches!(
            c.validate().unwrap_err(),
            ConfigError::DuplicateChannel { .. }
        ));
    }
}
