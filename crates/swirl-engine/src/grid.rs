//! The fluid grid: field ownership, injection, and frame stepping.
//!
//! # Ownership model
//!
//! `FluidGrid` is [`Send`] and owns every buffer it touches. Mutating
//! methods take `&mut self`; read views borrow `&self`. A view therefore
//! cannot be held across [`step()`](FluidGrid::step) or
//! [`decay()`](FluidGrid::decay), so rendered values are stable for as
//! long as the renderer looks at them.

use std::time::Instant;

use swirl_core::{
    BoundaryKind, ChannelDef, ChannelId, ChannelSet, ConfigError, GridDims, InjectError,
};
use swirl_field::{FieldPair, FieldView};
use swirl_solver::{add_source, advect, diffuse, project, sanitize, SolverSettings};

use crate::config::FluidConfig;
use crate::decay::fade;
use crate::metrics::StepMetrics;
use crate::stamp::{default_ink_radius, default_velocity_radius, Stamp};

// Compile-time assertion: FluidGrid can move to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FluidGrid>();
    }
};

/// A 2-D stable-fluids simulation.
///
/// Holds one velocity field (`u`, `v`) and one field pair per scalar
/// channel. Each [`step()`](FluidGrid::step) runs:
///
/// ```text
/// velocity: add sources → diffuse u, v → project → advect u, v → project
/// scalars:  per channel: add source → diffuse → advect
/// then:     zero every source buffer
/// ```
///
/// # Example
///
/// ```
/// use swirl_engine::{FluidConfig, FluidGrid};
///
/// let mut grid = FluidGrid::new(FluidConfig::new(32, 32, 0.0001, 0.0, 0.1)).unwrap();
/// grid.inject_scalar(16.0, 16.0, Some(2.0), &[50.0]).unwrap();
/// grid.inject_velocity(16.0, 16.0, Some(2.0), 0.5, 0.0).unwrap();
/// grid.step();
/// let density = grid.channel_by_name("density").unwrap();
/// assert!(density.interior_sum() > 0.0);
/// ```
#[derive(Debug)]
pub struct FluidGrid {
    dims: GridDims,
    diffusion: f32,
    viscosity: f32,
    dt: f32,
    solver: SolverSettings,
    channels: ChannelSet,
    u: FieldPair,
    v: FieldPair,
    scalars: Vec<FieldPair>,
    frame: u64,
    faults_total: u64,
}

impl FluidGrid {
    /// Build a zero-initialised grid from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any configuration invariant fails.
    pub fn new(config: FluidConfig) -> Result<Self, ConfigError> {
        let (dims, channels) = config.resolve()?;
        let scalars = (0..channels.len()).map(|_| FieldPair::new(dims)).collect();
        log::debug!(
            "swirl: {}x{} grid, {} channel(s), {} sweeps, {:?} advection",
            dims.width(),
            dims.height(),
            channels.len(),
            config.solver.iterations,
            config.solver.advection,
        );
        Ok(Self {
            dims,
            diffusion: config.diffusion,
            viscosity: config.viscosity,
            dt: config.dt,
            solver: config.solver,
            channels,
            u: FieldPair::new(dims),
            v: FieldPair::new(dims),
            scalars,
            frame: 0,
            faults_total: 0,
        })
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Time step.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Scalar diffusion rate.
    pub fn diffusion(&self) -> f32 {
        self.diffusion
    }

    /// Velocity viscosity.
    pub fn viscosity(&self) -> f32 {
        self.viscosity
    }

    /// Solver settings.
    pub fn solver(&self) -> SolverSettings {
        self.solver
    }

    /// Configured scalar channels.
    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    /// Number of completed frames.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Non-finite cells reset since construction.
    pub fn faults_total(&self) -> u64 {
        self.faults_total
    }

    /// Radius used by scalar injection when none is given.
    pub fn default_ink_radius(&self) -> f32 {
        default_ink_radius(self.dims)
    }

    /// Radius used by velocity injection when none is given.
    pub fn default_velocity_radius(&self) -> f32 {
        default_velocity_radius(self.dims)
    }

    // ── Injection ───────────────────────────────────────────────

    /// Stamp one value per channel into the scalar source buffers.
    ///
    /// `radius: None` selects [`default_ink_radius`](Self::default_ink_radius).
    /// Returns the number of cells covered.
    ///
    /// # Errors
    ///
    /// [`InjectError::ChannelCountMismatch`] if `values.len()` differs from
    /// the channel count; [`InjectError::NonFinite`] for a NaN or infinite
    /// value. Nothing is written on error.
    pub fn inject_scalar(
        &mut self,
        x: f32,
        y: f32,
        radius: Option<f32>,
        values: &[f32],
    ) -> Result<usize, InjectError> {
        if values.len() != self.scalars.len() {
            return Err(InjectError::ChannelCountMismatch {
                expected: self.scalars.len(),
                got: values.len(),
            });
        }
        for &value in values {
            check_finite("scalar amount", value)?;
        }
        let stamp = Stamp::new(self.dims, x, y, radius.unwrap_or(self.default_ink_radius()));
        let mut covered = 0;
        for (cx, cy) in stamp.cells() {
            let k = self.dims.index(cx, cy);
            for (pair, &value) in self.scalars.iter_mut().zip(values) {
                pair.source_mut()[k] = value;
            }
            covered += 1;
        }
        Ok(covered)
    }

    /// Stamp `amount` into a single channel's source buffer.
    ///
    /// # Errors
    ///
    /// [`InjectError::UnknownChannel`] or [`InjectError::NonFinite`].
    pub fn inject_channel(
        &mut self,
        channel: ChannelId,
        x: f32,
        y: f32,
        radius: Option<f32>,
        amount: f32,
    ) -> Result<usize, InjectError> {
        check_finite("scalar amount", amount)?;
        let radius = radius.unwrap_or(self.default_ink_radius());
        let dims = self.dims;
        let pair = self
            .scalars
            .get_mut(channel.index())
            .ok_or(InjectError::UnknownChannel { channel })?;
        let mut covered = 0;
        for (cx, cy) in Stamp::new(dims, x, y, radius).cells() {
            pair.source_mut()[dims.index(cx, cy)] = amount;
            covered += 1;
        }
        Ok(covered)
    }

    /// Stamp a velocity impulse into the velocity source buffers.
    ///
    /// `radius: None` selects [`default_velocity_radius`](Self::default_velocity_radius).
    ///
    /// # Errors
    ///
    /// [`InjectError::NonFinite`] for a NaN or infinite component.
    pub fn inject_velocity(
        &mut self,
        x: f32,
        y: f32,
        radius: Option<f32>,
        vx: f32,
        vy: f32,
    ) -> Result<usize, InjectError> {
        check_finite("velocity x", vx)?;
        check_finite("velocity y", vy)?;
        let stamp = Stamp::new(self.dims, x, y, radius.unwrap_or(self.default_velocity_radius()));
        let mut covered = 0;
        for (cx, cy) in stamp.cells() {
            let k = self.dims.index(cx, cy);
            self.u.source_mut()[k] = vx;
            self.v.source_mut()[k] = vy;
            covered += 1;
        }
        Ok(covered)
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Advance the simulation by one frame.
    ///
    /// Consumes and clears all source buffers. Non-finite cells found at
    /// any stage boundary are reset to zero and counted in the returned
    /// metrics; the frame always completes.
    pub fn step(&mut self) -> StepMetrics {
        let step_start = Instant::now();
        let mut faults = self.contain_inputs();

        let velocity_start = Instant::now();
        faults += self.velocity_step();
        let velocity_us = velocity_start.elapsed().as_micros() as u64;

        let scalar_start = Instant::now();
        faults += self.scalar_step();
        let scalar_us = scalar_start.elapsed().as_micros() as u64;

        self.clear_sources();
        self.frame += 1;
        self.faults_total += faults as u64;

        if faults > 0 {
            log::warn!(
                "swirl: frame {}: reset {} non-finite cell(s) to zero",
                self.frame,
                faults
            );
        }

        let metrics = StepMetrics {
            frame: self.frame,
            total_us: step_start.elapsed().as_micros() as u64,
            velocity_us,
            scalar_us,
            faults_reset: faults.min(u32::MAX as usize) as u32,
        };
        log::trace!(
            "swirl: frame {} took {}us (velocity {}us, scalars {}us)",
            metrics.frame,
            metrics.total_us,
            metrics.velocity_us,
            metrics.scalar_us,
        );
        metrics
    }

    /// Fade every channel by its configured decay, then clamp.
    ///
    /// Call after the frame has been read.
    pub fn decay(&mut self) {
        for ((_, def), pair) in self.channels.iter().zip(self.scalars.iter_mut()) {
            fade(def, pair.current_mut());
        }
    }

    /// Scan both buffers of every pair before any solver stage reads them.
    fn contain_inputs(&mut self) -> usize {
        let mut faults = 0;
        for pair in [&mut self.u, &mut self.v]
            .into_iter()
            .chain(self.scalars.iter_mut())
        {
            let (current, source) = pair.split_mut();
            faults += sanitize(current) + sanitize(source);
        }
        faults
    }

    /// Diffuse, project, self-advect, project.
    fn velocity_step(&mut self) -> usize {
        let dims = self.dims;
        let dt = self.dt;
        let iterations = self.solver.iterations;
        let u = &mut self.u;
        let v = &mut self.v;
        let mut faults = 0;

        for pair in [&mut *u, &mut *v] {
            let (current, source) = pair.split_mut();
            add_source(current, source, dt);
        }

        u.swap();
        {
            let (current, previous) = u.split_mut();
            diffuse(
                dims,
                BoundaryKind::HorizontalVelocity,
                current,
                previous,
                self.viscosity,
                dt,
                iterations,
            );
        }
        v.swap();
        {
            let (current, previous) = v.split_mut();
            diffuse(
                dims,
                BoundaryKind::VerticalVelocity,
                current,
                previous,
                self.viscosity,
                dt,
                iterations,
            );
        }
        faults += sanitize(u.current_mut()) + sanitize(v.current_mut());

        {
            let (uc, pressure) = u.split_mut();
            let (vc, div) = v.split_mut();
            project(dims, uc, vc, pressure, div, iterations);
        }
        faults += sanitize(u.current_mut()) + sanitize(v.current_mut());

        u.swap();
        v.swap();
        {
            let (uc, u0) = u.split_mut();
            let (vc, v0) = v.split_mut();
            {
                let (u0, v0) = (&*u0, &*v0);
                advect(
                    dims,
                    BoundaryKind::HorizontalVelocity,
                    uc,
                    u0,
                    u0,
                    v0,
                    dt,
                    self.solver.advection,
                );
                advect(
                    dims,
                    BoundaryKind::VerticalVelocity,
                    vc,
                    v0,
                    u0,
                    v0,
                    dt,
                    self.solver.advection,
                );
            }
            faults += sanitize(uc) + sanitize(vc);
            project(dims, uc, vc, u0, v0, iterations);
            faults += sanitize(uc) + sanitize(vc);
        }
        faults
    }

    /// Add source, diffuse, and advect every channel through the shared velocity.
    fn scalar_step(&mut self) -> usize {
        let dims = self.dims;
        let dt = self.dt;
        let u = self.u.current();
        let v = self.v.current();
        let mut faults = 0;

        for pair in self.scalars.iter_mut() {
            {
                let (current, source) = pair.split_mut();
                add_source(current, source, dt);
            }
            pair.swap();
            {
                let (current, previous) = pair.split_mut();
                diffuse(
                    dims,
                    BoundaryKind::Scalar,
                    current,
                    previous,
                    self.diffusion,
                    dt,
                    self.solver.iterations,
                );
                faults += sanitize(current);
            }
            pair.swap();
            {
                let (current, previous) = pair.split_mut();
                advect(
                    dims,
                    BoundaryKind::Scalar,
                    current,
                    previous,
                    u,
                    v,
                    dt,
                    self.solver.advection,
                );
                faults += sanitize(current);
            }
        }
        faults
    }

    fn clear_sources(&mut self) {
        self.u.clear_source();
        self.v.clear_source();
        for pair in &mut self.scalars {
            pair.clear_source();
        }
    }

    // ── Read API ────────────────────────────────────────────────

    /// Current values of a channel.
    pub fn channel(&self, id: ChannelId) -> Option<FieldView<'_>> {
        self.scalars.get(id.index()).map(FieldPair::view)
    }

    /// Current values of the channel called `name`.
    pub fn channel_by_name(&self, name: &str) -> Option<FieldView<'_>> {
        self.channels.id_of(name).and_then(|id| self.channel(id))
    }

    /// Definition of a channel.
    pub fn channel_def(&self, id: ChannelId) -> Option<&ChannelDef> {
        self.channels.get(id)
    }

    /// Current velocity components `(u, v)`.
    pub fn velocity(&self) -> (FieldView<'_>, FieldView<'_>) {
        (self.u.view(), self.v.view())
    }
}

fn check_finite(what: &'static str, value: f32) -> Result<(), InjectError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InjectError::NonFinite { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swirl_core::ChannelDef;
    use swirl_solver::max_abs_divergence;

    fn density_grid(w: u32, h: u32, diffusion: f32) -> FluidGrid {
        FluidGrid::new(FluidConfig::new(w, h, diffusion, 0.0, 1.0)).unwrap()
    }

    #[test]
    fn new_grid_is_zeroed() {
        let grid = FluidGrid::new(FluidConfig::rgb(8, 6)).unwrap();
        assert_eq!(grid.channels().len(), 3);
        for (id, _) in grid.channels().iter() {
            let view = grid.channel(id).unwrap();
            assert_eq!(view.as_slice().len(), 10 * 8);
            assert!(view.as_slice().iter().all(|&v| v == 0.0));
        }
        let (u, v) = grid.velocity();
        assert!(u.as_slice().iter().chain(v.as_slice()).all(|&x| x == 0.0));
        assert_eq!(grid.frames(), 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let err = FluidGrid::new(FluidConfig::new(4, 4, 0.0, -1.0, 1.0)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRate { name: "viscosity", .. }));
    }

    #[test]
    fn point_injection_then_add_source_adds_exactly_once() {
        let mut grid = density_grid(9, 9, 0.0);
        assert_eq!(grid.inject_scalar(4.0, 5.0, Some(0.0), &[7.5]).unwrap(), 1);
        let dims = grid.dims;
        let pair = &mut grid.scalars[0];
        pair.current_mut()[dims.index(2, 2)] = 1.0;
        let before = pair.current().to_vec();
        let (current, source) = pair.split_mut();
        add_source(current, source, 1.0);
        for (k, (&after, &prior)) in pair.current().iter().zip(&before).enumerate() {
            if k == dims.index(4, 5) {
                assert_eq!(after, prior + 7.5);
            } else {
                assert_eq!(after, prior);
            }
        }
    }

    #[test]
    fn injection_validates_inputs() {
        let mut grid = FluidGrid::new(FluidConfig::rgb(10, 10)).unwrap();
        assert_eq!(
            grid.inject_scalar(5.0, 5.0, None, &[1.0]),
            Err(InjectError::ChannelCountMismatch {
                expected: 3,
                got: 1
            })
        );
        assert!(matches!(
            grid.inject_scalar(5.0, 5.0, None, &[1.0, f32::NAN, 0.0]),
            Err(InjectError::NonFinite { .. })
        ));
        assert!(matches!(
            grid.inject_velocity(5.0, 5.0, None, f32::INFINITY, 0.0),
            Err(InjectError::NonFinite { what: "velocity x", .. })
        ));
        assert_eq!(
            grid.inject_channel(ChannelId(3), 5.0, 5.0, None, 1.0),
            Err(InjectError::UnknownChannel {
                channel: ChannelId(3)
            })
        );
        assert!(grid.scalars.iter().all(|p| p.source().iter().all(|&v| v == 0.0)));
    }

    #[test]
    fn injection_overwrites_within_a_frame() {
        let mut grid = density_grid(10, 10, 0.0);
        grid.inject_scalar(5.0, 5.0, Some(0.0), &[3.0]).unwrap();
        grid.inject_scalar(5.0, 5.0, Some(0.0), &[2.0]).unwrap();
        assert_eq!(grid.scalars[0].source()[grid.dims.index(5, 5)], 2.0);
    }

    #[test]
    fn extreme_injection_coordinates_are_clipped() {
        let mut grid = density_grid(5, 5, 0.0);
        assert_eq!(grid.inject_scalar(-1e30, 3.0, Some(1e30), &[1.0]).unwrap(), 0);
        // The circle's rim reaches back across the whole interior.
        assert_eq!(grid.inject_velocity(1e20, 3.0, Some(1e20), 1.0, 0.0).unwrap(), 25);
        assert_eq!(grid.inject_scalar(3.0, 3.0, Some(1e30), &[1.0]).unwrap(), 25);
    }

    #[test]
    fn inject_channel_touches_one_channel() {
        let mut grid = FluidGrid::new(FluidConfig::rgb(10, 10)).unwrap();
        let green = grid.channels().id_of("green").unwrap();
        let covered = grid.inject_channel(green, 5.0, 5.0, Some(1.0), 9.0).unwrap();
        assert_eq!(covered, 5);
        let k = grid.dims.index(5, 5);
        assert_eq!(grid.scalars[1].source()[k], 9.0);
        assert_eq!(grid.scalars[0].source()[k], 0.0);
        assert_eq!(grid.scalars[2].source()[k], 0.0);
    }

    #[test]
    fn step_clears_sources_and_counts_frames() {
        let mut grid = density_grid(8, 8, 0.001);
        grid.inject_scalar(4.0, 4.0, Some(1.0), &[10.0]).unwrap();
        grid.inject_velocity(4.0, 4.0, Some(1.0), 0.1, -0.1).unwrap();
        let m = grid.step();
        assert_eq!(m.frame, 1);
        assert_eq!(m.faults_reset, 0);
        assert_eq!(grid.frames(), 1);
        assert!(grid.u.source().iter().all(|&x| x == 0.0));
        assert!(grid.v.source().iter().all(|&x| x == 0.0));
        assert!(grid.scalars[0].source().iter().all(|&x| x == 0.0));
        assert!(grid.channel(ChannelId(0)).unwrap().interior_sum() > 0.0);
    }

    #[test]
    fn velocity_step_projects_impulse() {
        let mut grid = density_grid(5, 5, 0.1);
        grid.inject_velocity(3.0, 3.0, Some(0.0), 1.0, 0.0).unwrap();
        let dims = grid.dims;
        let mut u0 = vec![0.0; dims.len()];
        u0[dims.index(3, 3)] = 1.0;
        let unprojected = max_abs_divergence(dims, &u0, &vec![0.0; dims.len()]);
        grid.step();
        let (u, v) = grid.velocity();
        assert!(u.interior_max_abs() > 0.0);
        let projected = max_abs_divergence(dims, u.as_slice(), v.as_slice());
        assert!(projected < unprojected, "{projected} >= {unprojected}");
    }

    #[test]
    fn planted_nan_is_contained() {
        let mut grid = density_grid(8, 8, 0.0001);
        let dims = grid.dims;
        grid.inject_scalar(4.0, 4.0, Some(2.0), &[5.0]).unwrap();
        grid.u.current_mut()[dims.index(3, 3)] = f32::NAN;
        grid.scalars[0].current_mut()[dims.index(6, 6)] = f32::INFINITY;
        let m = grid.step();
        assert_eq!(m.faults_reset, 2);
        assert_eq!(grid.faults_total(), 2);
        let (u, v) = grid.velocity();
        assert!(u.as_slice().iter().chain(v.as_slice()).all(|x| x.is_finite()));
        let density = grid.channel(ChannelId(0)).unwrap();
        assert!(density.as_slice().iter().all(|x| x.is_finite()));
        assert!(density.interior_sum() > 0.0);

        let m = grid.step();
        assert_eq!(m.faults_reset, 0);
        assert_eq!(grid.faults_total(), 2);
    }

    #[test]
    fn decay_respects_channel_policy() {
        let config = FluidConfig::new(4, 4, 0.0, 0.0, 1.0).with_channels(vec![
            ChannelDef::new("free").with_decay(1.0),
            ChannelDef::ink("ink").with_decay(1.0),
        ]);
        let mut grid = FluidGrid::new(config).unwrap();
        grid.inject_scalar(2.0, 2.0, Some(0.0), &[1.5, 1.5]).unwrap();
        grid.step();
        grid.decay();
        let k = grid.dims.index(2, 2);
        let free = grid.channel(ChannelId(0)).unwrap();
        let ink = grid.channel(ChannelId(1)).unwrap();
        assert_eq!(free.as_slice()[k], 0.5);
        assert_eq!(ink.as_slice()[k], 0.5);
        assert_eq!(free.as_slice()[grid.dims.index(1, 1)], -1.0);
        assert_eq!(ink.as_slice()[grid.dims.index(1, 1)], 0.0);
    }

    #[test]
    fn read_by_name() {
        let grid = FluidGrid::new(FluidConfig::rgb(4, 4)).unwrap();
        assert!(grid.channel_by_name("blue").is_some());
        assert!(grid.channel_by_name("alpha").is_none());
        assert!(grid.channel(ChannelId(3)).is_none());
        assert_eq!(grid.channel_def(ChannelId(0)).unwrap().name, "red");
    }
}
