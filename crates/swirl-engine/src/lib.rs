//! Frame-stepped stable-fluids grid.
//!
//! [`FluidGrid`] owns the velocity field and every scalar channel, accepts
//! circular source stamps between frames, and advances the simulation one
//! frame per [`step()`](FluidGrid::step).
//!
//! # Frame contract
//!
//! The host drives the cadence:
//!
//! 1. inject ink and velocity (`inject_*`, or a [`Brush`] / [`TwinJets`])
//! 2. [`step()`](FluidGrid::step)
//! 3. read [`channel()`](FluidGrid::channel) / [`velocity()`](FluidGrid::velocity) views
//! 4. [`decay()`](FluidGrid::decay)
//!
//! No threads, timers, or statics are involved; independent grids never
//! share state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod brush;
pub mod config;
mod decay;
pub mod grid;
pub mod jets;
pub mod metrics;
pub mod palette;
pub mod stamp;

pub use brush::Brush;
pub use config::FluidConfig;
pub use grid::FluidGrid;
pub use jets::TwinJets;
pub use metrics::StepMetrics;
pub use palette::Palette;
pub use stamp::Stamp;
