//! Swirl: real-time 2-D stable-fluids simulation for interactive ink effects.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! swirl sub-crates. For most users, adding `swirl` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use swirl::prelude::*;
//!
//! // A 64×64 red/green/blue canvas.
//! let mut grid = FluidGrid::new(FluidConfig::rgb(64, 64)).unwrap();
//! let jets = TwinJets::blue_red();
//!
//! for _ in 0..10 {
//!     jets.emit(&mut grid).unwrap();
//!     let metrics = grid.step();
//!     assert_eq!(metrics.faults_reset, 0);
//!
//!     // Render here: views borrow the grid until the next step.
//!     let blue = grid.channel_by_name("blue").unwrap();
//!     assert!(blue.interior_max_abs() > 0.0);
//!
//!     grid.decay();
//! }
//! assert_eq!(grid.frames(), 10);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `swirl-core` | Dimensions, channels, boundary kinds, errors |
//! | [`field`] | `swirl-field` | Field pairs, views, the boundary enforcer |
//! | [`solver`] | `swirl-solver` | Numerical kernels and solver settings |
//! | [`engine`] | `swirl-engine` | The fluid grid, stamps, palettes, brushes, jets |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`swirl-core`).
///
/// Grid dimensions, channel definitions, boundary kinds, and the
/// [`types::ConfigError`] / [`types::InjectError`] enums.
pub use swirl_core as types;

/// Ghost-bordered field storage (`swirl-field`).
pub use swirl_field as field;

/// Stable-fluids kernels (`swirl-solver`).
///
/// Useful on their own for offline experiments; [`engine::FluidGrid`]
/// composes them into frames.
pub use swirl_solver as solver;

/// The frame-stepped fluid grid and its injection helpers (`swirl-engine`).
pub use swirl_engine as engine;

/// Common imports for typical swirl usage.
///
/// ```rust
/// use swirl::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use swirl_core::{BoundaryKind, ChannelDef, ChannelId, GridDims};

    // Errors
    pub use swirl_core::{ConfigError, InjectError};

    // Fields
    pub use swirl_field::FieldView;

    // Solver
    pub use swirl_solver::{AdvectionScaling, SolverSettings};

    // Engine
    pub use swirl_engine::{Brush, FluidConfig, FluidGrid, Palette, StepMetrics, TwinJets};
}
