//! Stable-fluids numerical kernels for the swirl fluid solver.
//!
//! Every kernel works on flat ghost-bordered `f32` slices described by a
//! [`GridDims`](swirl_core::GridDims) and leaves the ghost border of its
//! output freshly enforced.
//!
//! # Kernels
//!
//! | Kernel | Effect |
//! |--------|--------|
//! | [`add_source`] | `field += source * dt` |
//! | [`relax`] | in-place Gauss-Seidel sweeps of `x = (x0 + a·Σneighbours) / c` |
//! | [`diffuse`] | implicit diffusion on top of [`relax`] |
//! | [`advect`] | semi-Lagrangian transport with bilinear sampling |
//! | [`project`] | pressure solve removing velocity divergence |
//! | [`sanitize`] | reset non-finite cells to zero |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advect;
pub mod diffuse;
pub mod project;
pub mod relax;
pub mod sanitize;
pub mod settings;
pub mod source;

pub use advect::advect;
pub use diffuse::diffuse;
pub use project::{divergence, max_abs_divergence, project};
pub use relax::relax;
pub use sanitize::sanitize;
pub use settings::{AdvectionScaling, SolverSettings, INTERACTIVE_ITERATIONS, PRECISE_ITERATIONS};
pub use source::add_source;
