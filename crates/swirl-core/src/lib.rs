//! Core types and errors for the swirl fluid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: grid
//! dimensions and the ghost-bordered index layout, boundary kinds, scalar
//! channel definitions, and the error enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod channel;
pub mod dims;
pub mod error;

pub use boundary::BoundaryKind;
pub use channel::{ChannelDef, ChannelId, ChannelSet};
pub use dims::GridDims;
pub use error::{ConfigError, InjectError};
