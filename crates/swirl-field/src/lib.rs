//! Ghost-bordered field storage for the swirl fluid solver.
//!
//! - [`FieldPair`]: a current/source buffer pair whose roles swap by
//!   flipping a slot index, never by copying.
//! - [`FieldView`]: a read-only borrow of one buffer for rendering and
//!   inspection.
//! - [`set_wall`]: the boundary enforcer that derives every ghost cell
//!   from the interior.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod pair;
pub mod view;

pub use boundary::set_wall;
pub use pair::FieldPair;
pub use view::FieldView;
