//! Board and field model.
//!
//! - [`Field`]: closed set of field kinds with their static attributes
//! - [`Property`]: the one field kind with mutable state (its owner)
//! - [`Board`]: fixed ring of fields with modulo indexing

mod field;
mod layout;

pub use field::{Field, Property};
pub use layout::{Board, REFERENCE_BAIL, REFERENCE_BOARD_SIZE};
