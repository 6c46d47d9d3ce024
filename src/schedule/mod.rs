//! Turn order.
//!
//! [`Rotation`] is the ring of remaining players; [`Scheduler`] walks it,
//! removing anyone who ends their turn with negative cash.

mod rotation;
mod scheduler;

pub use rotation::Rotation;
pub use scheduler::{Advance, Scheduler};
