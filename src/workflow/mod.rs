//! Pure domain logic for the room phase workflow. Nothing in this module touches
//! the database or the network; services call into it and persist the outcome.

pub mod assignment;
pub mod due;
pub mod machine;
pub mod phases;

pub use due::{DueStatus, classify_due};
pub use machine::{StageAction, TransitionError, TransitionOutcome, apply};
pub use phases::{PhaseDescriptor, descriptor, next_phase, ordered_phases};
