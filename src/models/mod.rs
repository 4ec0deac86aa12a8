//! Domain models for flexible job-shop scheduling.
//!
//! [`Instance`] describes the problem: an operation table with per-machine
//! durations and a list of jobs, each an ordered operation sequence.
//! [`Timetable`] describes a solution: one placed entry per operation.
//!
//! All types serialize with serde, so instances and schedules round-trip
//! through JSON; loading files is left to the caller.

mod instance;
mod timetable;

pub use instance::{Instance, Job, Operation};
pub use timetable::{Timetable, TimetableEntry};
