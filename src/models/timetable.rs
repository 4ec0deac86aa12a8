//! Schedule output model.
//!
//! A [`Timetable`] is the simulator's output: one entry per executed
//! operation, in the order the simulator committed them. It is produced,
//! never edited; all methods are read-only queries.

use serde::{Deserialize, Serialize};

/// One scheduled operation: which job ran which operation, where and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Id of the job this operation belongs to.
    pub job_id: String,
    /// Id of the executed operation.
    pub operation_id: String,
    /// Machine index in `0..machine_count`.
    pub machine: usize,
    /// Start time.
    pub start: f64,
    /// Completion time.
    pub end: f64,
}

impl TimetableEntry {
    /// Processing time of this entry.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A complete schedule for one chromosome.
///
/// Entries appear in simulator commit order: job blocks in genome order,
/// operations within a block in the job's precedence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Scheduled operations in commit order.
    pub entries: Vec<TimetableEntry>,
}

impl Timetable {
    /// Latest completion time across all entries (0.0 when empty).
    pub fn makespan(&self) -> f64 {
        self.entries.iter().map(|e| e.end).fold(0.0, f64::max)
    }

    /// Entries of one job, in precedence order.
    pub fn entries_for_job(&self, job_id: &str) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.job_id == job_id).collect()
    }

    /// Entries placed on one machine, in commit order (which is also
    /// ascending start order for a single machine).
    pub fn entries_for_machine(&self, machine: usize) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.machine == machine).collect()
    }

    /// Total processing time placed on one machine.
    pub fn machine_busy_time(&self, machine: usize) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.machine == machine)
            .map(|e| e.duration())
            .sum()
    }

    /// Busy time of one machine as a fraction of the makespan
    /// (0.0 for an empty timetable).
    pub fn machine_utilization(&self, machine: usize) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0.0 {
            return 0.0;
        }
        self.machine_busy_time(machine) / makespan
    }
}
