//! Deterministic makespan simulation.
//!
//! Decodes a chromosome into a concrete schedule by replaying its job
//! blocks against per-machine and per-job availability clocks. Pure
//! function of its inputs: no randomness, no mutation, same inputs always
//! produce the same timetable.
//!
//! Jobs are committed one block at a time in genome order: all operations
//! of a job are placed before the next block is considered. This is greedy
//! list scheduling over the genome's job order, not a global interleaving,
//! so reordering blocks can change the makespan.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2

use std::collections::HashMap;

use crate::ga::Chromosome;
use crate::models::{Instance, Timetable, TimetableEntry};

/// Outcome of simulating one chromosome.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Time at which the last machine goes idle.
    pub makespan: f64,
    /// One entry per operation, in commit order.
    pub timetable: Timetable,
}

/// Simulates a chromosome against its instance.
///
/// Every operation starts at the later of its job's ready time and its
/// machine's free time, runs for the machine-dependent duration, and
/// advances both clocks to its completion. Runs in O(total operations).
///
/// # Panics
/// Panics if the chromosome references jobs or operations missing from the
/// instance, if a block is shorter than its job's operation sequence, or
/// if a machine index is out of range. Such genomes never come out of the
/// encoder; this is a contract violation, not an input error.
pub fn simulate(instance: &Instance, chromosome: &Chromosome) -> SimulationResult {
    let operations: HashMap<&str, _> = instance
        .operations
        .iter()
        .map(|op| (op.id.as_str(), op))
        .collect();
    let jobs: HashMap<&str, _> = instance
        .jobs
        .iter()
        .map(|job| (job.id.as_str(), job))
        .collect();

    let mut machine_free = vec![0.0f64; instance.machine_count()];
    let mut entries = Vec::with_capacity(instance.total_operations());

    for block in &chromosome.jobs {
        let job = jobs
            .get(block.job_id.as_str())
            .expect("chromosome references a job missing from the instance");

        let mut job_ready = 0.0f64;
        for (slot, op_id) in job.operations.iter().enumerate() {
            let operation = operations
                .get(op_id.as_str())
                .expect("job references an operation missing from the instance");
            let machine = block.machines[slot];

            let start = job_ready.max(machine_free[machine]);
            let end = start + operation.durations[machine];
            entries.push(TimetableEntry {
                job_id: job.id.clone(),
                operation_id: operation.id.clone(),
                machine,
                start,
                end,
            });

            job_ready = end;
            machine_free[machine] = end;
        }
    }

    let makespan = machine_free.iter().copied().fold(0.0, f64::max);
    SimulationResult {
        makespan,
        timetable: Timetable { entries },
    }
}
