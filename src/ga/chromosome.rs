//! Machine-assignment chromosome.
//!
//! A chromosome assigns one machine to every operation of every job. The
//! genome is a list of per-job blocks; block order is itself part of the
//! genome because the simulator commits blocks in genome order. Creation
//! lays blocks out in instance job order and the operators below never
//! reorder them, so all evolved genomes share that order, but any order is
//! a legal genome.
//!
//! # Reference
//! Cheng, Gen & Tsujimura (1996), "A tutorial survey of job-shop scheduling
//! problems using genetic algorithms, part I: representation"

use std::collections::HashSet;

use rand::Rng;

use super::config::ConfigError;
use crate::models::Instance;

/// Machine assignments for one job: `machines[i]` runs the job's i-th
/// operation.
#[derive(Debug, Clone, PartialEq)]
pub struct JobAssignment {
    /// Id of the job this block belongs to.
    pub job_id: String,
    /// One machine index per operation, in the job's precedence order.
    pub machines: Vec<usize>,
}

/// A candidate solution: one machine-assignment block per job.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    /// Job blocks. Order matters to the simulator.
    pub jobs: Vec<JobAssignment>,
}

impl Chromosome {
    /// Creates a random chromosome: blocks in instance job order, every
    /// machine drawn uniformly from `0..machine_count`.
    pub fn random<R: Rng>(instance: &Instance, rng: &mut R) -> Self {
        let machine_count = instance.machine_count();
        let jobs = instance
            .jobs
            .iter()
            .map(|job| JobAssignment {
                job_id: job.id.clone(),
                machines: (0..job.operations.len())
                    .map(|_| rng.random_range(0..machine_count))
                    .collect(),
            })
            .collect();
        Self { jobs }
    }

    /// Checks the chromosome against its instance: every instance job
    /// appears exactly once, each block is as long as its job's operation
    /// sequence, and all machine indices are in range.
    pub fn is_valid(&self, instance: &Instance) -> bool {
        if self.jobs.len() != instance.jobs.len() {
            return false;
        }
        let machine_count = instance.machine_count();
        let mut seen: HashSet<&str> = HashSet::new();
        for block in &self.jobs {
            if !seen.insert(block.job_id.as_str()) {
                return false;
            }
            let job = match instance.job(&block.job_id) {
                Some(job) => job,
                None => return false,
            };
            if block.machines.len() != job.operations.len() {
                return false;
            }
            if block.machines.iter().any(|&m| m >= machine_count) {
                return false;
            }
        }
        true
    }
}

/// Single-point crossover over job blocks.
///
/// Draws a cut uniformly from `1..n` (n = number of blocks) and swaps the
/// whole-job tails between the parents, producing two children. Parents are
/// left unchanged. Every block survives intact, so the children conserve
/// the parents' block multiset.
///
/// With fewer than two blocks there is no interior cut and
/// [`ConfigError::TooFewJobs`] is returned.
pub fn single_point_crossover<R: Rng>(
    p1: &Chromosome,
    p2: &Chromosome,
    rng: &mut R,
) -> Result<(Chromosome, Chromosome), ConfigError> {
    let n = p1.jobs.len();
    if n < 2 {
        return Err(ConfigError::TooFewJobs(n));
    }
    let cut = rng.random_range(1..n);

    let mut first = Vec::with_capacity(n);
    first.extend_from_slice(&p1.jobs[..cut]);
    first.extend_from_slice(&p2.jobs[cut..]);

    let mut second = Vec::with_capacity(n);
    second.extend_from_slice(&p2.jobs[..cut]);
    second.extend_from_slice(&p1.jobs[cut..]);

    Ok((Chromosome { jobs: first }, Chromosome { jobs: second }))
}

/// Machine mutation: picks one block uniformly, one slot within it
/// uniformly, and redraws that slot's machine uniformly from
/// `0..machine_count`.
///
/// The redraw may land on the current machine, in which case the genome is
/// unchanged. No-op on empty genomes, empty blocks, and zero machines.
pub fn machine_mutation<R: Rng>(chromosome: &mut Chromosome, instance: &Instance, rng: &mut R) {
    if chromosome.jobs.is_empty() {
        return;
    }
    let machine_count = instance.machine_count();
    if machine_count == 0 {
        return;
    }
    let block = rng.random_range(0..chromosome.jobs.len());
    let machines = &mut chromosome.jobs[block].machines;
    if machines.is_empty() {
        return;
    }
    let slot = rng.random_range(0..machines.len());
    machines[slot] = rng.random_range(0..machine_count);
}
