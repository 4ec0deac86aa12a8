//! Problem instance model.
//!
//! A flexible job-shop instance: a table of operations, each executable on
//! any machine of the shop with a machine-dependent duration, and a list of
//! jobs, each an ordered sequence of operations.
//!
//! # Reference
//! Brandimarte (1993), "Routing and scheduling in a flexible job shop by
//! tabu search"

use serde::{Deserialize, Serialize};

/// An operation that can run on any machine of the shop.
///
/// `durations[m]` is the processing time on machine `m`. Every operation of
/// an instance carries a table of the same length (the machine count).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Unique operation identifier.
    pub id: String,
    /// Processing time per machine, indexed by machine.
    pub durations: Vec<f64>,
}

impl Operation {
    /// Creates an operation with its per-machine duration table.
    pub fn new(id: impl Into<String>, durations: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            durations,
        }
    }
}

/// A job: an ordered sequence of operations.
///
/// Operations run strictly in the declared order; `operations[i]` must
/// finish before `operations[i + 1]` can start. The same operation id may
/// appear in several jobs (each job runs its own copy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Operation ids in precedence order.
    pub operations: Vec<String>,
}

impl Job {
    /// Creates a job from its operation sequence.
    pub fn new(id: impl Into<String>, operations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            operations: operations.into_iter().map(Into::into).collect(),
        }
    }
}

/// A flexible job-shop problem instance.
///
/// Job order is meaningful: chromosomes are created with their job blocks
/// in instance order, and the simulator commits blocks in genome order, so
/// the declared order is the deterministic baseline every run starts from.
///
/// ```
/// use u_jobshop::models::Instance;
///
/// let instance = Instance::sample();
/// assert_eq!(instance.machine_count(), 4);
/// assert_eq!(instance.jobs.len(), 6);
/// assert_eq!(instance.total_operations(), 19);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// Operation table.
    pub operations: Vec<Operation>,
    /// Jobs in creation order.
    pub jobs: Vec<Job>,
}

impl Instance {
    /// Creates an instance from an operation table and a job list.
    pub fn new(operations: Vec<Operation>, jobs: Vec<Job>) -> Self {
        Self { operations, jobs }
    }

    /// Number of machines, derived from the duration table of the first
    /// operation (0 when there are no operations).
    ///
    /// Assumes a well-formed instance where every operation carries a table
    /// of the same length; check with
    /// [`validate_instance`](crate::validation::validate_instance).
    pub fn machine_count(&self) -> usize {
        self.operations.first().map_or(0, |op| op.durations.len())
    }

    /// Looks up an operation by id.
    pub fn operation(&self, id: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.id == id)
    }

    /// Looks up a job by id.
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Total number of operations across all jobs: the number of entries a
    /// full simulation produces.
    pub fn total_operations(&self) -> usize {
        self.jobs.iter().map(|job| job.operations.len()).sum()
    }

    /// Built-in demonstration instance: five operations on four machines,
    /// six jobs, 19 operations in total.
    ///
    /// Useful for tests, benchmarks, and first experiments with the GA.
    pub fn sample() -> Self {
        let operations = vec![
            Operation::new("O1", vec![3.5, 6.7, 2.5, 8.2]),
            Operation::new("O2", vec![5.5, 4.2, 7.6, 9.0]),
            Operation::new("O3", vec![6.1, 7.3, 5.5, 6.7]),
            Operation::new("O4", vec![4.8, 5.3, 3.8, 4.7]),
            Operation::new("O5", vec![3.8, 3.4, 4.2, 3.6]),
        ];
        let jobs = vec![
            Job::new("j1", ["O2", "O4", "O5"]),
            Job::new("j2", ["O1", "O3", "O5"]),
            Job::new("j3", ["O1", "O2", "O3", "O4", "O5"]),
            Job::new("j4", ["O4", "O5"]),
            Job::new("j5", ["O2", "O4"]),
            Job::new("j6", ["O1", "O2", "O4", "O5"]),
        ];
        Self::new(operations, jobs)
    }
}
