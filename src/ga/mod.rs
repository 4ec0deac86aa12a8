//! Genetic algorithm for flexible job-shop scheduling.
//!
//! The encoding is a machine-assignment genome: one machine index per
//! operation, grouped into per-job blocks ([`Chromosome`]). Fitness is the
//! makespan of the schedule obtained by simulating the genome (see
//! [`crate::sim`]); lower is better. Selection is k-way tournament,
//! crossover swaps whole-job tails at a single cut point, and mutation
//! reassigns one operation to a random machine. Each generation replaces
//! the previous one wholesale.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, operator rates, tournament size, seed
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best chromosome, canonical timetable, makespan history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Cheng, Gen & Tsujimura (1996), *A tutorial survey of job-shop
//!   scheduling problems using genetic algorithms*
//! - Pezzella, Morganti & Ciaschetti (2008), *A genetic algorithm for the
//!   flexible job-shop scheduling problem*

mod chromosome;
mod config;
mod runner;
mod selection;

pub use chromosome::{machine_mutation, single_point_crossover, Chromosome, JobAssignment};
pub use config::{ConfigError, GaConfig};
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
