//! Flexible job-shop scheduling by genetic algorithm.
//!
//! Jobs are ordered sequences of operations, and every operation can run
//! on any machine of the shop with a machine-dependent duration. A genetic
//! algorithm searches over machine assignments to minimize makespan:
//! chromosomes carry one machine index per operation, fitness comes from a
//! deterministic schedule simulation, and evolution uses tournament
//! selection, single-point crossover over job blocks, and single-slot
//! machine mutation with wholesale generational replacement.
//!
//! # Quick Start
//!
//! ```
//! use u_jobshop::ga::{GaConfig, GaRunner};
//! use u_jobshop::models::Instance;
//! use u_jobshop::report::format_timetable;
//!
//! let instance = Instance::sample();
//! let config = GaConfig::default().with_seed(42);
//! let result = GaRunner::run(&instance, &config).unwrap();
//!
//! println!("makespan: {:.2}", result.best_makespan);
//! println!("{}", format_timetable(&result.timetable));
//! ```
//!
//! # Modules
//!
//! - [`models`]: problem instances and timetables (serde-ready)
//! - [`ga`]: chromosome encoding, configuration, evolutionary loop
//! - [`sim`]: deterministic makespan simulation
//! - [`validation`]: structural instance checks
//! - [`report`]: plain-text schedule tables

pub mod ga;
pub mod models;
pub mod report;
pub mod sim;
pub mod validation;
