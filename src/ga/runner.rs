//! Evolutionary loop execution.
//!
//! [`GaRunner`] drives the complete process: random initialization →
//! evaluation → tournament selection → crossover → mutation → wholesale
//! replacement, for a fixed number of generations, followed by a final
//! re-evaluation that picks the returned best.
//!
//! There is no elitism: the new generation replaces the old one entirely,
//! so the per-generation best can regress. The returned best is the best
//! of the *final* population, not a hall-of-fame best.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::chromosome::{machine_mutation, single_point_crossover, Chromosome};
use super::config::{ConfigError, GaConfig};
use super::selection::tournament;
use crate::models::{Instance, Timetable};
use crate::sim::simulate;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the final population (earliest index on ties).
    pub best: Chromosome,

    /// Makespan of `best`.
    pub best_makespan: f64,

    /// Canonical schedule of `best`, produced by one extra simulation.
    pub timetable: Timetable,

    /// Number of generations executed.
    pub generations: usize,

    /// Best makespan of each generation's population, plus a final entry
    /// for the returned best: `generations + 1` values in total. Without
    /// elitism this sequence is not monotone.
    pub makespan_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// ```
/// use u_jobshop::ga::{GaConfig, GaRunner};
/// use u_jobshop::models::Instance;
///
/// let instance = Instance::sample();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
///
/// assert_eq!(result.timetable.entries.len(), instance.total_operations());
/// assert!(result.best_makespan > 0.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA on the given instance.
    ///
    /// One seeded ChaCha8 stream drives all randomness, so a `Some` seed
    /// makes the whole run reproducible. Returns a [`ConfigError`] when the
    /// configuration fails validation, or when crossover is attempted on an
    /// instance with fewer than two jobs.
    pub fn run(instance: &Instance, config: &GaConfig) -> Result<GaResult, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(instance, &mut rng))
            .collect();

        let mut makespan_history = Vec::with_capacity(config.generations + 1);

        for _ in 0..config.generations {
            let makespans = evaluate_population(instance, &population, config.parallel);
            makespan_history.push(population_best(&makespans).1);

            let mut next_gen = Vec::with_capacity(config.population_size);
            for _ in 0..config.population_size / 2 {
                let p1 = tournament(&makespans, config.tournament_size, &mut rng);
                let p2 = tournament(&makespans, config.tournament_size, &mut rng);

                let (mut child1, mut child2) =
                    if rng.random_range(0.0..1.0) < config.crossover_rate {
                        single_point_crossover(&population[p1], &population[p2], &mut rng)?
                    } else {
                        (population[p1].clone(), population[p2].clone())
                    };

                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    machine_mutation(&mut child1, instance, &mut rng);
                }
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    machine_mutation(&mut child2, instance, &mut rng);
                }

                next_gen.push(child1);
                next_gen.push(child2);
            }
            population = next_gen;
        }

        // Final re-evaluation: the winner comes from the last population.
        let makespans = evaluate_population(instance, &population, config.parallel);
        let (best_idx, best_makespan) = population_best(&makespans);
        makespan_history.push(best_makespan);

        let best = population.swap_remove(best_idx);
        let timetable = simulate(instance, &best).timetable;

        Ok(GaResult {
            best,
            best_makespan,
            timetable,
            generations: config.generations,
            makespan_history,
        })
    }
}

/// Evaluates every chromosome, returning makespans parallel to the
/// population. Simulation is free of randomness, so the parallel path
/// yields exactly the sequential result.
#[cfg(feature = "parallel")]
fn evaluate_population(instance: &Instance, population: &[Chromosome], parallel: bool) -> Vec<f64> {
    if parallel {
        population
            .par_iter()
            .map(|ch| simulate(instance, ch).makespan)
            .collect()
    } else {
        population
            .iter()
            .map(|ch| simulate(instance, ch).makespan)
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population(
    instance: &Instance,
    population: &[Chromosome],
    _parallel: bool,
) -> Vec<f64> {
    population
        .iter()
        .map(|ch| simulate(instance, ch).makespan)
        .collect()
}

/// Index and makespan of the population's best individual (lowest
/// makespan, earliest index on ties).
fn population_best(makespans: &[f64]) -> (usize, f64) {
    let mut best = 0;
    for (idx, &makespan) in makespans.iter().enumerate().skip(1) {
        if makespan < makespans[best] {
            best = idx;
        }
    }
    (best, makespans[best])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Operation};

    /// Longest job's completion time when every operation runs on its
    /// fastest machine with no waiting: a lower bound on any makespan.
    fn fastest_completion_bound(instance: &Instance) -> f64 {
        instance
            .jobs
            .iter()
            .map(|job| {
                job.operations
                    .iter()
                    .map(|op_id| {
                        instance
                            .operation(op_id)
                            .unwrap()
                            .durations
                            .iter()
                            .copied()
                            .fold(f64::INFINITY, f64::min)
                    })
                    .sum::<f64>()
            })
            .fold(0.0, f64::max)
    }

    fn single_job_instance() -> Instance {
        Instance::new(
            vec![Operation::new("O1", vec![1.0, 2.0])],
            vec![Job::new("j1", ["O1"])],
        )
    }

    #[test]
    fn test_end_to_end_on_sample_instance() {
        let instance = Instance::sample();
        let config = GaConfig::default().with_seed(42);

        let result = GaRunner::run(&instance, &config).unwrap();

        assert_eq!(result.timetable.entries.len(), 19);
        assert!(result.best.is_valid(&instance));
        assert!(
            result.best_makespan >= fastest_completion_bound(&instance) - 1e-9,
            "makespan {} below the lower bound",
            result.best_makespan
        );
        assert!((result.timetable.makespan() - result.best_makespan).abs() < 1e-9);
        assert_eq!(result.generations, 100);
        assert_eq!(result.makespan_history.len(), 101);
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let instance = Instance::sample();
        let config = GaConfig::default().with_generations(30).with_seed(7);

        let first = GaRunner::run(&instance, &config).unwrap();
        let second = GaRunner::run(&instance, &config).unwrap();

        assert_eq!(first.best, second.best);
        assert_eq!(first.best_makespan, second.best_makespan);
        assert_eq!(first.timetable, second.timetable);
        assert_eq!(first.makespan_history, second.makespan_history);
    }

    #[test]
    fn test_history_can_regress_without_elitism() {
        // Wholesale replacement keeps no elites, so the per-generation
        // best is expected to get worse somewhere across these runs.
        let instance = Instance::sample();
        let mut regressed = false;
        for seed in 0..40 {
            let config = GaConfig::default()
                .with_population_size(10)
                .with_generations(30)
                .with_seed(seed);
            let result = GaRunner::run(&instance, &config).unwrap();
            if result
                .makespan_history
                .windows(2)
                .any(|pair| pair[1] > pair[0] + 1e-9)
            {
                regressed = true;
                break;
            }
        }
        assert!(regressed, "no regression in 40 runs; replacement should keep no elites");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let instance = Instance::sample();

        let odd = GaConfig::default().with_population_size(7);
        assert!(matches!(
            GaRunner::run(&instance, &odd),
            Err(ConfigError::InvalidPopulationSize(7))
        ));

        let oversized = GaConfig::default()
            .with_population_size(4)
            .with_tournament_size(5);
        assert!(matches!(
            GaRunner::run(&instance, &oversized),
            Err(ConfigError::InvalidTournamentSize { .. })
        ));
    }

    #[test]
    fn test_single_job_crossover_error_propagates() {
        let instance = single_job_instance();
        let config = GaConfig::default()
            .with_population_size(2)
            .with_generations(1)
            .with_crossover_rate(1.0)
            .with_seed(1);

        assert!(matches!(
            GaRunner::run(&instance, &config),
            Err(ConfigError::TooFewJobs(1))
        ));
    }

    #[test]
    fn test_single_job_runs_without_crossover() {
        let instance = single_job_instance();
        let config = GaConfig::default()
            .with_population_size(2)
            .with_generations(20)
            .with_crossover_rate(0.0)
            .with_seed(1);

        let result = GaRunner::run(&instance, &config).unwrap();

        assert_eq!(result.timetable.entries.len(), 1);
        let entry = &result.timetable.entries[0];
        assert_eq!(entry.start, 0.0);
        assert!((entry.end - result.best_makespan).abs() < 1e-9);
        assert!(
            (result.best_makespan - 1.0).abs() < 1e-9
                || (result.best_makespan - 2.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_larger_tournament_still_converges() {
        let instance = Instance::sample();
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(60)
            .with_tournament_size(5)
            .with_seed(3);

        let result = GaRunner::run(&instance, &config).unwrap();
        assert!(result.best.is_valid(&instance));
        assert!(result.best_makespan >= fastest_completion_bound(&instance) - 1e-9);
    }

    #[test]
    fn test_search_improves_on_first_generation() {
        // Not guaranteed in principle, but with 100 generations on the
        // sample instance the final best reliably beats the random start.
        let instance = Instance::sample();
        let config = GaConfig::default().with_seed(42);

        let result = GaRunner::run(&instance, &config).unwrap();
        let initial_best = result.makespan_history[0];
        assert!(
            result.best_makespan <= initial_best,
            "final best {} worse than initial {}",
            result.best_makespan,
            initial_best
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let instance = Instance::sample();
        let config = GaConfig::default().with_generations(20).with_seed(11);

        let sequential = GaRunner::run(&instance, &config.clone().with_parallel(false)).unwrap();
        let parallel = GaRunner::run(&instance, &config.with_parallel(true)).unwrap();

        assert_eq!(sequential.best, parallel.best);
        assert_eq!(sequential.makespan_history, parallel.makespan_history);
        assert_eq!(sequential.timetable, parallel.timetable);
    }
}
