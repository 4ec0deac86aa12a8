//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop;
//! [`ConfigError`] is the error type for structurally impossible setups.

use std::error::Error;
use std::fmt;

/// Error for configurations or operator inputs the engine cannot run with.
///
/// Raised synchronously: [`GaConfig::validate`] returns the first violated
/// rule before any evolution starts, and the runner propagates these as
/// `Result` values rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Population size is zero or odd; children are produced in pairs and
    /// replace the population wholesale.
    InvalidPopulationSize(usize),
    /// Generation count is zero.
    ZeroGenerations,
    /// Tournament size outside `2..=population_size`.
    InvalidTournamentSize {
        /// Requested tournament size.
        size: usize,
        /// Configured population size.
        population: usize,
    },
    /// Crossover needs at least two job blocks to cut between.
    TooFewJobs(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPopulationSize(n) => {
                write!(f, "population_size must be positive and even, got {n}")
            }
            ConfigError::ZeroGenerations => write!(f, "generations must be at least 1"),
            ConfigError::InvalidTournamentSize { size, population } => write!(
                f,
                "tournament_size must be between 2 and the population size ({population}), got {size}"
            ),
            ConfigError::TooFewJobs(n) => {
                write!(f, "crossover requires at least 2 jobs, got {n}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Configuration for the job-shop GA.
///
/// # Defaults
///
/// ```
/// use u_jobshop::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_jobshop::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_tournament_size(3)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Must be positive and even: every breeding round contributes a pair
    /// of children, and the new generation replaces the old one wholesale.
    pub population_size: usize,

    /// Number of generations to run.
    ///
    /// The loop always runs to completion; there is no early termination.
    pub generations: usize,

    /// Probability of crossing a selected pair (0.0–1.0).
    ///
    /// When crossover is skipped, both parents pass through as clones.
    pub crossover_rate: f64,

    /// Probability of mutating a child (0.0–1.0), applied independently to
    /// each of the two children of a round.
    pub mutation_rate: f64,

    /// Contenders per tournament. Must satisfy `2 <= k <= population_size`.
    ///
    /// Higher values increase selection pressure.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from entropy; `Some` makes the whole run a pure
    /// function of instance and configuration.
    pub seed: Option<u64>,

    /// Whether to evaluate the population in parallel with rayon.
    ///
    /// Takes effect only with the `parallel` feature enabled. Evaluation
    /// consumes no randomness, so results are identical either way.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            tournament_size: 2,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated rule; rates need no checking because the
    /// builders clamp them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.tournament_size < 2 || self.tournament_size > self.population_size {
            return Err(ConfigError::InvalidTournamentSize {
                size: self.tournament_size,
                population: self.population_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 100);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.tournament_size, 2);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_generations(200)
            .with_crossover_rate(0.7)
            .with_mutation_rate(0.05)
            .with_tournament_size(4)
            .with_seed(42)
            .with_parallel(true);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 200);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.tournament_size, 4);
        assert_eq!(config.seed, Some(42));
        assert!(config.parallel);
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(1.5)
            .with_mutation_rate(-0.5);

        assert!((config.crossover_rate - 1.0).abs() < 1e-10);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_odd_population() {
        let config = GaConfig::default().with_population_size(7);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPopulationSize(7))
        );
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPopulationSize(0))
        );
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_tournament_too_small() {
        let config = GaConfig::default().with_tournament_size(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTournamentSize {
                size: 1,
                population: 20
            })
        );
    }

    #[test]
    fn test_validate_tournament_exceeds_population() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_tournament_size(11);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTournamentSize {
                size: 11,
                population: 10
            })
        );
    }

    #[test]
    fn test_tournament_equal_to_population_is_ok() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_tournament_size(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidTournamentSize {
            size: 9,
            population: 4,
        };
        let text = err.to_string();
        assert!(text.contains('9'));
        assert!(text.contains('4'));

        assert!(ConfigError::TooFewJobs(1).to_string().contains("at least 2"));
    }
}
