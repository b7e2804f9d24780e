//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::operators::check_probability;
use crate::error::{GaError, Result};

/// How the next population is reconciled when offspring, produced two at a
/// time, would overshoot the population size by one.
///
/// This happens for odd `population_size` without elitism, and for even
/// `population_size` with elitism (the elite takes one slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillPolicy {
    /// Keep the first child of the last pair and drop the second.
    ///
    /// Both children are still mutated before the drop, so the sequence of
    /// random draws does not depend on the population size's parity.
    #[default]
    Truncate,

    /// Reject configurations that would overshoot during validation.
    RequireEven,
}

/// Configuration for the eight-queens GA.
///
/// # Defaults
///
/// ```
/// use queens_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_evo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_tournament_size(4)
///     .with_mutation_rate(0.2)
///     .with_elitism(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of generations to run. The loop always runs exactly this
    /// many, even after a solution appears. `0` returns the best board of
    /// the initial population.
    pub generations: usize,

    /// Number of boards in every population. Must be at least 1.
    pub population_size: usize,

    /// Number of boards drawn (without replacement) for each tournament.
    ///
    /// Must be in `1..=population_size`. Larger values mean stronger
    /// selection pressure; `population_size` always picks the current best.
    pub tournament_size: usize,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether the best board of each generation survives unmodified.
    pub elitism: bool,

    /// How to handle a population size that the offspring pairs overshoot.
    pub fill_policy: FillPolicy,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 40,
            tournament_size: 3,
            mutation_rate: 0.3,
            elitism: true,
            fill_policy: FillPolicy::Truncate,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Creates a configuration from the five classic GA parameters.
    pub fn new(
        generations: usize,
        population_size: usize,
        tournament_size: usize,
        mutation_rate: f64,
        elitism: bool,
    ) -> Self {
        Self {
            generations,
            population_size,
            tournament_size,
            mutation_rate,
            elitism,
            ..Self::default()
        }
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the fill policy.
    pub fn with_fill_policy(mut self, policy: FillPolicy) -> Self {
        self.fill_policy = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Small demonstration run: 5 generations of 6 boards, tournaments over
    /// the whole population, mutation rate 0.8, no elitism.
    pub fn demo() -> Self {
        Self::new(5, 6, 6, 0.8, false)
    }

    /// Whether offspring pairs would overshoot `population_size` by one.
    pub fn overshoots(&self) -> bool {
        let slots = self.population_size - usize::from(self.elitism).min(self.population_size);
        slots % 2 == 1
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::InvalidArgument`] naming the first violated precondition.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::invalid("population_size must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(GaError::invalid("tournament_size must be at least 1"));
        }
        if self.tournament_size > self.population_size {
            return Err(GaError::invalid(format!(
                "tournament_size {} exceeds population_size {}",
                self.tournament_size, self.population_size
            )));
        }
        check_probability(self.mutation_rate)?;
        if self.fill_policy == FillPolicy::RequireEven && self.overshoots() {
            return Err(GaError::invalid(format!(
                "population_size {} cannot be filled by offspring pairs (elitism: {})",
                self.population_size, self.elitism
            )));
        }
        Ok(())
    }
}
