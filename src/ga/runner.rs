//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → tournament selection → crossover → mutation → repeat.
//!
//! The loop is strictly sequential. Every random draw goes through one
//! injected [`RandomSource`] in a fixed order, so a seed fully determines a
//! run:
//!
//! 1. initial population: 8 rows per board, board by board;
//! 2. per offspring pair: sample for parent 1, sample for parent 2, cut
//!    index, mutation of child 1, mutation of child 2.

use super::config::GaConfig;
use super::operators::{crossover, mutate};
use super::selection::{sample_tournament, tournament};
use super::types::{Board, Fitness, BOARD_SIZE};
use crate::error::Result;
use crate::random::{create_rng, fresh_seed, RandomSource};
use tracing::instrument;

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Tournament winner over the final population.
    pub best: Board,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Number of generations executed. Always equals the configured count.
    pub generations: usize,

    /// Best-of-population fitness, starting with the initial population.
    ///
    /// Has `generations + 1` entries.
    pub fitness_history: Vec<Fitness>,

    /// Seed the run's generator was built from, when the runner built it.
    pub seed: Option<u64>,
}

/// Snapshot handed to the per-generation observer.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// 1-based index of the generation that just completed.
    pub generation: usize,

    /// Best board of the new population.
    pub best: Board,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Mean fitness of the new population.
    pub mean_fitness: f64,
}

impl GenerationStats {
    fn from_population(generation: usize, population: &[Board]) -> Result<Self> {
        let best = tournament(population)?;
        let total: u64 = population.iter().map(|b| u64::from(b.fitness())).sum();
        Ok(Self {
            generation,
            best,
            best_fitness: best.fitness(),
            mean_fitness: total as f64 / population.len() as f64,
        })
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use queens_evo::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_generations(20).with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.fitness_history.len(), 21);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a ChaCha8 generator seeded from `config.seed`, or
    /// from a fresh random seed when it is `None`.
    ///
    /// # Errors
    /// [`GaError::InvalidArgument`](crate::GaError::InvalidArgument) if the
    /// configuration is invalid.
    pub fn run(config: &GaConfig) -> Result<GaResult> {
        let seed = config.seed.unwrap_or_else(fresh_seed);
        let mut rng = create_rng(seed);
        let mut result = Self::run_with_rng(config, &mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs the GA drawing from an injected random source.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: RandomSource + ?Sized>(
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        Self::run_with_observer(config, rng, |_| {})
    }

    /// Runs the GA, calling `observer` once after every generation.
    ///
    /// The observer does not see generation 0 (the initial population);
    /// its best fitness is `fitness_history[0]` of the result.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            generations = config.generations,
            population_size = config.population_size,
            tournament_size = config.tournament_size,
            mutation_rate = config.mutation_rate,
            elitism = config.elitism
        )
    )]
    pub fn run_with_observer<R, F>(
        config: &GaConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<GaResult>
    where
        R: RandomSource + ?Sized,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;
        tracing::info!("Starting GA run");

        // 1. Initialize population
        let mut population = initial_population(config.population_size, rng);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(tournament(&population)?.fitness());

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            population = next_generation(&population, config, rng)?;

            let stats = GenerationStats::from_population(gen + 1, &population)?;
            tracing::debug!(
                generation = stats.generation,
                best_fitness = stats.best_fitness,
                mean_fitness = stats.mean_fitness,
                "Generation complete"
            );
            fitness_history.push(stats.best_fitness);
            observer(&stats);
        }

        // 3. Final answer
        let best = tournament(&population)?;
        tracing::info!(best = %best, best_fitness = best.fitness(), "GA run finished");

        Ok(GaResult {
            best,
            best_fitness: best.fitness(),
            generations: config.generations,
            fitness_history,
            seed: None,
        })
    }

    /// Runs one independent GA per seed across the rayon thread pool.
    ///
    /// Each run owns its generator, so every entry equals what
    /// [`run`](Self::run) returns for `config.with_seed(seed)`. Results are
    /// in the same order as `seeds`.
    #[cfg(feature = "parallel")]
    pub fn run_seeds(config: &GaConfig, seeds: &[u64]) -> Result<Vec<GaResult>> {
        use rayon::prelude::*;

        config.validate()?;
        seeds
            .par_iter()
            .map(|&seed| Self::run(&config.clone().with_seed(seed)))
            .collect()
    }
}

/// Runs the GA with the five classic parameters and returns the best board
/// of the final population.
///
/// `g` generations, population `n`, tournament size `k`, mutation rate `m`,
/// elitism `e`.
pub fn run_ga<R: RandomSource + ?Sized>(
    g: usize,
    n: usize,
    k: usize,
    m: f64,
    e: bool,
    rng: &mut R,
) -> Result<Board> {
    let config = GaConfig::new(g, n, k, m, e);
    GaRunner::run_with_rng(&config, rng).map(|result| result.best)
}

/// `n` boards with i.i.d. uniform rows.
fn initial_population<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> Vec<Board> {
    (0..n).map(|_| Board::random(rng)).collect()
}

/// Builds the population that replaces `population`.
///
/// The elite (if enabled) comes first, followed by offspring in creation
/// order. When the last pair would overshoot, its second child is dropped.
fn next_generation<R: RandomSource + ?Sized>(
    population: &[Board],
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Board>> {
    let n = config.population_size;
    let mut next_gen = Vec::with_capacity(n);

    // Elite preservation
    if config.elitism {
        next_gen.push(tournament(population)?);
    }

    // Generate offspring
    while next_gen.len() < n {
        let parent1 = sample_tournament(population, config.tournament_size, rng)?;
        let parent2 = sample_tournament(population, config.tournament_size, rng)?;

        let cut = rng.between(0, BOARD_SIZE);
        let (child1, child2) = crossover(&parent1, &parent2, cut)?;

        let child1 = mutate(&child1, config.mutation_rate, rng)?;
        let child2 = mutate(&child2, config.mutation_rate, rng)?;

        next_gen.push(child1);
        if next_gen.len() < n {
            next_gen.push(child2);
        }
    }

    Ok(next_gen)
}

// ============================================================================
// Tests
// ============================================================================
