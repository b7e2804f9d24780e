//! Genetic Algorithm for the eight-queens problem.
//!
//! Each candidate is a [`Board`]: the row of the queen in each of the eight
//! columns. Fitness is the number of attacking queen pairs, so the search
//! minimizes and a fitness of zero is a solution.
//!
//! # Key Types
//!
//! - [`Board`]: A validated eight-column placement
//! - [`GaConfig`]: Algorithm parameters (generations, population, tournament, elitism)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final board with per-generation statistics
//!
//! # Operators
//!
//! - [`evaluate`]: attack count of a board
//! - [`tournament`] / [`sample_tournament`]: best-of-sample selection
//! - [`crossover`]: single-point recombination
//! - [`mutate`]: probabilistic single-gene reassignment
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{FillPolicy, GaConfig};
pub use fitness::{attack_count, evaluate};
pub use operators::{crossover, mutate, single_point_crossover};
pub use runner::{run_ga, GaResult, GaRunner, GenerationStats};
pub use selection::{sample_tournament, tournament};
pub use types::{Board, Fitness, BOARD_SIZE, MAX_ROW, MIN_ROW, WORST_FITNESS};
