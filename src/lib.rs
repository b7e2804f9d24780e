//! Genetic algorithm for the eight-queens problem.
//!
//! Provides:
//!
//! - **Genetic Algorithm (GA)**: tournament selection, single-point
//!   crossover, point mutation and an optional elitist generational loop
//!   over eight-column queen placements.
//! - **Regression**: univariate linear regression fitted by batch gradient
//!   descent.
//!
//! # Randomness
//!
//! Nothing in this crate touches a global generator. Stochastic operations
//! take a `&mut impl RandomSource`; every [`rand::Rng`] qualifies, and
//! [`random::create_rng`] builds the seeded generator used by
//! [`ga::GaRunner::run`].
//!
//! # Logging
//!
//! Progress is emitted through [`tracing`]: `info` at the start and end of a
//! run, `debug` once per generation. Install any subscriber to see it.

pub mod error;
pub mod ga;
pub mod random;
pub mod regression;

pub use error::{GaError, Result};
