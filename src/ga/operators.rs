//! Recombination and mutation operators for queen boards.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: generic cut-and-swap over equal-length slices
//! - [`crossover`]: the same operation on [`Board`]s
//!
//! # Mutation Operators
//!
//! - [`mutate`]: with probability `m`, reassign one random column to a
//!   random row — O(1)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::{random_row, Board, BOARD_SIZE};
use crate::error::{GaError, Result};
use crate::random::RandomSource;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover on two equal-length gene slices.
///
/// Returns `(p1[..index] ++ p2[index..], p2[..index] ++ p1[index..])`.
/// `index == 0` swaps the parents, `index == len` returns them unchanged.
///
/// # Errors
/// [`GaError::InvalidArgument`] if the parents differ in length or
/// `index > len`.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn single_point_crossover<T: Clone>(
    parent1: &[T],
    parent2: &[T],
    index: usize,
) -> Result<(Vec<T>, Vec<T>)> {
    let n = parent1.len();
    if n != parent2.len() {
        return Err(GaError::invalid(format!(
            "parents must have equal length, got {n} and {}",
            parent2.len()
        )));
    }
    if index > n {
        return Err(GaError::invalid(format!(
            "crossover index {index} is outside 0..={n}"
        )));
    }

    let child1 = parent1[..index]
        .iter()
        .chain(&parent2[index..])
        .cloned()
        .collect();
    let child2 = parent2[..index]
        .iter()
        .chain(&parent1[index..])
        .cloned()
        .collect();
    Ok((child1, child2))
}

/// Single-point crossover of two boards at `index` (0..=8).
///
/// The order of the two children carries no meaning; the first child
/// starts with `parent1`'s genes.
///
/// ```
/// use queens_evo::ga::{crossover, Board};
///
/// let p1 = Board::new([2, 4, 7, 4, 8, 5, 5, 2]).unwrap();
/// let p2 = Board::new([3, 2, 7, 5, 2, 4, 1, 1]).unwrap();
/// let (c1, c2) = crossover(&p1, &p2, 3).unwrap();
/// assert_eq!(c1.genes(), &[2, 4, 7, 5, 2, 4, 1, 1]);
/// assert_eq!(c2.genes(), &[3, 2, 7, 4, 8, 5, 5, 2]);
/// ```
///
/// # Errors
/// [`GaError::InvalidArgument`] if `index > 8`.
pub fn crossover(parent1: &Board, parent2: &Board, index: usize) -> Result<(Board, Board)> {
    if index > BOARD_SIZE {
        return Err(GaError::invalid(format!(
            "crossover index {index} is outside 0..={BOARD_SIZE}"
        )));
    }

    let (a, b) = (parent1.genes(), parent2.genes());
    let mut child1 = *a;
    let mut child2 = *b;
    child1[index..].copy_from_slice(&b[index..]);
    child2[index..].copy_from_slice(&a[index..]);
    Ok((
        Board::from_genes_unchecked(child1),
        Board::from_genes_unchecked(child2),
    ))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Point mutation applied with probability `m`.
///
/// Draws a unit real; if it is below `m`, draws a column in `0..8` and then
/// a row in `1..=8`, and returns a copy with that column reassigned.
/// Otherwise returns an unchanged copy. The new row may equal the old one.
///
/// `m == 0.0` never mutates and `m == 1.0` always does.
///
/// # Errors
/// [`GaError::InvalidArgument`] if `m` is not in `[0, 1]`.
pub fn mutate<R: RandomSource + ?Sized>(board: &Board, m: f64, rng: &mut R) -> Result<Board> {
    check_probability(m)?;

    if rng.unit() >= m {
        return Ok(*board);
    }

    let column = rng.below(BOARD_SIZE);
    let row = random_row(rng);
    let mut genes = *board.genes();
    genes[column] = row;
    Ok(Board::from_genes_unchecked(genes))
}

pub(crate) fn check_probability(m: f64) -> Result<()> {
    if (0.0..=1.0).contains(&m) {
        Ok(())
    } else {
        Err(GaError::invalid(format!(
            "mutation probability must be in [0, 1], got {m}"
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================
