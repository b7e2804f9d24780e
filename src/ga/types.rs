//! Core value types for the eight-queens GA.
//!
//! A [`Board`] is one candidate solution: the row of the queen in each of
//! the eight columns. Boards are small `Copy` values, so operators take one
//! and hand back a new one instead of editing shared state.

use super::fitness::attack_count;
use crate::error::{GaError, Result};
use crate::random::RandomSource;
use std::fmt;

/// Number of columns (and rows) on the board.
pub const BOARD_SIZE: usize = 8;

/// Lowest valid row value.
pub const MIN_ROW: u8 = 1;

/// Highest valid row value.
pub const MAX_ROW: u8 = 8;

/// Number of attacking queen pairs. Lower is better; `0` is a solution.
pub type Fitness = u32;

/// Worst possible fitness: every one of the 28 pairs attacks.
pub const WORST_FITNESS: Fitness = (BOARD_SIZE * (BOARD_SIZE - 1) / 2) as Fitness;

/// A placement of eight queens, one per column.
///
/// `genes()[c]` is the row (1..=8) of the queen in column `c`. Both the
/// length and the value range are enforced at construction.
///
/// # Examples
///
/// ```
/// use queens_evo::ga::Board;
///
/// let board = Board::new([2, 2, 4, 8, 1, 6, 3, 4]).unwrap();
/// assert_eq!(board.fitness(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Board([u8; BOARD_SIZE]);

impl Board {
    /// Creates a board, checking that every row is in `1..=8`.
    pub fn new(genes: [u8; BOARD_SIZE]) -> Result<Self> {
        if let Some((col, &row)) = genes
            .iter()
            .enumerate()
            .find(|(_, &row)| !(MIN_ROW..=MAX_ROW).contains(&row))
        {
            return Err(GaError::invalid(format!(
                "row {row} in column {col} is outside {MIN_ROW}..={MAX_ROW}"
            )));
        }
        Ok(Self(genes))
    }

    /// Creates a board from a slice, checking length and row range.
    pub fn from_slice(genes: &[u8]) -> Result<Self> {
        let array: [u8; BOARD_SIZE] = genes.try_into().map_err(|_| {
            GaError::invalid(format!(
                "board must have exactly {BOARD_SIZE} genes, got {}",
                genes.len()
            ))
        })?;
        Self::new(array)
    }

    /// Draws a board with every row i.i.d. uniform in `1..=8`.
    ///
    /// Rows are drawn in column order.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut genes = [MIN_ROW; BOARD_SIZE];
        for gene in genes.iter_mut() {
            *gene = random_row(rng);
        }
        Self(genes)
    }

    /// The row of each column's queen.
    pub fn genes(&self) -> &[u8; BOARD_SIZE] {
        &self.0
    }

    /// Number of attacking queen pairs on this board.
    pub fn fitness(&self) -> Fitness {
        attack_count(&self.0)
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.fitness() == 0
    }

    /// A copy of this board with one column's row replaced.
    pub fn with_row(&self, column: usize, row: u8) -> Result<Self> {
        if column >= BOARD_SIZE {
            return Err(GaError::invalid(format!(
                "column {column} is outside 0..{BOARD_SIZE}"
            )));
        }
        let mut genes = self.0;
        genes[column] = row;
        Self::new(genes)
    }

    /// The board with its columns in reverse order.
    pub fn reversed(&self) -> Self {
        let mut genes = self.0;
        genes.reverse();
        Self(genes)
    }

    /// The board reflected top to bottom (row `r` becomes `9 - r`).
    pub fn mirrored(&self) -> Self {
        Self(self.0.map(|row| MIN_ROW + MAX_ROW - row))
    }

    pub(crate) fn from_genes_unchecked(genes: [u8; BOARD_SIZE]) -> Self {
        debug_assert!(genes.iter().all(|r| (MIN_ROW..=MAX_ROW).contains(r)));
        Self(genes)
    }
}

pub(crate) fn random_row<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    rng.between(MIN_ROW as usize, MAX_ROW as usize) as u8
}

impl TryFrom<&[u8]> for Board {
    type Error = GaError;

    fn try_from(genes: &[u8]) -> Result<Self> {
        Self::from_slice(genes)
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = GaError;

    fn try_from(genes: Vec<u8>) -> Result<Self> {
        Self::from_slice(&genes)
    }
}

impl From<Board> for Vec<u8> {
    fn from(board: Board) -> Self {
        board.0.to_vec()
    }
}

impl AsRef<[u8]> for Board {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}
