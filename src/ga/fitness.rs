//! Queen-conflict fitness.
//!
//! Two queens in columns `i < j` attack when they share a row or a
//! diagonal, i.e. when `|x[i] - x[j]|` is `0` or `j - i`. Columns never
//! conflict because each column holds exactly one queen.

use super::types::{Board, Fitness};

/// Counts attacking queen pairs in an arbitrary gene slice.
///
/// Values are only compared, never range-checked, so this works for raw
/// data that has not been turned into a [`Board`]. For `n` columns the
/// result lies in `0..=n*(n-1)/2`.
///
/// # Complexity
/// O(n²) pair scan.
pub fn attack_count<T: Copy + Into<i64>>(genes: &[T]) -> Fitness {
    let mut attacks = 0;
    for (i, &first) in genes.iter().enumerate() {
        let first = i128::from(first.into());
        for (j, &second) in genes.iter().enumerate().skip(i + 1) {
            let second = i128::from(second.into());
            let distance = (j - i) as i128;
            if first == second || first == second - distance || first == second + distance {
                attacks += 1;
            }
        }
    }
    attacks
}

/// Fitness of a board: the number of attacking queen pairs.
pub fn evaluate(board: &Board) -> Fitness {
    attack_count(board.genes())
}
