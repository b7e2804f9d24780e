//! Tournament selection.
//!
//! A tournament picks the fittest (lowest attack count) board out of a set
//! of participants. The engine feeds it a random sample of the population to
//! choose parents, and the whole population to pick the elite and the final
//! answer.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Board;
use crate::error::{GaError, Result};
use crate::random::RandomSource;

/// Returns the participant with the lowest fitness.
///
/// Ties are broken in favour of the first minimal participant in slice
/// order. That order is an implementation detail; callers should only rely
/// on the returned board having minimal fitness.
///
/// # Errors
/// [`GaError::InvalidArgument`] if `participants` is empty.
///
/// # Complexity
/// O(k) fitness evaluations for `k` participants.
pub fn tournament(participants: &[Board]) -> Result<Board> {
    participants
        .iter()
        .min_by_key(|board| board.fitness())
        .copied()
        .ok_or_else(|| GaError::invalid("cannot run a tournament with no participants"))
}

/// Draws `k` distinct members of `population` and returns the tournament
/// winner among them.
///
/// Sampling is without replacement within one call; separate calls sample
/// independently from the full population.
///
/// # Errors
/// [`GaError::InvalidArgument`] if `k == 0` or `k > population.len()`.
pub fn sample_tournament<R: RandomSource + ?Sized>(
    population: &[Board],
    k: usize,
    rng: &mut R,
) -> Result<Board> {
    if k == 0 {
        return Err(GaError::invalid("tournament size must be at least 1"));
    }
    if k > population.len() {
        return Err(GaError::invalid(format!(
            "tournament size {k} exceeds population size {}",
            population.len()
        )));
    }

    let participants: Vec<Board> = rng
        .sample_indices(population.len(), k)
        .into_iter()
        .map(|idx| population[idx])
        .collect();
    tournament(&participants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn board(genes: [u8; 8]) -> Board {
        Board::new(genes).unwrap()
    }

    fn make_population() -> Vec<Board> {
        vec![
            board([3, 3, 3, 3, 3, 3, 3, 3]), // 28
            board([2, 2, 4, 8, 1, 6, 3, 4]), // 10
            board([1, 5, 8, 6, 3, 7, 2, 4]), // 0
            board([2, 4, 7, 4, 8, 5, 5, 2]), // 4
        ]
    }

    #[test]
    fn test_tournament_picks_minimum() {
        let pop = make_population();
        let winner = tournament(&pop).unwrap();
        assert_eq!(winner, pop[2]);
        assert_eq!(winner.fitness(), 0);
    }

    #[test]
    fn test_tournament_single_participant() {
        let pop = vec![board([2, 2, 4, 8, 1, 6, 3, 4])];
        assert_eq!(tournament(&pop).unwrap(), pop[0]);
    }

    #[test]
    fn test_tournament_tie_returns_minimal_member() {
        let a = board([2, 2, 4, 8, 1, 6, 3, 4]);
        let b = a.reversed();
        let pop = vec![board([3; 8]), a, b];
        let winner = tournament(&pop).unwrap();
        assert!(winner == a || winner == b);
        assert_eq!(winner.fitness(), 10);
    }

    #[test]
    fn test_tournament_empty_is_error() {
        let err = tournament(&[]).unwrap_err();
        assert!(matches!(err, GaError::InvalidArgument(_)));
    }

    #[test]
    fn test_sample_tournament_full_sample_is_best() {
        let pop = make_population();
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let winner = sample_tournament(&pop, pop.len(), &mut rng).unwrap();
            assert_eq!(winner.fitness(), 0);
        }
    }

    #[test]
    fn test_sample_tournament_size_one_is_random() {
        let pop = make_population();
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            let winner = sample_tournament(&pop, 1, &mut rng).unwrap();
            let idx = pop.iter().position(|b| *b == winner).unwrap();
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_sample_tournament_favors_best() {
        let pop = make_population();
        let mut rng = create_rng(7);
        let mut best_wins = 0;
        let n = 10_000;
        for _ in 0..n {
            if sample_tournament(&pop, 2, &mut rng).unwrap().fitness() == 0 {
                best_wins += 1;
            }
        }
        // The best board is in 3 of the 6 possible pairs.
        assert!(
            best_wins > 4000,
            "expected best to win about half the time, got {best_wins}/{n}"
        );
    }

    #[test]
    fn test_sample_tournament_rejects_bad_size() {
        let pop = make_population();
        let mut rng = create_rng(42);
        assert!(sample_tournament(&pop, 0, &mut rng).is_err());
        assert!(sample_tournament(&pop, 5, &mut rng).is_err());
        assert!(sample_tournament(&[], 1, &mut rng).is_err());
    }
}
