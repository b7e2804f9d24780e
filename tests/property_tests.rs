//! Property-based tests for queens-evo
//!
//! Uses proptest to verify invariants of the GA operators and the runner.

use proptest::prelude::*;
use queens_evo::ga::{
    attack_count, crossover, evaluate, mutate, tournament, Board, GaConfig, GaRunner,
    BOARD_SIZE, MAX_ROW, MIN_ROW, WORST_FITNESS,
};
use queens_evo::random::create_rng;

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::array::uniform8(MIN_ROW..=MAX_ROW).prop_map(|genes| Board::new(genes).unwrap())
}

proptest! {
    // ==================== Fitness Properties ====================

    #[test]
    fn fitness_is_bounded(board in board_strategy()) {
        prop_assert!(evaluate(&board) <= WORST_FITNESS);
    }

    #[test]
    fn fitness_invariant_under_reversal(board in board_strategy()) {
        prop_assert_eq!(evaluate(&board.reversed()), evaluate(&board));
    }

    #[test]
    fn fitness_invariant_under_mirror(board in board_strategy()) {
        prop_assert_eq!(evaluate(&board.mirrored()), evaluate(&board));
    }

    #[test]
    fn attack_count_reversal_on_raw_values(genes in prop::collection::vec(-20i32..20, 0..12)) {
        let mut reversed = genes.clone();
        reversed.reverse();
        prop_assert_eq!(attack_count(&genes), attack_count(&reversed));
        let n = genes.len() as u32;
        prop_assert!(attack_count(&genes) <= n * n.saturating_sub(1) / 2);
    }

    // ==================== Crossover Properties ====================

    #[test]
    fn crossover_conserves_genes_per_column(
        p1 in board_strategy(),
        p2 in board_strategy(),
        index in 0usize..=BOARD_SIZE
    ) {
        let (c1, c2) = crossover(&p1, &p2, index).unwrap();
        for col in 0..BOARD_SIZE {
            let mut parents = [p1.genes()[col], p2.genes()[col]];
            let mut children = [c1.genes()[col], c2.genes()[col]];
            parents.sort_unstable();
            children.sort_unstable();
            prop_assert_eq!(parents, children);
        }
    }

    #[test]
    fn crossover_boundaries(p1 in board_strategy(), p2 in board_strategy()) {
        prop_assert_eq!(crossover(&p1, &p2, 0).unwrap(), (p2, p1));
        prop_assert_eq!(crossover(&p1, &p2, BOARD_SIZE).unwrap(), (p1, p2));
    }

    // ==================== Mutation Properties ====================

    #[test]
    fn mutate_zero_is_identity(board in board_strategy(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        prop_assert_eq!(mutate(&board, 0.0, &mut rng).unwrap(), board);
    }

    #[test]
    fn mutate_changes_at_most_one_column(board in board_strategy(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let mutated = mutate(&board, 1.0, &mut rng).unwrap();
        let changed = (0..BOARD_SIZE)
            .filter(|&i| board.genes()[i] != mutated.genes()[i])
            .count();
        prop_assert!(changed <= 1);
        prop_assert!(mutated.genes().iter().all(|r| (MIN_ROW..=MAX_ROW).contains(r)));
    }

    // ==================== Selection Properties ====================

    #[test]
    fn tournament_returns_a_minimal_member(
        boards in prop::collection::vec(board_strategy(), 1..20)
    ) {
        let winner = tournament(&boards).unwrap();
        let min = boards.iter().map(evaluate).min().unwrap();
        prop_assert!(boards.contains(&winner));
        prop_assert_eq!(evaluate(&winner), min);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // ==================== Runner Properties ====================

    #[test]
    fn zero_generations_repeat_for_a_seed(seed in any::<u64>()) {
        let config = GaConfig::demo().with_generations(0).with_seed(seed);
        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();
        prop_assert_eq!(a.best, b.best);
    }

    #[test]
    fn elitism_never_regresses(
        seed in any::<u64>(),
        population_size in 2usize..16,
        mutation_rate in 0.0f64..=1.0
    ) {
        let config = GaConfig::new(15, population_size, 2, mutation_rate, true).with_seed(seed);
        let result = GaRunner::run(&config).unwrap();
        for window in result.fitness_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn population_parity_does_not_matter(
        seed in any::<u64>(),
        population_size in 1usize..12,
        elitism in any::<bool>()
    ) {
        let config = GaConfig::new(3, population_size, 1, 0.5, elitism).with_seed(seed);
        let result = GaRunner::run(&config).unwrap();
        prop_assert_eq!(result.fitness_history.len(), 4);
        prop_assert!(result.best_fitness <= WORST_FITNESS);
    }
}
