use kruskal_maze::{
    DirectionOptions, GenerationConfig, GenerationError, generate, generate_with_rng,
    generators::get_rng,
};
use proptest::prelude::*;

fn arb_satisfiable_options() -> impl Strategy<Value = DirectionOptions> {
    // Standard moves can always join two rooms, so they make any size satisfiable
    any::<bool>().prop_map(|enable_diagonal| DirectionOptions {
        enable_standard: true,
        enable_diagonal,
    })
}

/// Number of connected components, by flood fill over the adjacency lists.
fn component_count(result: &kruskal_maze::GenerationResult) -> usize {
    let mut seen = vec![false; result.total_nodes];
    let mut components = 0;
    for start in 0..result.total_nodes {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for next in result.adjacency_list(node) {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
    }
    components
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn satisfiable_runs_build_a_spanning_tree(
        size in 2u8..10,
        options in arb_satisfiable_options(),
        seed in any::<u64>(),
    ) {
        let config = GenerationConfig::new(size, options).with_seed(seed);
        let result = generate(config, None).unwrap();

        prop_assert_eq!(result.size, size);
        prop_assert_eq!(result.total_nodes, size as usize * size as usize);
        prop_assert!(result.graph.is_symmetric());
        prop_assert!(!result.graph.has_self_loops());
        prop_assert_eq!(component_count(&result), 1);
        // Every commit joins distinct rooms, so no edge is ever redundant
        prop_assert_eq!(result.graph.edge_count(), result.total_nodes - 1);
        prop_assert_eq!(result.degrees.total(), result.total_nodes);
        for node in 0..result.total_nodes {
            prop_assert!((1..=4).contains(&result.graph.degree(node)));
        }
        prop_assert!(result.total_passes > result.total_failed_passes);
    }

    #[test]
    fn same_seed_gives_identical_graph(
        size in 2u8..8,
        options in arb_satisfiable_options(),
        seed in any::<u64>(),
    ) {
        let config = GenerationConfig::new(size, options);
        let first = generate_with_rng(config, &mut get_rng(Some(seed)), None).unwrap();
        let second = generate_with_rng(config, &mut get_rng(Some(seed)), None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn diagonal_only_finishes_or_gives_up(size in 2u8..6, seed in any::<u64>()) {
        let options = DirectionOptions {
            enable_standard: false,
            enable_diagonal: true,
        };
        match generate(GenerationConfig::new(size, options).with_seed(seed), None) {
            Ok(result) => {
                prop_assert_eq!(component_count(&result), 1);
                prop_assert_eq!(result.graph.edge_count(), result.total_nodes - 1);
            }
            Err(GenerationError::ExhaustedRetries { fail_streak, rooms_left, partial, .. }) => {
                prop_assert_eq!(fail_streak, size as usize * size as usize * 10 + 1);
                prop_assert!(rooms_left > 1);
                prop_assert!(partial.is_symmetric());
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

#[test]
fn even_cell_count_cannot_finish_diagonal_only() {
    // Each diagonal commit removes two rooms, so an even room count never reaches one
    let options = DirectionOptions {
        enable_standard: false,
        enable_diagonal: true,
    };
    for seed in 0..5 {
        let outcome = generate(GenerationConfig::new(4, options).with_seed(seed), None);
        assert!(matches!(
            outcome,
            Err(GenerationError::ExhaustedRetries { .. })
        ));
    }
}
