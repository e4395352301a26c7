use std::collections::BTreeSet;

use fatgraph::algs::generate::{
    GenerationOptions, generate_all, generate_all_b, generate_all_b_with, generate_all_with,
};
use fatgraph::algs::matching::{all_perfect_matchings, double_factorial};
use fatgraph::fatgraph_error::FatgraphError;
use proptest::prelude::*;

#[test]
fn two_two_valent_vertices_split_once() {
    let graphs = generate_all(&[2, 2], 0).unwrap();
    assert_eq!(graphs.len(), 3);
    let split: Vec<_> = graphs
        .iter()
        .filter(|g| !g.is_connected().unwrap())
        .map(|g| g.to_string())
        .collect();
    assert_eq!(split, vec!["Fatgraph(vertices=[(1, 2), (3, 4)], edges=[(1, 2), (3, 4)])"]);
}

#[test]
fn two_trivalent_vertices() {
    let graphs = generate_all(&[3, 3], 0).unwrap();
    assert_eq!(graphs.len(), 15);
    let genera: BTreeSet<usize> = graphs.iter().map(|g| g.genus()).collect();
    assert_eq!(genera, BTreeSet::from([0, 1]));
    let tori = graphs.iter().filter(|g| g.genus() == 1).count();
    assert!(tori > 0);
}

#[test]
fn marked_point_with_odd_remainder() {
    // one excluded half-edge, then one more left out by the odd matching
    let graphs = generate_all(&[2, 2], 1).unwrap();
    assert_eq!(graphs.len(), 4 * 3);
    for g in &graphs {
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.unpaired().len(), 2);
    }
}

#[test]
fn generation_is_deterministic() {
    let a = generate_all_b(&[4, 2], 0).unwrap();
    let b = generate_all_b(&[4, 2], 0).unwrap();
    assert_eq!(a, b);
    assert!(a.iter().all(|g| g.is_valid()));
}

#[test]
fn beta_generation_respects_budget() {
    let opts = GenerationOptions::with_marked(0).budget(2);
    assert_eq!(
        generate_all_b_with(&[4], &opts).unwrap_err(),
        FatgraphError::BudgetExceeded { limit: 2 }
    );
    let unbounded = generate_all_b_with(&[4], &GenerationOptions::default()).unwrap();
    assert_eq!(unbounded, generate_all_b(&[4], 0).unwrap());
}

#[test]
fn options_round_trip_through_json() {
    let opts = GenerationOptions::with_marked(2).budget(1_000);
    let json = serde_json::to_string(&opts).unwrap();
    assert_eq!(json, r#"{"marked":2,"budget":1000}"#);
    let back: GenerationOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);
    let default: GenerationOptions = serde_json::from_str(r#"{"marked":0,"budget":null}"#).unwrap();
    assert_eq!(default, GenerationOptions::default());
}

#[test]
fn options_drive_plain_generation() {
    let via_opts = generate_all_with(&[3], &GenerationOptions::with_marked(1)).unwrap();
    assert_eq!(via_opts, generate_all(&[3], 1).unwrap());
}

proptest! {
    #[test]
    fn matching_counts_are_double_factorials(n in 0usize..10) {
        let labels: Vec<usize> = (0..n).collect();
        let count = all_perfect_matchings(labels).count() as u128;
        let expected = if n % 2 == 0 {
            double_factorial(n.saturating_sub(1))
        } else {
            n as u128 * double_factorial(n.saturating_sub(2))
        };
        prop_assert_eq!(count, expected);
    }

    #[test]
    fn every_matching_covers_all_but_at_most_one(n in 0usize..9) {
        for m in all_perfect_matchings((1..=n as u32).collect()) {
            let used: BTreeSet<u32> = m.iter().flat_map(|&(a, b)| [a, b]).collect();
            prop_assert_eq!(used.len(), 2 * m.len());
            prop_assert_eq!(used.len(), n - n % 2);
        }
    }

    #[test]
    fn generated_graphs_have_consistent_euler_data(
        valences in prop::collection::vec(1usize..4, 1..4)
    ) {
        prop_assume!(valences.iter().sum::<usize>() <= 8);
        for g in generate_all(&valences, 0).unwrap() {
            if g.is_connected().unwrap() {
                let euler = 2 + g.num_edges() as i64
                    - g.num_vertices() as i64
                    - g.boundaries().len() as i64;
                prop_assert_eq!(euler, 2 * g.genus() as i64);
            }
        }
    }
}
