use fatgraph::topology::fatgraph::Fatgraph;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Raw vertex cycles and edges of a random fatgraph.
type RawGraph = (Vec<Vec<u64>>, Vec<[u64; 2]>);

fn random_graph(valences: &[usize], rng: &mut SmallRng) -> RawGraph {
    let mut next = 1u64;
    let vertices: Vec<Vec<u64>> = valences
        .iter()
        .map(|&v| {
            let cycle = (next..next + v as u64).collect();
            next += v as u64;
            cycle
        })
        .collect();
    let mut labels: Vec<u64> = (1..next).collect();
    labels.shuffle(rng);
    let pairs = rng.gen_range(0..=labels.len() / 2);
    let edges = labels
        .chunks_exact(2)
        .take(pairs)
        .map(|c| [c[0], c[1]])
        .collect();
    (vertices, edges)
}

/// Applies an injective renaming `h -> 5·σ(h) + 2`.
fn rename((vertices, edges): &RawGraph, rng: &mut SmallRng) -> RawGraph {
    let n = vertices.iter().map(Vec::len).sum::<usize>() as u64;
    let mut sigma: Vec<u64> = (0..n).collect();
    sigma.shuffle(rng);
    let f = |h: u64| 5 * sigma[(h - 1) as usize] + 2;
    (
        vertices.iter().map(|v| v.iter().map(|&h| f(h)).collect()).collect(),
        edges.iter().map(|&[a, b]| [f(a), f(b)]).collect(),
    )
}

proptest! {
    #[test]
    fn invariants_survive_relabeling(
        valences in prop::collection::vec(1usize..6, 1..5),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let raw = random_graph(&valences, &mut rng);
        let renamed = rename(&raw, &mut rng);

        let g = Fatgraph::new(raw.0, raw.1).unwrap();
        let r = Fatgraph::new(renamed.0, renamed.1).unwrap();
        prop_assert_eq!(g.boundaries().len(), r.boundaries().len());
        prop_assert_eq!(g.genus(), r.genus());
        prop_assert_eq!(g.is_connected().unwrap(), r.is_connected().unwrap());
        prop_assert_eq!(g.unpaired().len(), r.unpaired().len());
    }

    #[test]
    fn connected_graphs_satisfy_euler_formula(
        valences in prop::collection::vec(1usize..6, 1..5),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (vertices, edges) = random_graph(&valences, &mut rng);
        let g = Fatgraph::new(vertices, edges).unwrap();
        if g.is_connected().unwrap() {
            let v = g.num_vertices() as i64;
            let e = g.num_edges() as i64;
            let b = g.boundaries().len() as i64;
            prop_assert_eq!(2 - v + e - b, 2 * g.genus() as i64);
        }
        // each half-edge lies on exactly one boundary
        let on_boundaries: usize = g.boundaries().iter().map(Vec::len).sum();
        prop_assert_eq!(on_boundaries, g.half_edges().count());
    }
}

#[test]
fn rotating_a_vertex_cycle_changes_nothing() {
    let a = Fatgraph::new([vec![1, 2, 3], vec![4, 5, 6]], [[1, 4], [2, 5], [3, 6]]).unwrap();
    let b = Fatgraph::new([vec![3, 1, 2], vec![5, 6, 4]], [[6, 3], [4, 1], [5, 2]]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.genus(), b.genus());
}
