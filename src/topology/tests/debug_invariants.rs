use crate::debug_invariants::DebugInvariants;
use crate::topology::fatgraph::Fatgraph;
use crate::topology::fatgraph_b::FatgraphB;

#[test]
fn constructed_graphs_satisfy_invariants() {
    let graphs = [
        Fatgraph::new([vec![1, 2, 3], vec![4, 5, 6]], [[1, 4], [2, 5], [3, 6]]).unwrap(),
        Fatgraph::new([vec![1, 2, 3]], [[1, 2]]).unwrap(),
        Fatgraph::new([vec![7]], Vec::<[u64; 2]>::new()).unwrap(),
        Fatgraph::empty(),
    ];
    for g in &graphs {
        g.validate_invariants().unwrap();
        g.debug_assert_invariants();
    }
}

#[test]
fn beta_graph_shares_base_invariants() {
    let b = FatgraphB::new([[1, 2, 3, 4, 5, 6]], [[3, 6], [4, 5]], [[1, 4], [2, 3], [5, 6]])
        .unwrap();
    b.fatgraph().validate_invariants().unwrap();
}
