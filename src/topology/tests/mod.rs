use super::*;
#[path = "debug_invariants.rs"]
mod debug_invariants;

/// Shorthand for a half-edge label in tests.
fn h(raw: u64) -> HalfEdge {
    HalfEdge::new(raw).unwrap()
}

#[test]
fn reexports_resolve() {
    let g = Fatgraph::new([[1, 2]], [[1, 2]]).unwrap();
    let b = FatgraphB::from_fatgraph(&g, &[]).unwrap();
    assert_eq!(b.fatgraph(), &g);
    assert!(Permutation::identity().is_identity());
    assert!(PairingMatrix::from_rows(Vec::<Vec<u8>>::new()).unwrap().is_empty());
    let e: Edge = [h(1), h(2)];
    assert_eq!(g.edges(), &[e]);
}
