//! Core topology types: half-edge labels, permutations, fatgraphs and
//! strand-pairing matrices.

pub mod fatgraph;
pub mod fatgraph_b;
pub mod half_edge;
pub mod pairing;
pub mod permutation;

pub use fatgraph::{Edge, Fatgraph};
pub use fatgraph_b::FatgraphB;
pub use half_edge::HalfEdge;
pub use pairing::PairingMatrix;
pub use permutation::Permutation;

#[cfg(test)]
mod tests;
