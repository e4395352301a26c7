#![cfg_attr(docsrs, feature(doc_cfg))]
//! # fatgraph
//!
//! fatgraph is a Rust library for ribbon graphs (fatgraphs) as used in the
//! topological study of protein folds. A fatgraph is stored as two
//! permutations over half-edge labels, a rotation system for the vertices and
//! a pairing for the edges, from which boundary cycles, genus and
//! connectivity are derived.
//!
//! ## Features
//! - [`Fatgraph`](topology::Fatgraph): validated construction, boundaries,
//!   genus, connectivity
//! - [`FatgraphB`](topology::FatgraphB): beta vertices with interior pairs,
//!   trail validity, and reconstruction from strand-pairing matrices
//! - Exhaustive generation of all fatgraphs with given valences
//!   ([`algs::generate`])
//! - A reader for hydrogen-bond reports ([`io::hbond`])
//!
//! ## Determinism
//!
//! Every operation is a pure function of its input. Cycle listings are
//! canonical (each cycle starts at its smallest label, cycles sorted), and
//! enumeration order is fixed, so repeated runs yield identical results.
//! The optional `rayon` feature parallelizes validity checks without
//! changing result order.
//!
//! ## Usage
//!
//! ```rust
//! use fatgraph::prelude::*;
//!
//! let g = Fatgraph::new([vec![1, 2, 3], vec![4, 5, 6]], [[1, 4], [2, 5], [3, 6]])?;
//! assert_eq!(g.genus(), 1);
//!
//! let connected = generate_all(&[2, 2], 0)?
//!     .into_iter()
//!     .filter(|g| g.is_connected().unwrap_or(false))
//!     .count();
//! assert_eq!(connected, 2);
//! # Ok::<(), FatgraphError>(())
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod fatgraph_error;
pub mod io;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use fatgraph_error::FatgraphError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::generate::{
        GenerationOptions, generate_all, generate_all_b, generate_all_b_with, generate_all_with,
    };
    pub use crate::algs::matching::all_perfect_matchings;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::fatgraph_error::{FatgraphError, StructuralError, ValidationError};
    pub use crate::io::hbond::{BackboneMode, HbondError};
    pub use crate::topology::{Edge, Fatgraph, FatgraphB, HalfEdge, PairingMatrix, Permutation};
}
